//! Business listing as returned by the search service.

use parcelgen_parcel::{ParcelError, ParcelReader, ParcelWriter, Parcelable};
use url::Url;

use crate::error::{DecodeError, Result};
use crate::json_parser::JsonParser;
use crate::json_util::{coerce_string, get_object, get_str, non_null, opt_double, opt_int, JsonObject};
use crate::location::Location;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Business {
    pub location: Option<Location>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub phone: Option<String>,
    pub display_phone: Option<String>,
    pub rating_image_url: Option<String>,
    pub rating_image_url_small: Option<String>,
    pub snippet_text: Option<String>,
    pub snippet_image_url: Option<String>,
    pub uri: Option<Url>,
    pub mobile_uri: Option<Url>,
    pub distance: f64,
    pub rating: f64,
    pub review_count: i32,
}

impl Business {
    pub fn to_parcel_bytes(&self) -> Vec<u8> {
        parcelgen_parcel::marshall(self)
    }

    pub fn from_parcel_bytes(data: &[u8]) -> Result<Self> {
        parcelgen_parcel::unmarshall(data).map_err(|e| {
            tracing::debug!(entity = "Business", error = %e, "parcel decode failed");
            e.into()
        })
    }

    /// Encodes a batch of businesses as one typed list.
    pub fn list_to_parcel_bytes(list: &[Business]) -> Vec<u8> {
        let mut writer = ParcelWriter::new();
        writer.write_typed_list(list);
        writer.flush()
    }

    pub fn list_from_parcel_bytes(data: &[u8]) -> Result<Vec<Business>> {
        let mut reader = ParcelReader::new(data);
        let list: Vec<Business> = reader.read_typed_list()?;
        match reader.remaining() {
            0 => Ok(list),
            n => Err(ParcelError::TrailingBytes(n).into()),
        }
    }
}

impl Parcelable for Business {
    const CREATOR: &'static str = "Business";

    fn write_to_parcel(&self, parcel: &mut ParcelWriter) {
        parcel.write_parcelable(self.location.as_ref());
        parcel.write_string_value(self.id.as_deref());
        parcel.write_string_value(self.name.as_deref());
        parcel.write_string_value(self.image_url.as_deref());
        parcel.write_string_value(self.phone.as_deref());
        parcel.write_string_value(self.display_phone.as_deref());
        parcel.write_string_value(self.rating_image_url.as_deref());
        parcel.write_string_value(self.rating_image_url_small.as_deref());
        parcel.write_string_value(self.snippet_text.as_deref());
        parcel.write_string_value(self.snippet_image_url.as_deref());
        parcel.write_uri(self.uri.as_ref());
        parcel.write_uri(self.mobile_uri.as_ref());
        parcel.write_double(self.distance);
        parcel.write_double(self.rating);
        parcel.write_int(self.review_count);
    }

    fn read_from_parcel(&mut self, source: &mut ParcelReader<'_>) -> std::result::Result<(), ParcelError> {
        self.location = source.read_parcelable()?;
        self.id = source.read_string_value()?;
        self.name = source.read_string_value()?;
        self.image_url = source.read_string_value()?;
        self.phone = source.read_string_value()?;
        self.display_phone = source.read_string_value()?;
        self.rating_image_url = source.read_string_value()?;
        self.rating_image_url_small = source.read_string_value()?;
        self.snippet_text = source.read_string_value()?;
        self.snippet_image_url = source.read_string_value()?;
        self.uri = source.read_uri()?;
        self.mobile_uri = source.read_uri()?;
        self.distance = source.read_double()?;
        self.rating = source.read_double()?;
        self.review_count = source.read_int()?;
        Ok(())
    }
}

/// Parses an absolute URI. Relative references such as `/biz/joe` are
/// rejected because they have no base to resolve against.
fn parse_uri(key: &'static str, value: &serde_json::Value) -> Result<Url> {
    let s = get_str(key, value)?;
    Url::parse(s).map_err(|e| DecodeError::structure(key, format!("invalid URI `{s}`: {e}")))
}

impl JsonParser for Business {
    const ENTITY: &'static str = "Business";

    /// A null `location` leaves the current location in place, unlike the
    /// list fields of [`Location`] which are reset. `distance`, `rating` and
    /// `review_count` are always overwritten, with zero when absent.
    fn read_from_json(&mut self, json: &JsonObject) -> Result<()> {
        if let Some(v) = non_null(json, "location") {
            let obj = get_object("location", v)?;
            let mut location = Location::default();
            location.read_from_json(obj)?;
            tracing::trace!("decoded nested location");
            self.location = Some(location);
        }
        if let Some(v) = non_null(json, "id") {
            self.id = coerce_string(v);
        }
        if let Some(v) = non_null(json, "name") {
            self.name = coerce_string(v);
        }
        if let Some(v) = non_null(json, "image_url") {
            self.image_url = coerce_string(v);
        }
        if let Some(v) = non_null(json, "phone") {
            self.phone = coerce_string(v);
        }
        if let Some(v) = non_null(json, "display_phone") {
            self.display_phone = coerce_string(v);
        }
        if let Some(v) = non_null(json, "rating_img_url") {
            self.rating_image_url = coerce_string(v);
        }
        if let Some(v) = non_null(json, "rating_img_url_small") {
            self.rating_image_url_small = coerce_string(v);
        }
        if let Some(v) = non_null(json, "snippet_text") {
            self.snippet_text = coerce_string(v);
        }
        if let Some(v) = non_null(json, "snippet_image_url") {
            self.snippet_image_url = coerce_string(v);
        }
        if let Some(v) = non_null(json, "url") {
            self.uri = Some(parse_uri("url", v)?);
        }
        if let Some(v) = non_null(json, "mobile_url") {
            self.mobile_uri = Some(parse_uri("mobile_url", v)?);
        }
        self.distance = opt_double(json, "distance", 0.0);
        self.rating = opt_double(json, "rating", 0.0);
        self.review_count = opt_int(json, "review_count", 0);
        Ok(())
    }
}
