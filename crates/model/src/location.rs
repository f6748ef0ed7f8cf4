//! Street location of a business.

use parcelgen_parcel::{ParcelError, ParcelReader, ParcelWriter, Parcelable};

use crate::error::Result;
use crate::json_parser::JsonParser;
use crate::json_util::{coerce_string, get_string_list, non_null, opt_double, JsonObject};

/// Value of `geo_accuracy` when the source does not report one.
pub const GEO_ACCURACY_UNKNOWN: f64 = -1.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub address: Vec<String>,
    pub display_address: Vec<String>,
    pub neighborhoods: Vec<String>,
    pub city: Option<String>,
    pub state_code: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub cross_streets: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub geo_accuracy: f64,
}

impl Location {
    pub fn to_parcel_bytes(&self) -> Vec<u8> {
        parcelgen_parcel::marshall(self)
    }

    pub fn from_parcel_bytes(data: &[u8]) -> Result<Self> {
        parcelgen_parcel::unmarshall(data).map_err(|e| {
            tracing::debug!(entity = "Location", error = %e, "parcel decode failed");
            e.into()
        })
    }
}

impl Parcelable for Location {
    const CREATOR: &'static str = "Location";

    fn write_to_parcel(&self, parcel: &mut ParcelWriter) {
        parcel.write_string_list(&self.address);
        parcel.write_string_list(&self.display_address);
        parcel.write_string_list(&self.neighborhoods);
        parcel.write_string_value(self.city.as_deref());
        parcel.write_string_value(self.state_code.as_deref());
        parcel.write_string_value(self.postal_code.as_deref());
        parcel.write_string_value(self.country_code.as_deref());
        parcel.write_string_value(self.cross_streets.as_deref());
        parcel.write_double(self.latitude);
        parcel.write_double(self.longitude);
        parcel.write_double(self.geo_accuracy);
    }

    fn read_from_parcel(&mut self, source: &mut ParcelReader<'_>) -> std::result::Result<(), ParcelError> {
        self.address = source.read_string_list()?;
        self.display_address = source.read_string_list()?;
        self.neighborhoods = source.read_string_list()?;
        self.city = source.read_string_value()?;
        self.state_code = source.read_string_value()?;
        self.postal_code = source.read_string_value()?;
        self.country_code = source.read_string_value()?;
        self.cross_streets = source.read_string_value()?;
        self.latitude = source.read_double()?;
        self.longitude = source.read_double()?;
        self.geo_accuracy = source.read_double()?;
        Ok(())
    }
}

impl JsonParser for Location {
    const ENTITY: &'static str = "Location";

    /// List fields and `geo_accuracy` are reset to their defaults when their
    /// key is missing or null. The optional strings and the coordinates keep
    /// their prior value.
    fn read_from_json(&mut self, json: &JsonObject) -> Result<()> {
        self.address = get_string_list(non_null(json, "address"));
        self.display_address = get_string_list(non_null(json, "display_address"));
        self.neighborhoods = get_string_list(non_null(json, "neighborhoods"));
        if let Some(v) = non_null(json, "city") {
            self.city = coerce_string(v);
        }
        if let Some(v) = non_null(json, "state_code") {
            self.state_code = coerce_string(v);
        }
        if let Some(v) = non_null(json, "postal_code") {
            self.postal_code = coerce_string(v);
        }
        if let Some(v) = non_null(json, "country_code") {
            self.country_code = coerce_string(v);
        }
        if let Some(v) = non_null(json, "cross_streets") {
            self.cross_streets = coerce_string(v);
        }
        if non_null(json, "latitude").is_some() {
            self.latitude = opt_double(json, "latitude", 0.0);
        }
        if non_null(json, "longitude").is_some() {
            self.longitude = opt_double(json, "longitude", 0.0);
        }
        self.geo_accuracy = opt_double(json, "geo_accuracy", GEO_ACCURACY_UNKNOWN);
        Ok(())
    }
}
