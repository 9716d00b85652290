use serde::{Deserialize, Serialize};

use crate::config::constants::{
    EARTH_RADIUS_KM, MAX_LATITUDE_DEG, MAX_LONGITUDE_DEG, MIN_LATITUDE_DEG, MIN_LONGITUDE_DEG,
};

#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

impl std::fmt::Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::InvalidCoordinate {
                latitude,
                longitude,
            } => write!(
                f,
                "Invalid coordinate: latitude {} must be in [-90, 90], longitude {} in [-180, 180]",
                latitude, longitude
            ),
        }
    }
}

impl std::error::Error for GeoError {}

/// A geographic point in degrees. Plain value, no clamping on construction;
/// callers that accept external input run `validate` before using it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn validate(&self) -> Result<(), GeoError> {
        let lat_ok = (MIN_LATITUDE_DEG..=MAX_LATITUDE_DEG).contains(&self.latitude);
        let lon_ok = (MIN_LONGITUDE_DEG..=MAX_LONGITUDE_DEG).contains(&self.longitude);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(GeoError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    /// Great-circle distance to `other` in kilometres, haversine formula.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
    }
}
