use std::fmt;

use thiserror::Error;

pub type Degrees = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordRangeError {
    #[error("Latitude is out of range")]
    Latitude,
    #[error("Longitude is out of range")]
    Longitude,
}

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: Degrees,
    lng: Degrees,
}

impl MapPoint {
    pub const LAT_MAX: Degrees = 90.0;
    pub const LNG_MAX: Degrees = 180.0;

    pub fn is_valid_lat(lat: Degrees) -> bool {
        lat.is_finite() && (-Self::LAT_MAX..=Self::LAT_MAX).contains(&lat)
    }

    pub fn is_valid_lng(lng: Degrees) -> bool {
        lng.is_finite() && (-Self::LNG_MAX..=Self::LNG_MAX).contains(&lng)
    }

    pub fn try_from_lat_lng_deg(lat: Degrees, lng: Degrees) -> Result<Self, CoordRangeError> {
        if !Self::is_valid_lat(lat) {
            return Err(CoordRangeError::Latitude);
        }
        if !Self::is_valid_lng(lng) {
            return Err(CoordRangeError::Longitude);
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> Degrees {
        self.lat
    }

    pub const fn lng(self) -> Degrees {
        self.lng
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
