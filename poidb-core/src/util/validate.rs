use std::fmt;

use crate::entities::{Address, MapPoint};
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Location,
    Latitude,
    Longitude,
    Category,
    Images,
    DefaultImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterestPointInvalidation {
    #[error("Name can't be blank")]
    NameBlank,
    #[error("Location can't be blank")]
    LocationBlank,
    #[error("Latitude can't be blank")]
    LatitudeBlank,
    #[error("Longitude can't be blank")]
    LongitudeBlank,
    #[error("Latitude is invalid")]
    LatitudeInvalid,
    #[error("Longitude is invalid")]
    LongitudeInvalid,
    #[error("Category does not exist")]
    CategoryNotFound,
    #[error("Image file can't be blank")]
    ImageFileBlank,
    #[error("Image does not belong to this interest point")]
    ForeignImage,
    #[error("Default image does not belong to this interest point")]
    ForeignDefaultImage,
}

impl InterestPointInvalidation {
    pub const fn field(&self) -> Field {
        use InterestPointInvalidation as I;
        match self {
            I::NameBlank => Field::Name,
            I::LocationBlank => Field::Location,
            I::LatitudeBlank | I::LatitudeInvalid => Field::Latitude,
            I::LongitudeBlank | I::LongitudeInvalid => Field::Longitude,
            I::CategoryNotFound => Field::Category,
            I::ImageFileBlank | I::ForeignImage => Field::Images,
            I::ForeignDefaultImage => Field::DefaultImage,
        }
    }
}

/// All field-level errors of a single validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<InterestPointInvalidation>);

impl ValidationErrors {
    pub fn push(&mut self, invalidation: InterestPointInvalidation) {
        if !self.0.contains(&invalidation) {
            self.0.push(invalidation);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, invalidation: InterestPointInvalidation) -> bool {
        self.0.contains(&invalidation)
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.0.iter().any(|x| x.field() == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InterestPointInvalidation> {
        self.0.iter()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Extend<InterestPointInvalidation> for ValidationErrors {
    fn extend<T: IntoIterator<Item = InterestPointInvalidation>>(&mut self, iter: T) {
        for x in iter {
            self.push(x);
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.messages().join(","))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Checks a pair of optional coordinates together with an optional
/// address. Coordinates are optional if a locatable address is given.
pub fn validate_location(
    lat: Option<f64>,
    lng: Option<f64>,
    address: Option<&Address>,
) -> Vec<InterestPointInvalidation> {
    use InterestPointInvalidation as I;
    let mut invalidations = Vec::new();
    match (lat, lng) {
        (Some(lat), Some(lng)) => {
            if !MapPoint::is_valid_lat(lat) {
                invalidations.push(I::LatitudeInvalid);
            }
            if !MapPoint::is_valid_lng(lng) {
                invalidations.push(I::LongitudeInvalid);
            }
        }
        (Some(lat), None) => {
            if !MapPoint::is_valid_lat(lat) {
                invalidations.push(I::LatitudeInvalid);
            }
            invalidations.push(I::LongitudeBlank);
        }
        (None, Some(lng)) => {
            invalidations.push(I::LatitudeBlank);
            if !MapPoint::is_valid_lng(lng) {
                invalidations.push(I::LongitudeInvalid);
            }
        }
        (None, None) => {
            if !address.map(Address::is_locatable).unwrap_or(false) {
                invalidations.push(I::LocationBlank);
            }
        }
    }
    invalidations
}

impl AutoCorrect for Address {
    fn auto_correct(mut self) -> Self {
        self.line_1 = trimmed_non_empty(self.line_1);
        self.line_2 = trimmed_non_empty(self.line_2);
        self.city = trimmed_non_empty(self.city);
        self.state = trimmed_non_empty(self.state);
        self.zip = trimmed_non_empty(self.zip);
        self
    }
}

pub fn trimmed_non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}
