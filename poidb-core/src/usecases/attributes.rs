use super::prelude::*;
use crate::util::validate::{
    self, trimmed_non_empty, AutoCorrect, InterestPointInvalidation, Validate, ValidationErrors,
};

/// The attributes of an interest point that callers may set.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterestPointAttributes {
    pub name           : String,
    pub summary        : String,
    pub address_line_1 : Option<String>,
    pub address_line_2 : Option<String>,
    pub city           : Option<String>,
    pub state          : Option<String>,
    pub zip            : Option<String>,
    pub latitude       : Option<f64>,
    pub longitude      : Option<f64>,
    pub category_id    : Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewImage {
    pub file_url: String,
}

impl InterestPointAttributes {
    pub fn address(&self) -> Option<Address> {
        let address = Address {
            line_1: self.address_line_1.clone(),
            line_2: self.address_line_2.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
        }
        .auto_correct();
        Some(address).filter(|a| !a.is_empty())
    }

    // Invalid coordinates are dropped, i.e. this must only
    // be used after a successful validation.
    pub fn location(&self) -> Location {
        let pos = match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => MapPoint::try_from_lat_lng_deg(lat, lng).ok(),
            _ => None,
        };
        Location {
            pos,
            address: self.address(),
        }
    }

    pub(crate) fn apply_to(self, interest_point: &mut InterestPoint) {
        interest_point.location = self.location();
        let Self {
            name,
            summary,
            category_id,
            ..
        } = self;
        interest_point.name = name;
        interest_point.summary = summary;
        interest_point.category = category_id.map(Id::from);
    }
}

impl AutoCorrect for InterestPointAttributes {
    fn auto_correct(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self.summary = self.summary.trim().to_owned();
        self.address_line_1 = trimmed_non_empty(self.address_line_1);
        self.address_line_2 = trimmed_non_empty(self.address_line_2);
        self.city = trimmed_non_empty(self.city);
        self.state = trimmed_non_empty(self.state);
        self.zip = trimmed_non_empty(self.zip);
        self.category_id = trimmed_non_empty(self.category_id);
        self
    }
}

impl Validate for InterestPointAttributes {
    type Error = ValidationErrors;
    fn validate(&self) -> std::result::Result<(), Self::Error> {
        let mut errors = ValidationErrors::default();
        if validate::is_blank(&self.name) {
            errors.push(InterestPointInvalidation::NameBlank);
        }
        errors.extend(validate::validate_location(
            self.latitude,
            self.longitude,
            self.address().as_ref(),
        ));
        errors.into_result()
    }
}

impl From<&InterestPoint> for InterestPointAttributes {
    fn from(from: &InterestPoint) -> Self {
        let address = from.location.address.clone().unwrap_or_default();
        Self {
            name: from.name.clone(),
            summary: from.summary.clone(),
            address_line_1: address.line_1,
            address_line_2: address.line_2,
            city: address.city,
            state: address.state,
            zip: address.zip,
            latitude: from.location.pos.map(MapPoint::lat),
            longitude: from.location.pos.map(MapPoint::lng),
            category_id: from.category.as_ref().map(ToString::to_string),
        }
    }
}

/// Collects all invalidations of the attributes, including
/// the referential integrity of the category.
pub(crate) fn collect_invalidations<R>(
    repo: &R,
    attributes: &InterestPointAttributes,
    new_images: &[NewImage],
) -> Result<ValidationErrors>
where
    R: CategoryRepo,
{
    let mut errors = match attributes.validate() {
        Ok(()) => ValidationErrors::default(),
        Err(errors) => errors,
    };
    if let Some(category_id) = &attributes.category_id {
        match repo.get_category(category_id) {
            Ok(_) => (),
            Err(RepoError::NotFound) => errors.push(InterestPointInvalidation::CategoryNotFound),
            Err(err) => return Err(err.into()),
        }
    }
    if new_images.iter().any(|img| validate::is_blank(&img.file_url)) {
        errors.push(InterestPointInvalidation::ImageFileBlank);
    }
    Ok(errors)
}
