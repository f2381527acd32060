// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("The version of the object is invalid")]
    InvalidVersion,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait InterestPointRepo {
    fn get_interest_point(&self, id: &str) -> Result<InterestPoint>;

    fn all_interest_points(&self) -> Result<Vec<InterestPoint>>;

    // Only approved interest points
    fn active_interest_points(&self) -> Result<Vec<InterestPoint>>;

    fn count_interest_points(&self) -> Result<usize>;
}

/// Modifications of interest points.
///
/// Only implemented by connections with exclusive write access.
pub trait InterestPointRepoMut: InterestPointRepo {
    /// Stores a new interest point and returns its id.
    ///
    /// An empty id is replaced by a newly generated one.
    fn create_interest_point(&self, interest_point: InterestPoint) -> Result<Id>;

    /// Fails with [`Error::InvalidVersion`] if the stored revision
    /// doesn't match `expected`.
    fn update_interest_point(&self, interest_point: &InterestPoint, expected: Revision)
        -> Result<()>;

    // Images of the deleted interest point lose their owner but are kept.
    fn delete_interest_point(&self, id: &str) -> Result<()>;
}

pub trait ImageRepo {
    fn get_image(&self, id: &str) -> Result<Image>;

    // Ordered by association, i.e. the first associated image comes first.
    fn images_of_interest_point(&self, interest_point_id: &str) -> Result<Vec<Image>>;
}

pub trait ImageRepoMut: ImageRepo {
    /// Associates a new image with an interest point and returns
    /// the assigned id.
    fn add_image(&self, interest_point_id: &str, image: Image) -> Result<Id>;

    fn release_images(&self, ids: &[&str]) -> Result<usize>;
}

pub trait CategoryRepo {
    fn get_category(&self, id: &str) -> Result<Category>;
    fn all_categories(&self) -> Result<Vec<Category>>;
}

pub trait CategoryRepoMut: CategoryRepo {
    fn create_category(&self, category: Category) -> Result<Id>;
}
