mod approve_interest_point;
mod attributes;
mod create_category;
mod create_interest_point;
mod delete_interest_point;
mod error;
mod load_interest_points;
mod update_interest_point;

#[cfg(test)]
pub mod tests;

pub use self::{
    approve_interest_point::*, attributes::*, create_category::*, create_interest_point::*,
    delete_interest_point::*, error::Error, load_interest_points::*, update_interest_point::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use super::attributes::{InterestPointAttributes, NewImage};
    pub use crate::{entities::*, repositories::*, RepoError};
}
