#[macro_use]
extern crate log;

mod approve_interest_point;
mod create_category;
mod create_interest_point;
mod delete_interest_point;
mod load_interest_points;
mod store_image_file;
mod update_interest_point;

pub mod prelude {
    pub use super::{
        approve_interest_point::*, create_category::*, create_interest_point::*,
        delete_interest_point::*, load_interest_points::*, store_image_file::*,
        update_interest_point::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use poidb_core::{
    authorization::{authorize, Ability, Action},
    entities::*,
    repositories::*,
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use poidb_db_sqlite::Connections;
}

// Failures are only logged, the records have already been committed.
fn delete_image_files(
    storage: &dyn poidb_core::gateways::storage::FileStorageGateway,
    images: &[Image],
) {
    for image in images {
        if let Err(err) = storage.delete_file(&image.file_url) {
            error!(
                "Failed to delete file {} of image {}: {}",
                image.file_url, image.id, err
            );
        }
    }
}

/// Checks the permission and returns the acting user.
///
/// Modifications are always attributed to a user, even
/// if a custom ability would permit anonymous access.
pub(crate) fn authorize_user<'a>(
    ability: &dyn Ability,
    acting_user: Option<&'a User>,
    action: Action,
    resource: Option<&InterestPoint>,
) -> std::result::Result<&'a User, usecases::Error> {
    authorize(ability, acting_user, action, resource)?;
    acting_user.ok_or(usecases::Error::Unauthorized)
}
