use poidb_core::gateways::storage::FileStorageGateway;

use super::*;

/// Stores an uploaded file that can be attached as
/// an image afterwards.
pub fn store_image_file(
    storage: &dyn FileStorageGateway,
    ability: &dyn Ability,
    acting_user: Option<&User>,
    file_name: &str,
    data: &[u8],
) -> Result<usecases::NewImage> {
    authorize_user(ability, acting_user, Action::Create, None)?;
    let file_url = storage.store_file(file_name, data)?;
    debug!("Stored image file {file_name} as {file_url}");
    Ok(usecases::NewImage { file_url })
}

/// Deletes files that have been stored for a request that failed
/// and will never be attached to an interest point.
pub fn discard_image_files(storage: &dyn FileStorageGateway, images: &[usecases::NewImage]) {
    for usecases::NewImage { file_url } in images {
        match storage.delete_file(file_url) {
            Ok(()) => debug!("Discarded image file {file_url}"),
            Err(err) => error!("Failed to discard image file {file_url}: {err}"),
        }
    }
}
