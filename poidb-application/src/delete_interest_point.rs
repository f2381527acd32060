use poidb_core::gateways::storage::FileStorageGateway;

use super::*;

pub fn delete_interest_point(
    connections: &sqlite::Connections,
    ability: &dyn Ability,
    storage: &dyn FileStorageGateway,
    acting_user: Option<&User>,
    id: &str,
) -> Result<()> {
    let released_images = connections.exclusive()?.transaction(|conn| {
        let current = conn.get_interest_point(id)?;
        authorize_user(ability, acting_user, Action::Destroy, Some(&current))?;
        usecases::delete_interest_point(conn, id)
    })?;

    // Files are only deleted after the records have been detached
    delete_image_files(storage, &released_images);
    Ok(())
}
