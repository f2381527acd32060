use poidb_core::gateways::storage::FileStorageGateway;

use super::*;

pub fn update_interest_point(
    connections: &sqlite::Connections,
    ability: &dyn Ability,
    storage: &dyn FileStorageGateway,
    acting_user: Option<&User>,
    id: &str,
    update: usecases::UpdateInterestPoint,
) -> Result<(InterestPoint, Vec<Image>)> {
    let usecases::UpdatedInterestPoint {
        interest_point,
        images,
        released_images,
    } = connections.exclusive()?.transaction(|conn| {
        let current = conn.get_interest_point(id)?;
        let acting_user = authorize_user(ability, acting_user, Action::Update, Some(&current))?;
        let storable = usecases::prepare_updated_interest_point(conn, id, update, acting_user)?;
        usecases::store_updated_interest_point(conn, storable).map_err(|err| {
            warn!("Failed to store updated interest point: {}", err);
            err
        })
    })?;

    // Removed images are gone for good after the commit
    delete_image_files(storage, &released_images);

    Ok((interest_point, images))
}
