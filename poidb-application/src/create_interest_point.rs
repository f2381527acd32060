use std::result;

use poidb_core::gateways::notify::{NotificationEvent, NotificationGateway};
use poidb_db_sqlite::DbReadWrite;

use super::*;
use usecases::{Error, NewInterestPoint};

pub fn create_interest_point(
    connections: &sqlite::Connections,
    ability: &dyn Ability,
    notify: &dyn NotificationGateway,
    acting_user: Option<&User>,
    new_interest_point: NewInterestPoint,
) -> Result<(InterestPoint, Vec<Image>)> {
    let acting_user = authorize_user(ability, acting_user, Action::Create, None)?;
    let (interest_point, images) =
        create_and_add_new_interest_point(connections.exclusive()?, acting_user, new_interest_point)?;

    // Administrators need to approve the new record
    notify.notify(NotificationEvent::InterestPointAdded {
        interest_point: &interest_point,
        images: &images,
    });

    Ok((interest_point, images))
}

fn create_and_add_new_interest_point(
    mut connection: DbReadWrite<'_>,
    acting_user: &User,
    new_interest_point: NewInterestPoint,
) -> result::Result<(InterestPoint, Vec<Image>), Error> {
    connection.transaction(|conn| {
        match usecases::prepare_new_interest_point(conn, new_interest_point, acting_user) {
            Ok(storable) => {
                let (interest_point, images) = usecases::store_new_interest_point(conn, storable)
                    .map_err(|err| {
                        warn!("Failed to store newly created interest point: {}", err);
                        err
                    })?;
                Ok((interest_point, images))
            }
            Err(err) => Err(err),
        }
    })
}
