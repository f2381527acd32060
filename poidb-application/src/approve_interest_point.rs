use super::*;

pub fn approve_interest_point(
    connections: &sqlite::Connections,
    ability: &dyn Ability,
    acting_user: Option<&User>,
    id: &str,
    version: Revision,
) -> Result<InterestPoint> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let current = conn.get_interest_point(id)?;
        let approver = authorize_user(ability, acting_user, Action::Approve, Some(&current))?;
        usecases::approve_interest_point(conn, id, version, approver)
    })?)
}
