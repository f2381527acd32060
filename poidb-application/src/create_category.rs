use super::*;

/// Only administrators may add categories.
pub fn create_category(
    connections: &sqlite::Connections,
    acting_user: Option<&User>,
    name: &str,
) -> Result<Category> {
    match acting_user {
        None => return Err(usecases::Error::Unauthorized.into()),
        Some(user) if user.role != Role::Admin => return Err(usecases::Error::Forbidden.into()),
        Some(_) => {}
    }
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::create_category(conn, name))?)
}
