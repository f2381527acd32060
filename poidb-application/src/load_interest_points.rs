use super::*;

pub fn load_interest_point(
    connections: &sqlite::Connections,
    ability: &dyn Ability,
    acting_user: Option<&User>,
    id: &str,
) -> Result<(InterestPoint, Vec<Image>)> {
    let (interest_point, images) = usecases::get_interest_point(&connections.shared()?, id)?;
    authorize(ability, acting_user, Action::Read, Some(&interest_point))
        .map_err(usecases::Error::from)?;
    Ok((interest_point, images))
}

pub fn load_active_interest_points(connections: &sqlite::Connections) -> Result<Vec<InterestPoint>> {
    Ok(usecases::load_active_interest_points(&connections.shared()?)?)
}

/// All interest points the acting user is allowed to read.
pub fn load_readable_interest_points(
    connections: &sqlite::Connections,
    ability: &dyn Ability,
    acting_user: Option<&User>,
) -> Result<Vec<InterestPoint>> {
    let interest_points = usecases::load_all_interest_points(&connections.shared()?)?;
    Ok(interest_points
        .into_iter()
        .filter(|ip| ability.can_perform(acting_user, Action::Read, Some(ip)))
        .collect())
}

pub fn load_categories(connections: &sqlite::Connections) -> Result<Vec<Category>> {
    Ok(connections.shared()?.all_categories()?)
}
