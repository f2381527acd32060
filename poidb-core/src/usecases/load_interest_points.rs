use super::prelude::*;

pub fn get_interest_point<R>(repo: &R, id: &str) -> Result<(InterestPoint, Vec<Image>)>
where
    R: InterestPointRepo + ImageRepo,
{
    let interest_point = repo.get_interest_point(id)?;
    let images = repo.images_of_interest_point(id)?;
    Ok((interest_point, images))
}

pub fn load_active_interest_points<R: InterestPointRepo>(repo: &R) -> Result<Vec<InterestPoint>> {
    Ok(repo.active_interest_points()?)
}

pub fn load_all_interest_points<R: InterestPointRepo>(repo: &R) -> Result<Vec<InterestPoint>> {
    Ok(repo.all_interest_points()?)
}
