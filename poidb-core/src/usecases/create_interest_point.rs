use super::{attributes::collect_invalidations, prelude::*};
use crate::{interest_point::select_default_image, util::validate::AutoCorrect};

#[derive(Debug, Clone, Default)]
pub struct NewInterestPoint {
    pub attributes: InterestPointAttributes,
    // Overridden by the acting user
    pub contributor_id: Option<UserId>,
    pub images: Vec<NewImage>,
}

#[derive(Debug, Clone)]
pub struct Storable {
    interest_point: InterestPoint,
    images: Vec<Image>,
}

pub fn prepare_new_interest_point<R>(
    repo: &R,
    new_interest_point: NewInterestPoint,
    acting_user: &User,
) -> Result<Storable>
where
    R: CategoryRepo,
{
    let NewInterestPoint {
        attributes,
        contributor_id,
        images,
    } = new_interest_point;
    if let Some(contributor_id) = contributor_id.filter(|id| *id != acting_user.id) {
        log::warn!(
            "Ignoring contributor {contributor_id} of new interest point in favor of user {}",
            acting_user.id
        );
    }
    let contributor = acting_user.id;

    let attributes = attributes.auto_correct();
    let errors = collect_invalidations(repo, &attributes, &images)?;
    if !errors.is_empty() {
        log::debug!("Invalid new interest point: {errors}");
        return Err(errors.into());
    }

    let mut interest_point = InterestPoint {
        // assigned when stored
        id: Id::default(),
        revision: Revision::initial(),
        created_at: Timestamp::now(),
        name: String::new(),
        summary: String::new(),
        location: Location::default(),
        category: None,
        contributor,
        approval: None,
        default_image: None,
    };
    attributes.apply_to(&mut interest_point);

    let images = images
        .into_iter()
        .map(|NewImage { file_url }| Image {
            id: Id::default(),
            file_url: file_url.trim().to_owned(),
            interest_point: None,
            contributor,
            approver: None,
        })
        .collect();

    Ok(Storable {
        interest_point,
        images,
    })
}

pub fn store_new_interest_point<R>(
    repo: &R,
    storable: Storable,
) -> Result<(InterestPoint, Vec<Image>)>
where
    R: InterestPointRepoMut + ImageRepoMut,
{
    let Storable {
        mut interest_point,
        images,
    } = storable;
    log::debug!("Storing new interest point: {interest_point:?}");
    let id = repo.create_interest_point(interest_point.clone())?;
    interest_point.id = id;
    for mut image in images {
        image.interest_point = Some(interest_point.id.clone());
        repo.add_image(interest_point.id.as_str(), image)?;
    }
    let images = repo.images_of_interest_point(interest_point.id.as_str())?;
    if select_default_image(&mut interest_point, &images) {
        repo.update_interest_point(&interest_point, interest_point.revision)?;
    }
    log::info!(
        "Created interest point {} with {} image(s)",
        interest_point.id,
        images.len()
    );
    Ok((interest_point, images))
}
