use super::{attributes::collect_invalidations, prelude::*};
use crate::{
    interest_point::{release_default_image, revoke_approval, select_default_image},
    util::validate::{AutoCorrect, InterestPointInvalidation},
};

/// A complete replacement of the attributes of an interest point.
#[derive(Debug, Clone, Default)]
pub struct UpdateInterestPoint {
    /// The revision the changes are based on.
    pub version: u64,
    pub attributes: InterestPointAttributes,
    pub new_images: Vec<NewImage>,
    pub removed_images: Vec<String>,
    pub default_image_id: Option<String>,
}

/// The outcome of a stored update.
#[derive(Debug, Clone)]
pub struct UpdatedInterestPoint {
    pub interest_point: InterestPoint,
    pub images: Vec<Image>,
    /// Removed images that have been detached. Their files
    /// are left to the caller.
    pub released_images: Vec<Image>,
}

#[derive(Debug, Clone)]
pub struct UpdatedStorable {
    old_interest_point: InterestPoint,
    attributes: InterestPointAttributes,
    new_images: Vec<Image>,
    removed_images: Vec<Id>,
    default_image: Option<Id>,
}

pub fn prepare_updated_interest_point<R>(
    repo: &R,
    id: &str,
    update: UpdateInterestPoint,
    acting_user: &User,
) -> Result<UpdatedStorable>
where
    R: InterestPointRepo + ImageRepo + CategoryRepo,
{
    let UpdateInterestPoint {
        version,
        attributes,
        new_images,
        removed_images,
        default_image_id,
    } = update;
    let old_interest_point = repo.get_interest_point(id)?;
    if old_interest_point.revision != Revision::from(version) {
        log::info!(
            "Rejecting update of interest point {id} based on revision {version} (current: {})",
            old_interest_point.revision
        );
        return Err(Error::InvalidVersion);
    }

    let attributes = attributes.auto_correct();
    let mut errors = collect_invalidations(repo, &attributes, &new_images)?;

    let owned_images = repo.images_of_interest_point(id)?;
    let is_owned = |image_id: &Id| owned_images.iter().any(|img| &img.id == image_id);
    let removed_images: Vec<Id> = removed_images.into_iter().map(Id::from).collect();
    if !removed_images.iter().all(is_owned) {
        errors.push(InterestPointInvalidation::ForeignImage);
    }
    let default_image = default_image_id
        .and_then(|id| id.parse::<Id>().ok())
        .filter(Id::is_valid);
    if let Some(default_image) = &default_image {
        if !is_owned(default_image) || removed_images.contains(default_image) {
            errors.push(InterestPointInvalidation::ForeignDefaultImage);
        }
    }
    if !errors.is_empty() {
        log::debug!("Invalid update of interest point {id}: {errors}");
        return Err(errors.into());
    }

    let new_images = new_images
        .into_iter()
        .map(|NewImage { file_url }| Image {
            id: Id::default(),
            file_url: file_url.trim().to_owned(),
            interest_point: Some(old_interest_point.id.clone()),
            contributor: acting_user.id,
            approver: None,
        })
        .collect();

    Ok(UpdatedStorable {
        old_interest_point,
        attributes,
        new_images,
        removed_images,
        default_image,
    })
}

pub fn store_updated_interest_point<R>(
    repo: &R,
    storable: UpdatedStorable,
) -> Result<UpdatedInterestPoint>
where
    R: InterestPointRepoMut + ImageRepoMut,
{
    let UpdatedStorable {
        old_interest_point,
        attributes,
        new_images,
        removed_images,
        default_image,
    } = storable;
    let id = old_interest_point.id.clone();
    let mut interest_point = old_interest_point;
    let expected_revision = interest_point.revision;

    for image in new_images {
        repo.add_image(id.as_str(), image)?;
    }
    let mut released_images = Vec::with_capacity(removed_images.len());
    if !removed_images.is_empty() {
        released_images = repo
            .images_of_interest_point(id.as_str())?
            .into_iter()
            .filter(|img| removed_images.contains(&img.id))
            .collect();
        let ids: Vec<_> = removed_images.iter().map(Id::as_str).collect();
        repo.release_images(&ids)?;
        release_default_image(&mut interest_point, &removed_images);
        for image in &mut released_images {
            image.interest_point = None;
        }
    }
    let images = repo.images_of_interest_point(id.as_str())?;

    // A first image becomes the default before anything else changes
    if interest_point.default_image.is_none() {
        select_default_image(&mut interest_point, &images);
    }
    revoke_approval(&mut interest_point);
    attributes.apply_to(&mut interest_point);
    if let Some(default_image) = default_image {
        interest_point.default_image = Some(default_image);
    }
    interest_point.revision = expected_revision.next();

    log::debug!("Storing updated interest point: {interest_point:?}");
    repo.update_interest_point(&interest_point, expected_revision)?;
    log::info!(
        "Updated interest point {} to revision {}",
        interest_point.id,
        interest_point.revision
    );
    Ok(UpdatedInterestPoint {
        interest_point,
        images,
        released_images,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use poidb_entities::builders::*;

    fn update_interest_point(
        db: &MockDb,
        id: &str,
        update: UpdateInterestPoint,
        user: &User,
    ) -> Result<(InterestPoint, Vec<Image>)> {
        let storable = prepare_updated_interest_point(db, id, update, user)?;
        let UpdatedInterestPoint {
            interest_point,
            images,
            released_images: _,
        } = store_updated_interest_point(db, storable)?;
        Ok((interest_point, images))
    }

    fn contributor() -> User {
        User {
            id: 5.into(),
            role: Role::User,
        }
    }

    fn approved_lighthouse(db: &MockDb) -> InterestPoint {
        let ip = InterestPoint::build()
            .name("Lighthouse")
            .summary("Old summary")
            .pos(MapPoint::try_from_lat_lng_deg(44.1, -87.9).unwrap())
            .contributor(5)
            .approved_by(3)
            .finish();
        db.interest_points.borrow_mut().push(ip.clone());
        ip
    }

    fn add_image(db: &MockDb, ip: &InterestPoint, id: &str) {
        db.images
            .borrow_mut()
            .push(Image::build().id(id).interest_point(ip.id.as_str()).finish());
    }

    fn change_summary(ip: &InterestPoint, summary: &str) -> UpdateInterestPoint {
        let mut attributes = InterestPointAttributes::from(ip);
        attributes.summary = summary.into();
        UpdateInterestPoint {
            version: ip.revision.into(),
            attributes,
            ..Default::default()
        }
    }

    #[test]
    fn update_revokes_approval() {
        let db = MockDb::default();
        let ip = approved_lighthouse(&db);
        assert!(ip.is_approved());
        let update = change_summary(&ip, "New summary");
        let (updated, _) =
            update_interest_point(&db, ip.id.as_str(), update, &contributor()).unwrap();
        assert!(updated.approval.is_none());
        assert_eq!("New summary", updated.summary);
        assert_eq!(ip.revision.next(), updated.revision);
        let stored = db.get_interest_point(ip.id.as_str()).unwrap();
        assert!(stored.approval.is_none());
        assert_eq!("New summary", stored.summary);
    }

    #[test]
    fn unchanged_update_revokes_approval_too() {
        let db = MockDb::default();
        let ip = approved_lighthouse(&db);
        let update = change_summary(&ip, &ip.summary);
        let (updated, _) =
            update_interest_point(&db, ip.id.as_str(), update, &contributor()).unwrap();
        assert!(!updated.is_approved());
    }

    #[test]
    fn first_added_image_becomes_the_default() {
        let db = MockDb::default();
        let ip = approved_lighthouse(&db);
        let mut update = change_summary(&ip, "With image");
        update.new_images = vec![
            NewImage {
                file_url: "image/a.jpg".into(),
            },
            NewImage {
                file_url: "image/b.jpg".into(),
            },
        ];
        let (updated, images) =
            update_interest_point(&db, ip.id.as_str(), update, &contributor()).unwrap();
        assert_eq!(2, images.len());
        assert_eq!("image/a.jpg", images[0].file_url);
        assert_eq!(Some(images[0].id.clone()), updated.default_image);
    }

    #[test]
    fn keep_default_image_when_adding_more() {
        let db = MockDb::default();
        let ip = approved_lighthouse(&db);
        add_image(&db, &ip, "first");
        let mut update = change_summary(&ip, "x");
        update.new_images = vec![NewImage {
            file_url: "image/b.jpg".into(),
        }];
        let (updated, _) =
            update_interest_point(&db, ip.id.as_str(), update, &contributor()).unwrap();
        assert_eq!(Some("first".into()), updated.default_image);
    }

    #[test]
    fn removing_the_default_image_selects_the_next_one() {
        let db = MockDb::default();
        let ip = approved_lighthouse(&db);
        add_image(&db, &ip, "first");
        add_image(&db, &ip, "second");
        db.interest_points.borrow_mut()[0].default_image = Some("first".into());
        let mut update = change_summary(&ip, "x");
        update.removed_images = vec!["first".into()];
        let (updated, images) =
            update_interest_point(&db, ip.id.as_str(), update, &contributor()).unwrap();
        assert_eq!(1, images.len());
        assert_eq!(Some("second".into()), updated.default_image);
        let released = db.get_image("first").unwrap();
        assert!(released.interest_point.is_none());
    }

    #[test]
    fn return_removed_images_with_their_files() {
        let db = MockDb::default();
        let ip = approved_lighthouse(&db);
        db.images.borrow_mut().push(
            Image::build()
                .id("first")
                .file_url("image/first.jpg")
                .interest_point(ip.id.as_str())
                .finish(),
        );
        add_image(&db, &ip, "second");
        let mut update = change_summary(&ip, "x");
        update.removed_images = vec!["first".into()];
        let storable =
            prepare_updated_interest_point(&db, ip.id.as_str(), update, &contributor()).unwrap();
        let updated = store_updated_interest_point(&db, storable).unwrap();
        assert_eq!(1, updated.released_images.len());
        let released = &updated.released_images[0];
        assert_eq!("image/first.jpg", released.file_url);
        assert!(released.interest_point.is_none());
        assert_eq!(1, updated.images.len());
    }

    #[test]
    fn nothing_released_without_removed_images() {
        let db = MockDb::default();
        let ip = approved_lighthouse(&db);
        add_image(&db, &ip, "first");
        let update = change_summary(&ip, "x");
        let storable =
            prepare_updated_interest_point(&db, ip.id.as_str(), update, &contributor()).unwrap();
        let updated = store_updated_interest_point(&db, storable).unwrap();
        assert!(updated.released_images.is_empty());
    }

    #[test]
    fn choose_another_default_image() {
        let db = MockDb::default();
        let ip = approved_lighthouse(&db);
        add_image(&db, &ip, "first");
        add_image(&db, &ip, "second");
        let mut update = change_summary(&ip, "x");
        update.default_image_id = Some("second".into());
        let (updated, _) =
            update_interest_point(&db, ip.id.as_str(), update, &contributor()).unwrap();
        assert_eq!(Some("second".into()), updated.default_image);
    }

    #[test]
    fn reject_foreign_default_image() {
        let db = MockDb::default();
        let ip = approved_lighthouse(&db);
        let other = InterestPoint::build().finish();
        add_image(&db, &other, "foreign");
        let mut update = change_summary(&ip, "x");
        update.default_image_id = Some("foreign".into());
        update.removed_images = vec!["foreign".into()];
        let Err(Error::Validation(errors)) =
            update_interest_point(&db, ip.id.as_str(), update, &contributor())
        else {
            panic!("expected validation errors");
        };
        assert!(errors.contains(InterestPointInvalidation::ForeignDefaultImage));
        assert!(errors.contains(InterestPointInvalidation::ForeignImage));
        let stored = db.get_interest_point(ip.id.as_str()).unwrap();
        assert!(stored.is_approved());
        assert_eq!(Some(other.id), db.get_image("foreign").unwrap().interest_point);
    }

    #[test]
    fn invalid_update_changes_nothing() {
        let db = MockDb::default();
        let ip = approved_lighthouse(&db);
        let mut update = change_summary(&ip, "x");
        update.attributes.name = "".into();
        update.attributes.latitude = None;
        update.attributes.longitude = None;
        update.new_images = vec![NewImage {
            file_url: "image/a.jpg".into(),
        }];
        let Err(Error::Validation(errors)) =
            update_interest_point(&db, ip.id.as_str(), update, &contributor())
        else {
            panic!("expected validation errors");
        };
        assert!(errors.contains(InterestPointInvalidation::NameBlank));
        assert!(errors.contains(InterestPointInvalidation::LocationBlank));
        assert_eq!(ip, db.get_interest_point(ip.id.as_str()).unwrap());
        assert!(db.images.borrow().is_empty());
    }

    #[test]
    fn reject_outdated_version() {
        let db = MockDb::default();
        let ip = approved_lighthouse(&db);
        let first = change_summary(&ip, "first");
        let second = change_summary(&ip, "second");
        update_interest_point(&db, ip.id.as_str(), first, &contributor()).unwrap();
        assert!(matches!(
            update_interest_point(&db, ip.id.as_str(), second, &contributor()),
            Err(Error::InvalidVersion)
        ));
        assert_eq!("first", db.get_interest_point(ip.id.as_str()).unwrap().summary);
    }

    #[test]
    fn update_missing_interest_point() {
        let db = MockDb::default();
        let ip = InterestPoint::build().finish();
        let update = change_summary(&ip, "x");
        assert!(matches!(
            update_interest_point(&db, ip.id.as_str(), update, &contributor()),
            Err(Error::NotFound)
        ));
    }
}
