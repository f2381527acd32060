use super::prelude::*;

/// Deletes the interest point and returns the images that
/// have been released by it.
///
/// The files of the released images are not touched.
pub fn delete_interest_point<R>(repo: &R, id: &str) -> Result<Vec<Image>>
where
    R: InterestPointRepoMut + ImageRepoMut,
{
    let interest_point = repo.get_interest_point(id)?;
    let mut images = repo.images_of_interest_point(id)?;
    if !images.is_empty() {
        let image_ids: Vec<_> = images.iter().map(|img| img.id.as_str()).collect();
        let count = repo.release_images(&image_ids)?;
        debug_assert_eq!(count, images.len());
    }
    repo.delete_interest_point(id)?;
    for image in &mut images {
        image.interest_point = None;
    }
    log::info!(
        "Deleted interest point {} and released {} image(s)",
        interest_point.id,
        images.len()
    );
    Ok(images)
}
