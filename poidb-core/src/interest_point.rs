//! Rules for the default image and the approval of an interest point.

use crate::entities::{Id, Image, InterestPoint};

/// Selects the first associated image as the default image,
/// unless a default image has already been selected.
///
/// Returns `true` if the default image has been changed.
pub fn select_default_image(interest_point: &mut InterestPoint, images: &[Image]) -> bool {
    if interest_point.default_image.is_some() {
        return false;
    }
    match images.first() {
        Some(first) => {
            debug_assert!(first.id.is_valid());
            interest_point.default_image = Some(first.id.clone());
            true
        }
        None => false,
    }
}

/// Clears the default image if it is one of the removed images.
///
/// A subsequent [`select_default_image`] will then pick one
/// of the remaining images.
pub fn release_default_image<'a>(
    interest_point: &mut InterestPoint,
    removed_image_ids: impl IntoIterator<Item = &'a Id>,
) -> bool {
    let Some(default_image) = &interest_point.default_image else {
        return false;
    };
    if removed_image_ids.into_iter().any(|id| id == default_image) {
        interest_point.default_image = None;
        return true;
    }
    false
}

/// Every edit invalidates a prior approval.
pub fn revoke_approval(interest_point: &mut InterestPoint) {
    if let Some(approval) = interest_point.approval.take() {
        log::debug!(
            "Revoking approval of interest point {} by {} at {}",
            interest_point.id,
            approval.approver,
            approval.approved_at
        );
    }
}

pub fn is_default_image_owned(interest_point: &InterestPoint, images: &[Image]) -> bool {
    interest_point
        .default_image
        .as_ref()
        .map(|id| images.iter().any(|img| &img.id == id))
        .unwrap_or(true)
}
