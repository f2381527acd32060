use super::prelude::*;
use crate::util::validate::{is_blank, InterestPointInvalidation, ValidationErrors};

pub fn create_category<R: CategoryRepoMut>(repo: &R, name: &str) -> Result<Category> {
    let name = name.trim();
    if is_blank(name) {
        let mut errors = ValidationErrors::default();
        errors.push(InterestPointInvalidation::NameBlank);
        return Err(errors.into());
    }
    let mut category = Category {
        id: Id::default(),
        name: name.to_owned(),
    };
    category.id = repo.create_category(category.clone())?;
    log::info!("Created category {} ({})", category.name, category.id);
    Ok(category)
}
