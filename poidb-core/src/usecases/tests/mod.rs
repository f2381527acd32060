use super::prelude::*;
use std::cell::RefCell;

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory repositories for testing the use cases.
#[derive(Default)]
pub struct MockDb {
    pub interest_points: RefCell<Vec<InterestPoint>>,
    // in order of association
    pub images: RefCell<Vec<Image>>,
    pub categories: RefCell<Vec<Category>>,
}

fn assign_id(id: Id) -> Id {
    if id.is_valid() {
        id
    } else {
        Id::new()
    }
}

impl InterestPointRepo for MockDb {
    fn get_interest_point(&self, id: &str) -> RepoResult<InterestPoint> {
        self.interest_points
            .borrow()
            .iter()
            .find(|x| x.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_interest_points(&self) -> RepoResult<Vec<InterestPoint>> {
        Ok(self.interest_points.borrow().clone())
    }

    fn active_interest_points(&self) -> RepoResult<Vec<InterestPoint>> {
        Ok(self
            .interest_points
            .borrow()
            .iter()
            .filter(|x| x.is_approved())
            .cloned()
            .collect())
    }

    fn count_interest_points(&self) -> RepoResult<usize> {
        Ok(self.interest_points.borrow().len())
    }
}

impl InterestPointRepoMut for MockDb {
    fn create_interest_point(&self, mut interest_point: InterestPoint) -> RepoResult<Id> {
        interest_point.id = assign_id(interest_point.id);
        let id = interest_point.id.clone();
        let mut interest_points = self.interest_points.borrow_mut();
        if interest_points.iter().any(|x| x.id == id) {
            return Err(RepoError::AlreadyExists);
        }
        interest_points.push(interest_point);
        Ok(id)
    }

    fn update_interest_point(
        &self,
        interest_point: &InterestPoint,
        expected: Revision,
    ) -> RepoResult<()> {
        let mut interest_points = self.interest_points.borrow_mut();
        let stored = interest_points
            .iter_mut()
            .find(|x| x.id == interest_point.id)
            .ok_or(RepoError::NotFound)?;
        if stored.revision != expected {
            return Err(RepoError::InvalidVersion);
        }
        *stored = interest_point.clone();
        Ok(())
    }

    fn delete_interest_point(&self, id: &str) -> RepoResult<()> {
        let mut interest_points = self.interest_points.borrow_mut();
        let len_before = interest_points.len();
        interest_points.retain(|x| x.id.as_str() != id);
        if interest_points.len() == len_before {
            return Err(RepoError::NotFound);
        }
        for image in self.images.borrow_mut().iter_mut() {
            if image.interest_point.as_ref().map(Id::as_str) == Some(id) {
                image.interest_point = None;
            }
        }
        Ok(())
    }
}

impl ImageRepo for MockDb {
    fn get_image(&self, id: &str) -> RepoResult<Image> {
        self.images
            .borrow()
            .iter()
            .find(|x| x.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn images_of_interest_point(&self, interest_point_id: &str) -> RepoResult<Vec<Image>> {
        Ok(self
            .images
            .borrow()
            .iter()
            .filter(|x| x.interest_point.as_ref().map(Id::as_str) == Some(interest_point_id))
            .cloned()
            .collect())
    }
}

impl ImageRepoMut for MockDb {
    fn add_image(&self, interest_point_id: &str, mut image: Image) -> RepoResult<Id> {
        if !self
            .interest_points
            .borrow()
            .iter()
            .any(|x| x.id.as_str() == interest_point_id)
        {
            return Err(RepoError::NotFound);
        }
        image.id = assign_id(image.id);
        image.interest_point = Some(interest_point_id.into());
        let id = image.id.clone();
        self.images.borrow_mut().push(image);
        Ok(id)
    }

    fn release_images(&self, ids: &[&str]) -> RepoResult<usize> {
        let mut count = 0;
        for image in self.images.borrow_mut().iter_mut() {
            if ids.contains(&image.id.as_str()) && image.interest_point.is_some() {
                image.interest_point = None;
                count += 1;
            }
        }
        Ok(count)
    }
}

impl CategoryRepo for MockDb {
    fn get_category(&self, id: &str) -> RepoResult<Category> {
        self.categories
            .borrow()
            .iter()
            .find(|x| x.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_categories(&self) -> RepoResult<Vec<Category>> {
        Ok(self.categories.borrow().clone())
    }
}

impl CategoryRepoMut for MockDb {
    fn create_category(&self, mut category: Category) -> RepoResult<Id> {
        category.id = assign_id(category.id);
        let id = category.id.clone();
        self.categories.borrow_mut().push(category);
        Ok(id)
    }
}
