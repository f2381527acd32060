use crate::{
    approval::Approval, id::Id, location::Location, revision::Revision, time::Timestamp,
    user::UserId,
};

/// A user contributed, mappable location.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestPoint {
    pub id: Id,
    pub revision: Revision,
    pub created_at: Timestamp,
    pub name: String,
    pub summary: String,
    pub location: Location,
    pub category: Option<Id>,
    pub contributor: UserId,
    pub approval: Option<Approval>,
    /// Either `None` or the id of one of the images
    /// that are owned by this interest point.
    pub default_image: Option<Id>,
}

impl InterestPoint {
    pub fn is_approved(&self) -> bool {
        self.approval.is_some()
    }

    pub fn is_contributed_by(&self, user: UserId) -> bool {
        self.contributor == user
    }
}
