use crate::{id::Id, user::UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: Id,
    pub file_url: String,
    /// The owning interest point or `None` after the owner
    /// has been deleted.
    pub interest_point: Option<Id>,
    pub contributor: UserId,
    pub approver: Option<UserId>,
}
