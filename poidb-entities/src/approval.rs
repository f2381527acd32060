use crate::{time::Timestamp, user::UserId};

/// Administrative sign-off. Approver and time are only ever set together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Approval {
    pub approver: UserId,
    pub approved_at: Timestamp,
}

impl Approval {
    pub fn now(approver: UserId) -> Self {
        Self {
            approver,
            approved_at: Timestamp::now(),
        }
    }
}
