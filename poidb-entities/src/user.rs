use std::fmt;

use strum::{Display, EnumString};

/// Reference to a user account that is managed outside of this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl From<i64> for UserId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<UserId> for i64 {
    fn from(from: UserId) -> Self {
        from.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, EnumString, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Role {
    #[default]
    Guest = 0,
    User  = 1,
    Admin = 2,
}

/// The user on whose behalf an operation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub role: Role,
}
