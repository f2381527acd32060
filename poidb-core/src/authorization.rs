//! Permission checks that gate every use case.
//!
//! The use cases themselves assume that the acting user has
//! already been authorized.

use crate::entities::{InterestPoint, Role, User};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Read,
    Create,
    Update,
    Destroy,
    Approve,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Destroy => "destroy",
            Self::Approve => "approve",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
}

pub trait Ability {
    fn can_perform(
        &self,
        user: Option<&User>,
        action: Action,
        resource: Option<&InterestPoint>,
    ) -> bool;
}

/// Default permissions:
///
/// - everyone may read approved interest points,
/// - users may create interest points and read, update or destroy their own,
/// - admins may do anything, including the approval of interest points.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleBasedAbility;

impl Ability for RoleBasedAbility {
    fn can_perform(
        &self,
        user: Option<&User>,
        action: Action,
        resource: Option<&InterestPoint>,
    ) -> bool {
        let role = user.map(|u| u.role).unwrap_or_default();
        if role == Role::Admin {
            return true;
        }
        let is_own = match (user, resource) {
            (Some(user), Some(ip)) => ip.is_contributed_by(user.id),
            _ => false,
        };
        match action {
            Action::Read => resource.map(|ip| ip.is_approved() || is_own).unwrap_or(true),
            Action::Create => role >= Role::User,
            Action::Update | Action::Destroy => role >= Role::User && is_own,
            Action::Approve => false,
        }
    }
}

pub fn authorize(
    ability: &dyn Ability,
    user: Option<&User>,
    action: Action,
    resource: Option<&InterestPoint>,
) -> Result<(), Error> {
    if ability.can_perform(user, action, resource) {
        return Ok(());
    }
    log::debug!(
        "Denied {action} of {} for user {:?}",
        resource.map(|ip| ip.id.as_str()).unwrap_or("interest points"),
        user.map(|u| u.id)
    );
    if user.is_none() {
        Err(Error::Unauthorized)
    } else {
        Err(Error::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poidb_entities::builders::*;

    fn user(id: i64, role: Role) -> User {
        User {
            id: id.into(),
            role,
        }
    }

    #[test]
    fn guests_may_only_read_approved_interest_points() {
        let ability = RoleBasedAbility;
        let approved = InterestPoint::build().approved_by(9).finish();
        let pending = InterestPoint::build().finish();
        assert!(ability.can_perform(None, Action::Read, Some(&approved)));
        assert!(ability.can_perform(None, Action::Read, None));
        assert!(!ability.can_perform(None, Action::Read, Some(&pending)));
        assert_eq!(
            Err(Error::Unauthorized),
            authorize(&ability, None, Action::Create, None)
        );
    }

    #[test]
    fn users_may_only_modify_their_own_interest_points() {
        let ability = RoleBasedAbility;
        let own = InterestPoint::build().contributor(5).finish();
        let foreign = InterestPoint::build().contributor(6).finish();
        let u = user(5, Role::User);
        assert!(ability.can_perform(Some(&u), Action::Create, None));
        assert!(ability.can_perform(Some(&u), Action::Read, Some(&own)));
        assert!(ability.can_perform(Some(&u), Action::Update, Some(&own)));
        assert!(ability.can_perform(Some(&u), Action::Destroy, Some(&own)));
        assert!(!ability.can_perform(Some(&u), Action::Read, Some(&foreign)));
        assert_eq!(
            Err(Error::Forbidden),
            authorize(&ability, Some(&u), Action::Update, Some(&foreign))
        );
        assert!(!ability.can_perform(Some(&u), Action::Approve, Some(&own)));
    }

    #[test]
    fn guest_role_cannot_create() {
        let u = user(5, Role::Guest);
        assert_eq!(
            Err(Error::Forbidden),
            authorize(&RoleBasedAbility, Some(&u), Action::Create, None)
        );
    }

    #[test]
    fn admins_may_approve() {
        let admin = user(1, Role::Admin);
        let ip = InterestPoint::build().contributor(5).finish();
        assert!(authorize(&RoleBasedAbility, Some(&admin), Action::Approve, Some(&ip)).is_ok());
        assert!(authorize(&RoleBasedAbility, Some(&admin), Action::Destroy, Some(&ip)).is_ok());
    }
}
