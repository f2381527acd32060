use poidb_entities::{image::Image, interest_point::InterestPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    InterestPointAdded,
}

#[derive(Debug)]
pub enum NotificationEvent<'a> {
    InterestPointAdded {
        interest_point: &'a InterestPoint,
        images: &'a [Image],
    },
}

impl NotificationEvent<'_> {
    pub const fn kind(&self) -> NotificationType {
        match self {
            Self::InterestPointAdded { .. } => NotificationType::InterestPointAdded,
        }
    }
}

/// Fire-and-forget delivery of notifications.
///
/// Implementations must neither block the caller for a
/// significant amount of time nor report failures back.
pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
