use std::{collections::HashSet, sync::Arc};

use poidb_core::gateways::notify::{NotificationEvent, NotificationGateway, NotificationType};
use poidb_entities::email::*;

use crate::{admin_communication, email::EmailGateway};

/// Notifies the administrators by e-mail.
#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
    administrators: Vec<EmailAddress>,
    notify_on: HashSet<NotificationType>,
}

impl Notify {
    pub fn new<G>(
        gw: G,
        administrators: Vec<EmailAddress>,
        notify_on: HashSet<NotificationType>,
    ) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self {
            email_gw: Arc::new(gw),
            administrators,
            notify_on,
        }
    }

    fn skip(&self, ev: &NotificationEvent) -> bool {
        !self.notify_on.contains(&ev.kind())
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent) {
        use NotificationEvent as E;
        if self.skip(&event) {
            return;
        }
        if self.administrators.is_empty() {
            log::debug!("No administrators to notify about {:?}", event.kind());
            return;
        }
        match event {
            E::InterestPointAdded {
                interest_point,
                images,
            } => {
                let content = admin_communication::interest_point_added_email(interest_point, images);
                log::info!(
                    "Sending e-mails to {} administrators after new interest point {} added",
                    self.administrators.len(),
                    interest_point.id,
                );
                self.email_gw
                    .compose_and_send(&self.administrators, &content);
            }
        }
    }
}
