use std::collections::HashSet;

use anyhow::Result;
use poidb_core::gateways::notify::{NotificationEvent, NotificationGateway, NotificationType};
use poidb_gateways::{
    email::{send_to_json_file::SendToJsonFile, sendmail::Sendmail},
    notify::Notify,
};

use crate::config;

/// Used if no e-mail gateway has been configured.
struct LogOnly;

impl NotificationGateway for LogOnly {
    fn notify(&self, event: NotificationEvent) {
        log::info!(
            "No e-mail gateway configured: skipping notification {:?}",
            event.kind()
        );
    }
}

pub fn notification_gateway(cfg: &config::Config) -> Result<Box<dyn NotificationGateway>> {
    let notify_on: HashSet<_> = [NotificationType::InterestPointAdded].into_iter().collect();
    let administrators = cfg.notify.administrators.clone();
    let gw: Box<dyn NotificationGateway> = match &cfg.email.gateway {
        Some(config::EmailGateway::Sendmail { sender_address }) => Box::new(Notify::new(
            Sendmail::new(sender_address.clone()),
            administrators,
            notify_on,
        )),
        Some(config::EmailGateway::EmailToJsonFile { dir }) => Box::new(Notify::new(
            SendToJsonFile::try_new(dir)?,
            administrators,
            notify_on,
        )),
        None => Box::new(LogOnly),
    };
    Ok(gw)
}
