use jfs::Store;
use poidb_core::{entities::Timestamp, gateways::email::EmailGateway};
use poidb_entities::email::*;
use serde::{Deserialize, Serialize};
use std::{io, path::Path};

/// A dummy email gateway for testing purposes.
pub struct SendToJsonFile {
    json_store: Store,
}

impl SendToJsonFile {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonEmail {
    to: String,
    subject: String,
    body: String,
}

impl JsonEmail {
    fn new(to: &EmailAddress, content: &EmailContent) -> Self {
        Self {
            to: to.to_string(),
            subject: content.subject.clone(),
            body: content.body.clone(),
        }
    }
}

impl EmailGateway for SendToJsonFile {
    fn compose_and_send(&self, recipients: &[EmailAddress], content: &EmailContent) {
        for (i, to) in recipients.iter().enumerate() {
            let now = Timestamp::now().as_millis();
            // The index keeps keys of the same millisecond apart
            let key = format!("{now}-{i}-{}", to.as_str());
            let email = JsonEmail::new(to, content);
            if let Err(err) = self.json_store.save_with_id(&email, &key) {
                log::warn!("Unable to save email in JSON file: {err}");
            }
        }
    }
}
