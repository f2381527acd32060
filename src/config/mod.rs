use anyhow::{anyhow, Result};
use poidb_core::entities::EmailAddress;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "poidb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub storage: Storage,
    pub email: Email,
    pub notify: Notify,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct Storage {
    /// File system directory for uploaded images.
    pub upload_dir: PathBuf,
}

pub struct Email {
    pub gateway: Option<EmailGateway>,
}

#[derive(Debug, Clone)]
pub enum EmailGateway {
    Sendmail {
        sender_address: EmailAddress,
    },
    /// For local testing purposes
    EmailToJsonFile {
        /// File system directory for writing emails into JSON files.
        dir: PathBuf,
    },
}

pub struct Notify {
    pub administrators: Vec<EmailAddress>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            storage,
            email,
            gateway,
            notify,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must not be zero"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::Storage { upload_dir } = storage.unwrap_or_default();
        let storage = Storage { upload_dir };

        let email_gateway = match email.and_then(|m| m.gateway) {
            Some(gw_name) => {
                let toml_name = format!("{gw_name:?}");
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::EmailGateway::Sendmail => {
                        let raw::Sendmail { sender_address } =
                            gateway.sendmail.ok_or_else(|| {
                                anyhow!("Missing '{toml_name}' gateway configuration")
                            })?;
                        let sender_address = sender_address
                            .parse::<EmailAddress>()
                            .map_err(|err| anyhow!("Invalid sender address: {err}"))?;
                        log::info!("Use sendmail gateway");
                        EmailGateway::Sendmail { sender_address }
                    }
                    raw::EmailGateway::EmailToJsonFile => {
                        let raw::EmailToJsonFile { dir } =
                            gateway.email_to_json_file.ok_or_else(|| {
                                anyhow!("Missing '{toml_name}' gateway configuration")
                            })?;
                        log::info!("Use JSON file email gateway ({})", dir.display());
                        EmailGateway::EmailToJsonFile { dir }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let email = Email {
            gateway: email_gateway,
        };

        let raw::Notify { administrators } = notify.unwrap_or_default();
        let administrators = administrators
            .iter()
            .map(|addr| {
                addr.parse::<EmailAddress>()
                    .map_err(|err| anyhow!("Invalid administrator address '{addr}': {err}"))
            })
            .collect::<Result<_>>()?;
        let notify = Notify { administrators };

        Ok(Self {
            db,
            storage,
            email,
            notify,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg: Config = Config::try_load_from_file_or_default(file).unwrap();
        assert!(cfg.email.gateway.is_none());
        assert!(cfg.notify.administrators.is_empty());
        assert!(cfg.db.conn_pool_size > 0);
    }

    #[test]
    fn configure_sendmail_gateway() {
        let raw: raw::Config = toml::from_str(
            r#"
            [email]
            gateway = "sendmail"

            [gateway.sendmail]
            sender-address = "poidb@example.org"

            [notify]
            administrators = ["admin@example.org", "\"Second Admin\" <second@example.org>"]
            "#,
        )
        .unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert!(matches!(
            cfg.email.gateway,
            Some(EmailGateway::Sendmail { ref sender_address }) if sender_address.as_str() == "poidb@example.org"
        ));
        assert_eq!(2, cfg.notify.administrators.len());
        // Sections that are missing fall back to the defaults
        assert_eq!("uploads", cfg.storage.upload_dir.to_str().unwrap());
    }

    #[test]
    fn reject_missing_gateway_configuration() {
        let raw: raw::Config = toml::from_str(
            r#"
            [email]
            gateway = "email-to-json-file"

            [gateway.sendmail]
            sender-address = "poidb@example.org"
            "#,
        )
        .unwrap();
        assert!(Config::try_from(raw).is_err());
    }

    #[test]
    fn reject_invalid_administrator_addresses() {
        let raw: raw::Config = toml::from_str(
            r#"
            [notify]
            administrators = ["admin@example.org, other@example.org"]
            "#,
        )
        .unwrap();
        assert!(Config::try_from(raw).is_err());
    }
}
