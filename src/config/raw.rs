use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("poidb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub storage: Option<Storage>,
    pub email: Option<Email>,
    pub gateway: Option<Gateway>,
    pub notify: Option<Notify>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Storage {
    pub upload_dir: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Config::default().storage.expect("Storage configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Email {
    pub gateway: Option<EmailGateway>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmailGateway {
    Sendmail,
    EmailToJsonFile,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub sendmail: Option<Sendmail>,
    pub email_to_json_file: Option<EmailToJsonFile>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Sendmail {
    pub sender_address: String,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EmailToJsonFile {
    pub dir: PathBuf,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Notify {
    pub administrators: Vec<String>,
}

impl Default for Notify {
    fn default() -> Self {
        Config::default().notify.expect("Notify configuration")
    }
}
