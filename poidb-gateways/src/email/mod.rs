pub mod send_to_json_file;
pub mod sendmail;

pub use poidb_core::gateways::email::EmailGateway;
