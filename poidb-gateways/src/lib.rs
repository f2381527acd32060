//! # poidb-gateways
//!
//! Implementations of the outbound collaborators of the core:
//! e-mail delivery, administrator notifications and file storage.

mod admin_communication;

pub mod email;
pub mod notify;
pub mod storage;
