#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # poidb-entities
//!
//! Reusable, agnostic domain entities for user contributed points of interest.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod approval;
pub mod category;
pub mod email;
pub mod geo;
pub mod id;
pub mod image;
pub mod interest_point;
pub mod location;
pub mod revision;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
