pub mod authorization;
pub mod gateways;
pub mod interest_point;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use poidb_entities::{
        address::*, approval::*, category::*, email::*, geo::*, id::*, image::*,
        interest_point::*, location::*, revision::*, time::*, user::*,
    };
}

pub use repositories::Error as RepoError;
