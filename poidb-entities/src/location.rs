use crate::{address::*, geo::*};

/// Coordinates are optional if an address is given.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub pos: Option<MapPoint>,
    pub address: Option<Address>,
}
