#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub line_1 : Option<String>,
    pub line_2 : Option<String>,
    pub city   : Option<String>,
    pub state  : Option<String>,
    pub zip    : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.line_1.is_none()
            && self.line_2.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip.is_none()
    }

    /// An address that is precise enough to be found on a map.
    pub fn is_locatable(&self) -> bool {
        self.line_1.is_some() || self.city.is_some()
    }
}
