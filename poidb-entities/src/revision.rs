use std::fmt;

pub type RevisionValue = u64;

/// Version of an interest point that is bumped by every content update.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Default)]
pub struct Revision(RevisionValue);

impl Revision {
    pub const fn initial() -> Self {
        Self(0)
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<Revision> for RevisionValue {
    fn from(from: Revision) -> Self {
        from.0
    }
}

impl From<RevisionValue> for Revision {
    fn from(from: RevisionValue) -> Self {
        Self(from)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
