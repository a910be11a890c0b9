//! Request tokens for async results
//!
//! Every connection attempt and every upload is stamped with a token when it
//! is issued. A result carries its token back, and the update loop applies it
//! only if the token is still the latest one issued. Results of superseded
//! requests are dropped, whatever order they complete in.

use std::fmt;

/// Identifies one connection attempt, and the handle it produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

/// Identifies one upload submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UploadTicket(u64);

impl From<u64> for ConnectionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<u64> for UploadTicket {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn#{}", self.0)
    }
}

impl fmt::Display for UploadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "upload#{}", self.0)
    }
}

/// Monotonic token issuer. Tokens start at 1.
#[derive(Debug, Default)]
pub struct Sequence {
    last: u64,
}

impl Sequence {
    pub fn issue<T: From<u64>>(&mut self) -> T {
        self.last += 1;
        T::from(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let mut seq = Sequence::default();
        let a: UploadTicket = seq.issue();
        let b: UploadTicket = seq.issue();
        assert!(b > a);
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let mut seq = Sequence::default();
        let id: ConnectionId = seq.issue();
        assert_eq!(id.to_string(), "conn#1");
    }
}
