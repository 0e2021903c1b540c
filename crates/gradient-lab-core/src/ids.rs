//! Stop id generation.
//!
//! Each editing session owns one [`IdGenerator`]. Ids are issued from a
//! monotonically increasing counter and are never reused for the lifetime of
//! the generator, including across resets and preset loads.

use crate::types::StopId;

/// First id issued by a default session.
pub const DEFAULT_FIRST_ID: u64 = 100;

/// Monotonic counter issuing unique [`StopId`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Create a generator whose first id is `first`.
    pub const fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Issue the next id.
    pub fn next_id(&mut self) -> StopId {
        let id = StopId::from_raw(self.next);
        self.next += 1;
        id
    }

    /// The id that will be issued next, without consuming it.
    #[inline]
    pub fn peek(&self) -> StopId {
        StopId::from_raw(self.next)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::starting_at(DEFAULT_FIRST_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.peek().as_raw(), DEFAULT_FIRST_ID);

        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
        assert_eq!(ids.peek().as_raw(), DEFAULT_FIRST_ID + 3);
    }

    #[test]
    fn test_independent_generators() {
        let mut first = IdGenerator::starting_at(1);
        let mut second = IdGenerator::starting_at(1);
        assert_eq!(first.next_id(), second.next_id());
    }
}
