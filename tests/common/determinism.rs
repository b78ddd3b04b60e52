//! Deterministic values for building stored records by hand

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Sequential ids, so hand-built legacy records are reproducible
pub struct DeterministicUuidGenerator {
    counter: AtomicU64,
}

impl DeterministicUuidGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }

    pub fn next(&self) -> Uuid {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Uuid::from_u128(n as u128)
    }

    pub fn reset(&self) {
        self.counter.store(1, Ordering::SeqCst);
    }

    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

impl Default for DeterministicUuidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed `lastUpdated` for hand-built records (2024-03-04 05:06:07 UTC)
pub const TEST_TIMESTAMP: &str = "2024-03-04T05:06:07.000Z";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_uuid_generator() {
        let gen = DeterministicUuidGenerator::new();
        let id1 = gen.next();
        let id2 = gen.next();

        assert_ne!(id1, id2);
        assert_eq!(gen.current(), 3);
    }

    #[test]
    fn test_uuid_generator_reset() {
        let gen = DeterministicUuidGenerator::new();
        let id1 = gen.next();
        gen.reset();
        assert_eq!(id1, gen.next());
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        assert!(chrono::DateTime::parse_from_rfc3339(TEST_TIMESTAMP).is_ok());
    }
}
