use serde::{Deserialize, Serialize};

/// Monotonic id source. Values start at 1 and are never handed out twice,
/// no matter how quickly `next` is called.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { last: 0 }
    }

    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// Last value handed out, 0 if none yet
    pub fn last(&self) -> u64 {
        self.last
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_in_tight_loop() {
        let mut seq = IdSequence::new();
        let ids: HashSet<u64> = (0..10_000).map(|_| seq.next()).collect();
        assert_eq!(ids.len(), 10_000);
        assert_eq!(seq.last(), 10_000);
    }

    #[test]
    fn test_ids_are_increasing() {
        let mut seq = IdSequence::default();
        let a = seq.next();
        let b = seq.next();
        assert!(b > a);
        assert_eq!(a, 1);
    }
}
