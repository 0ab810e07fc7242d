//! Sequence numbers for new asset identifiers
//!
//! There is no persisted counter yet, so the default source draws a random
//! number and collisions are possible. Callers that own a real counter plug
//! it in through [`SequenceSource`].

use rand::Rng;

/// Highest sequence number that fits the 4-digit segment
pub const MAX_SEQUENCE: u32 = 9999;

/// Supplies the sequence segment for a new identifier
pub trait SequenceSource: Send + Sync {
    fn next_sequence(&self, asset_type: &str, department: &str, year: i32) -> u32;
}

/// Uniform random draw from `1..=9999`
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSequence;

impl SequenceSource for RandomSequence {
    fn next_sequence(&self, _asset_type: &str, _department: &str, _year: i32) -> u32 {
        rand::thread_rng().gen_range(1..=MAX_SEQUENCE)
    }
}

/// Always returns the same number
#[derive(Debug, Clone, Copy)]
pub struct FixedSequence(pub u32);

impl SequenceSource for FixedSequence {
    fn next_sequence(&self, _asset_type: &str, _department: &str, _year: i32) -> u32 {
        self.0
    }
}
