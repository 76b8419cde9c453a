// Job Picker Port (for deterministic testing)

use rand::Rng;

/// Random selection interface (allows deterministic picks in tests)
pub trait JobPicker: Send + Sync {
    /// Pick an index in `0..len`, uniformly. Callers guarantee `len >= 1`.
    fn pick(&self, len: usize) -> usize;
}

/// Thread-local RNG picker (production)
pub struct ThreadRngPicker;

impl JobPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_stays_in_bounds() {
        let picker = ThreadRngPicker;
        for len in 1..=8 {
            for _ in 0..32 {
                assert!(picker.pick(len) < len);
            }
        }
    }
}
