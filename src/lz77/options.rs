use crate::error::{LzhError, Result};

/// Bytes of already seen input searched for a repeat.
pub const WINDOW_SIZE: usize = 512;
/// Shortest repeat worth a reference. A reference costs 8 bytes, so only longer runs pay off.
pub const MIN_MATCH: usize = 9;

/// Encoder settings for the lz77 stage. The decoder needs neither value: every reference
/// carries its own distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Options {
    pub window_size: usize,
    pub min_match: usize,
}

impl Lz77Options {
    pub fn new(window_size: usize, min_match: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(LzhError::InvalidOptions("window size must be at least 1".into()));
        }
        if min_match == 0 {
            return Err(LzhError::InvalidOptions("minimum match must be at least 1".into()));
        }
        Ok(Self {
            window_size,
            min_match,
        })
    }
}

impl Default for Lz77Options {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            min_match: MIN_MATCH,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_test() {
        let opts = Lz77Options::default();
        assert_eq!(opts.window_size, 512);
        assert_eq!(opts.min_match, 9);
    }

    #[test]
    fn rejects_zero_test() {
        assert!(Lz77Options::new(0, 9).is_err());
        assert!(Lz77Options::new(512, 0).is_err());
        assert!(Lz77Options::new(64, 4).is_ok());
    }
}
