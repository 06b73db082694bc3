use super::options::Lz77Options;

/// The longest usable repeat found at a position. length == 0 means nothing worth encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Match {
    pub length: usize,
    pub jump: usize,
}

impl Match {
    pub fn is_none(&self) -> bool {
        self.length == 0
    }
}

/// Search the window behind `position` for the longest run matching the bytes at `position`.
///
/// Candidates are tried oldest first. A candidate may not run past `position`, and only a run of
/// at least `min_match` bytes that is strictly longer than the best so far replaces it.
pub fn find_match(data: &[u8], position: usize, opts: &Lz77Options) -> Match {
    let mut best = Match::default();
    if position >= data.len() {
        return best;
    }

    let window_start = position.saturating_sub(opts.window_size);
    let window = &data[window_start..position];
    let ahead = &data[position..];

    for (start, &first) in window.iter().enumerate() {
        if first != ahead[0] {
            continue;
        }
        let length = window[start..]
            .iter()
            .zip(ahead)
            .take_while(|(a, b)| a == b)
            .count();
        if length >= opts.min_match && length > best.length {
            best = Match {
                length,
                jump: window.len() - start,
            };
        }
    }
    best
}
