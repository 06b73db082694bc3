//! Frequency table for the huffman stage.
//!
//! Entries are kept in the order each symbol first appears in the input. That order is written to
//! the stream and is also the order leaves enter the huffman queue, so the decoder rebuilds the
//! exact tree the encoder used.

use log::{error, trace};

use crate::error::{wire_len, LzhError, Result};
use crate::tools::int_codec::{push_i32, read_i32, INT_WIDTH};

/// Bytes used by one serialized entry: i32 count followed by the symbol.
pub const ENTRY_WIDTH: usize = INT_WIDTH + 1;

/// One symbol and the number of times it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreqEntry {
    pub symbol: u8,
    pub count: i32,
}

/// Symbol counts in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreqTable {
    entries: Vec<FreqEntry>,
}

impl FreqTable {
    pub fn from_entries(entries: Vec<FreqEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FreqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the buffer the table describes.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count as usize).sum()
    }

    /// Append `[i32 size][size x {i32 count, u8 symbol}]` to the output.
    pub fn write(&self, out: &mut Vec<u8>) {
        // At most 256 entries, so the size always fits.
        push_i32(out, self.entries.len() as i32);
        for entry in &self.entries {
            push_i32(out, entry.count);
            out.push(entry.symbol);
        }
    }

    /// Read a table written by write(), starting at `*pos`. Entries keep their file order.
    pub fn read(data: &[u8], pos: &mut usize) -> Result<Self> {
        let size = read_i32(data, pos, "frequency table size")?;
        if !(0..=256).contains(&size) {
            error!("Frequency table size {} is out of range", size);
            return Err(LzhError::malformed("frequency table size", *pos - INT_WIDTH));
        }
        let size = size as usize;
        if data.len() - *pos < size * ENTRY_WIDTH {
            error!("Frequency table of {} entries is truncated", size);
            return Err(LzhError::malformed("frequency table entries", *pos));
        }

        let mut seen = [false; 256];
        let mut entries = Vec::with_capacity(size);
        for _ in 0..size {
            let count = read_i32(data, pos, "frequency count")?;
            let symbol = data[*pos];
            if count <= 0 || seen[symbol as usize] {
                error!("Bad frequency entry {:#04x}:{}", symbol, count);
                return Err(LzhError::malformed("frequency entry", *pos - INT_WIDTH));
            }
            seen[symbol as usize] = true;
            *pos += 1;
            entries.push(FreqEntry { symbol, count });
        }
        trace!("Read frequency table {:?}", entries);
        Ok(Self { entries })
    }
}

/// Returns the frequency table of the input data, one entry per distinct symbol in order of first
/// appearance.
pub fn count_frequency(data: &[u8]) -> Result<FreqTable> {
    let mut freqs = vec![0_usize; 256];
    let mut order: Vec<u8> = Vec::with_capacity(256);
    data.iter().for_each(|&el| {
        if freqs[el as usize] == 0 {
            order.push(el);
        }
        freqs[el as usize] += 1;
    });

    let entries = order
        .into_iter()
        .map(|symbol| {
            Ok(FreqEntry {
                symbol,
                count: wire_len("symbol count", freqs[symbol as usize])?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(FreqTable { entries })
}
