//! Block model and wire format of the lz77 stream.
//!
//! A literal block is `[i32 N][N bytes]` with N >= 0. A reference block is `[i32 -L][i32 J]`:
//! copy L bytes starting J bytes back from the end of the output. The sign of the first field is
//! the only thing telling the two apart. There is no end marker; the stream ends with its bytes.

use log::error;

use crate::error::{wire_len, LzhError, Result};
use crate::tools::int_codec::{push_i32, read_i32, INT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Literal(&'a [u8]),
    Reference { length: usize, jump: usize },
}

impl Block<'_> {
    /// Append this block's wire encoding to the output.
    pub fn write(&self, out: &mut Vec<u8>) -> Result<()> {
        match *self {
            Block::Literal(bytes) => {
                push_i32(out, wire_len("literal length", bytes.len())?);
                out.extend_from_slice(bytes);
            }
            Block::Reference { length, jump } => {
                push_i32(out, -wire_len("match length", length)?);
                push_i32(out, wire_len("match jump", jump)?);
            }
        }
        Ok(())
    }
}

/// Reads blocks one at a time from an lz77 stream. Stops after the first error.
pub struct BlockReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BlockReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Byte offset of the next unread block.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn read_block(&mut self) -> Result<Block<'a>> {
        let length = read_i32(self.data, &mut self.pos, "block length")?;
        if length >= 0 {
            let length = length as usize;
            let end = self.pos + length;
            if end > self.data.len() {
                error!(
                    "Literal block of {} bytes at {} runs past the end of the stream",
                    length, self.pos
                );
                return Err(LzhError::malformed("literal block", self.pos));
            }
            let bytes = &self.data[self.pos..end];
            self.pos = end;
            Ok(Block::Literal(bytes))
        } else {
            let jump = read_i32(self.data, &mut self.pos, "match jump")?;
            if jump <= 0 {
                error!("Reference block with jump {}", jump);
                return Err(LzhError::malformed("match jump", self.pos - INT_WIDTH));
            }
            Ok(Block::Reference {
                length: length.unsigned_abs() as usize,
                jump: jump as usize,
            })
        }
    }
}

impl<'a> Iterator for BlockReader<'a> {
    type Item = Result<Block<'a>>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }
        let block = self.read_block();
        if block.is_err() {
            // Nothing after a bad block can be trusted.
            self.pos = self.data.len();
        }
        Some(block)
    }
}
