//! The lz77 module is the dictionary stage of lzhuff.
//!
//! The encoder keeps a trailing window (512 bytes by default) of input it has already passed and
//! looks there for the longest earlier copy of the bytes ahead. Repeats of at least 9 bytes are
//! replaced by a reference to the earlier copy; everything else is written out as literal runs.
//!
//! The decoder replays the blocks in order. References are copied one byte at a time because a
//! reference may reach into bytes the same reference is still producing.
//!

pub mod blocks;
pub mod find_match;
pub mod lz_codec;
pub mod options;
