//! The huffman module is the entropy stage of lzhuff. It runs over the block stream produced by
//! the lz77 stage.
//!
//! A single frequency table covers the whole buffer. The table is written to the stream in the
//! order each symbol first appeared, and the decoder feeds it to the same queue in the same
//! order. Equal weights are broken by queue insertion order, so both sides always build the same
//! tree from the same table.
//!
//! Codes are the LEFT/RIGHT path from the root to a leaf, packed MSB-first. A buffer with only
//! one distinct symbol gets a zero length code and no payload at all.
//!

pub mod huffman;
