//! The compression module joins the two stages and wraps them for whole files.
//!
//! Compression runs the lz77 stage over the input and then huffman codes the resulting block
//! stream:
//! - LZ77: replace repeats of 9 or more bytes with a (length, jump) reference into the last 512
//!   bytes of input.
//! - Huffman coding: encode frequent byte values of the block stream with shorter bit codes.
//!
//! Decompression is the exact inverse, huffman decoding first and lz77 replay second. Neither
//! layer adds framing; both stream formats end exactly where their bytes end.
//!
//! The file wrappers read a whole file into memory, run the in-memory codec and write the result
//! next to the input (or to stdout).
//!

pub mod compress;
pub mod decompress;
mod output;
