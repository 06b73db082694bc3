//! lzhuff: a two stage byte compressor.
//!
//! Provides lossless compression of in-memory buffers by running an LZ77 dictionary coder and
//! then Huffman coding its output. Decompression reverses the two stages.
//!
//! The stream format is private to this crate. Every integer field is a 4 byte big-endian i32.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> lzhuff -z test.txt`
//!
//! This will compress the file and create the file test.txt.lzh.
//! The original file will be deleted unless -k is given.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod lz77;
pub mod tools;

pub use compression::compress::compress_bytes;
pub use compression::decompress::decompress_bytes;
pub use error::{LzhError, Result};
pub use huffman_coding::huffman::{huf_decode, huf_encode};
pub use lz77::lz_codec::{lz_decode, lz_encode};
pub use lz77::options::Lz77Options;
