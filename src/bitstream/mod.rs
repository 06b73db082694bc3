//! The bitstream module forms the bit-level I/O subsystem for lzhuff.
//!
//! Huffman codes are variable length, so the entropy stage writes its output one bit at a time.
//! BitPacker packs bits MSB-first and keeps an exact count of the logical bits written; the
//! count is stored in the stream header so the reader knows where the data ends even though the
//! final byte is padded with zeros.
//!
//! BitReader walks the same packing back out of a byte slice, returning None rather than reading
//! past the end of its input.
//!
pub mod bitpacker;
pub mod bitreader;
