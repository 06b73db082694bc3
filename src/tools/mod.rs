//! The tools module provides several helper functions for lzhuff.
//!
//! The tools are:
//! - cli: Command line interface and user settable options.
//! - freq_count: Frequency table for the huffman stage, in first-appearance order.
//! - int_codec: The 4 byte big-endian integer fields used by both stream formats.
//!
pub mod cli;
pub mod freq_count;
pub mod int_codec;
