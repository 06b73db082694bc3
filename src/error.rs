//! Error types for the lzhuff codec.

use thiserror::Error;

/// Error variants for compression and decompression.
#[derive(Debug, Error)]
pub enum LzhError {
    /// A length or count prefix points past the end of the input, or a field is out of range.
    #[error("malformed stream at byte {offset}: {context}")]
    MalformedStream {
        /// What was being read when the problem was found.
        context: &'static str,
        /// Byte offset into the stream being decoded.
        offset: usize,
    },

    /// The encoder was asked for a symbol its own tree does not contain.
    #[error("symbol {0:#04x} is not in the huffman tree")]
    SymbolNotInTree(u8),

    /// The huffman queue was empty when a node was required.
    #[error("huffman tree construction failed: {0}")]
    TreeConstruction(&'static str),

    /// A length or count does not fit in the 32 bit fields of the stream format.
    #[error("{field} of {value} does not fit in a 32 bit stream field")]
    InputTooLarge {
        /// Name of the field that overflowed.
        field: &'static str,
        /// The value that was too large.
        value: usize,
    },

    /// User supplied options that cannot drive the encoder.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// An I/O error occurred in the file wrappers.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LzhError {
    /// Shorthand for building a MalformedStream error.
    pub fn malformed(context: &'static str, offset: usize) -> Self {
        LzhError::MalformedStream { context, offset }
    }
}

/// Convert a length to the i32 used on the wire.
pub(crate) fn wire_len(field: &'static str, value: usize) -> Result<i32> {
    i32::try_from(value).map_err(|_| LzhError::InputTooLarge { field, value })
}

/// A specialized Result type for lzhuff operations.
pub type Result<T> = std::result::Result<T, LzhError>;
