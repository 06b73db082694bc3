use std::fs;

use log::{error, info, warn};

use super::compress::SUFFIX;
use super::output::{finish_input, write_output};
use crate::error::Result;
use crate::huffman_coding::huffman::huf_decode;
use crate::lz77::lz_codec::lz_decode;
use crate::tools::cli::LzhOpts;

/// Decompress a buffer written by compress_bytes: huffman decode, then replay the lz77 blocks.
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let blocks = huf_decode(data)?;
    lz_decode(&blocks)
}

/// Name of the restored file: the input minus its suffix, or with .out added if it had none.
pub fn decompressed_name(file: &str) -> String {
    match file.strip_suffix(SUFFIX) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => format!("{}.out", file),
    }
}

/// Decompress every file named in opts.
pub fn decompress(opts: &LzhOpts) -> Result<()> {
    for file in &opts.files {
        if !file.ends_with(SUFFIX) {
            warn!("{} does not end in {}", file, SUFFIX);
        }
        let data = fs::read(file)?;
        let restored = decompress_bytes(&data)?;
        info!("{}: {} -> {} bytes", file, data.len(), restored.len());
        write_output(opts, &decompressed_name(file), &restored)?;
        finish_input(opts, file)?;
    }
    Ok(())
}

/// Check that every file named in opts decompresses cleanly. Nothing is written.
/// Returns the number of files that failed.
pub fn test(opts: &LzhOpts) -> Result<usize> {
    let mut failed = 0;
    for file in &opts.files {
        let data = fs::read(file)?;
        match decompress_bytes(&data) {
            Ok(restored) => info!("{}: ok ({} bytes)", file, restored.len()),
            Err(e) => {
                error!("{}: {}", file, e);
                failed += 1;
            }
        }
    }
    Ok(failed)
}
