use std::fs;

use log::{info, warn};

use super::output::{finish_input, write_output};
use crate::error::Result;
use crate::huffman_coding::huffman::huf_encode;
use crate::lz77::lz_codec::lz_encode;
use crate::lz77::options::Lz77Options;
use crate::tools::cli::LzhOpts;

/// Suffix added to compressed files.
pub const SUFFIX: &str = ".lzh";

/// Compress a buffer: lz77 blocks, then huffman coding of the block stream.
pub fn compress_bytes(data: &[u8], opts: &Lz77Options) -> Result<Vec<u8>> {
    let blocks = lz_encode(data, opts)?;
    huf_encode(&blocks)
}

/// Name of the compressed file for an input file.
pub fn compressed_name(file: &str) -> String {
    format!("{}{}", file, SUFFIX)
}

/// Compress every file named in opts.
pub fn compress(opts: &LzhOpts) -> Result<()> {
    for file in &opts.files {
        if file.ends_with(SUFFIX) {
            warn!("{} already has the {} suffix", file, SUFFIX);
        }
        let data = fs::read(file)?;
        let packed = compress_bytes(&data, &opts.lz77)?;
        report(file, data.len(), packed.len());
        write_output(opts, &compressed_name(file), &packed)?;
        finish_input(opts, file)?;
    }
    Ok(())
}

/// Log the size change for one file.
fn report(file: &str, before: usize, after: usize) {
    if before == 0 {
        info!("{}: empty input, {} bytes written", file, after);
        return;
    }
    info!(
        "{}: {} -> {} bytes, {:.2}% of original",
        file,
        before,
        after,
        after as f64 * 100.0 / before as f64
    );
}
