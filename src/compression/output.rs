use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::{error, info};

use crate::error::{LzhError, Result};
use crate::tools::cli::{LzhOpts, Output};

/// Write a finished buffer to its destination. Existing files are only replaced with --force.
pub(crate) fn write_output(opts: &LzhOpts, fname: &str, data: &[u8]) -> Result<()> {
    match opts.output {
        Output::Stdout => {
            let mut out = io::stdout().lock();
            out.write_all(data)?;
            out.flush()?;
        }
        Output::File => {
            if Path::new(fname).exists() && !opts.force_overwrite {
                error!("{} already exists. Use --force to overwrite it.", fname);
                return Err(LzhError::Io(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} already exists", fname),
                )));
            }
            let mut f_out = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(fname)?;
            f_out.write_all(data)?;
            info!("Wrote {} bytes to {}", data.len(), fname);
        }
    }
    Ok(())
}

/// Remove an input file once its output is safely written, unless asked to keep it.
pub(crate) fn finish_input(opts: &LzhOpts, fname: &str) -> Result<()> {
    if opts.keep_input_files || opts.output == Output::Stdout {
        return Ok(());
    }
    fs::remove_file(fname)?;
    info!("Removed {}", fname);
    Ok(())
}
