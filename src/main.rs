//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::ExitCode;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use lzhuff::compression::compress::compress;
use lzhuff::compression::decompress::{decompress, test};
use lzhuff::tools::cli::{lzhopts_init, Mode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> ExitCode {
    // Available log levels are Error, Warn, Info, Debug, Trace. Messages go to stderr so
    // --stdout output stays clean.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }

    let options = match lzhopts_init() {
        Ok(options) => options,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => compress(&options).map(|_| true),
        Mode::Unzip => decompress(&options).map(|_| true),
        Mode::Test => test(&options).map(|failed| {
            if failed > 0 {
                error!("{} of {} files failed", failed, options.files.len());
            }
            failed == 0
        }),
    };

    match result {
        Ok(true) => {
            info!("Done.\n");
            ExitCode::SUCCESS
        }
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
