use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

use crate::error::Result;
use crate::lz77::options::{Lz77Options, MIN_MATCH, WINDOW_SIZE};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct LzhOpts {
    /// Vec of names of files to read for input
    pub files: Vec<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Verbosity of user information
    pub verbose: Verbosity,
    /// Window and match settings for the lz77 stage
    pub lz77: Lz77Options,
}

impl LzhOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            force_overwrite: false,
            keep_input_files: false,
            op_mode: Mode::Zip,
            output: Output::File,
            verbose: Verbosity::Errors,
            lz77: Lz77Options::default(),
        }
    }
}

impl Default for LzhOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Compress files with LZ77 followed by Huffman coding",
    long_about = None)]
pub struct Args {
    /// Files to process
    #[clap()]
    files: Vec<String>,

    /// Perform compression on the input files (the default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression on the input files
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Test compressed file integrity
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Overwrite existing output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Keep (don't delete) input files
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Send output to standard out
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Suppress all messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Be verbose (repeat for more detail, up to -vvvv)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: u8,

    /// Bytes of history searched for repeats
    #[clap(long = "window", default_value_t = WINDOW_SIZE)]
    window: usize,

    /// Shortest repeat encoded as a reference
    #[clap(long = "min-match", default_value_t = MIN_MATCH)]
    min_match: usize,
}

/// Parse the process arguments into LzhOpts and set the log level to match.
pub fn lzhopts_init() -> Result<LzhOpts> {
    let opts = opts_from_args(Args::parse())?;
    log::set_max_level(opts.verbose.level_filter());
    report_opts(&opts);
    Ok(opts)
}

/// Put command line information from CLAP into our internal structure.
pub fn opts_from_args(args: Args) -> Result<LzhOpts> {
    let mut opts = LzhOpts::new();
    opts.files = args.files;
    if args.decompress {
        opts.op_mode = Mode::Unzip
    };
    if args.test {
        opts.op_mode = Mode::Test
    };
    opts.force_overwrite = args.force;
    opts.keep_input_files = args.keep;
    if args.stdout {
        opts.output = Output::Stdout
    };
    opts.verbose = match (args.quiet, args.verbose) {
        (true, _) => Verbosity::Quiet,
        (false, 0) => Verbosity::Errors,
        (false, 1) => Verbosity::Warnings,
        (false, 2) => Verbosity::Info,
        (false, 3) => Verbosity::Debug,
        _ => Verbosity::Trace,
    };
    opts.lz77 = Lz77Options::new(args.window, args.min_match)?;
    Ok(opts)
}

fn report_opts(opts: &LzhOpts) {
    info!("---- lzhuff Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    if opts.files.is_empty() {
        warn!("No input files given");
    }
    opts.files
        .iter()
        .for_each(|f| info!("Getting input from the file {}", f));
    info!("Sending output to {}", opts.output);
    info!(
        "Window size {}, minimum match {}",
        opts.lz77.window_size, opts.lz77.min_match
    );
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.keep_input_files {
        info!("Keeping input files")
    };
    info!("---- lzhuff Initialization End ----\n");
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(argv: &[&str]) -> Result<LzhOpts> {
        opts_from_args(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults_test() {
        let opts = parse(&["lzhuff", "notes.txt"]).unwrap();
        assert_eq!(opts.files, vec!["notes.txt".to_string()]);
        assert_eq!(opts.op_mode, Mode::Zip);
        assert_eq!(opts.output, Output::File);
        assert_eq!(opts.verbose, Verbosity::Errors);
        assert_eq!(opts.lz77, Lz77Options::default());
    }

    #[test]
    fn flags_test() {
        let opts = parse(&["lzhuff", "-dkfc", "-vvv", "a.lzh", "b.lzh"]).unwrap();
        assert_eq!(opts.op_mode, Mode::Unzip);
        assert!(opts.keep_input_files);
        assert!(opts.force_overwrite);
        assert_eq!(opts.output, Output::Stdout);
        assert_eq!(opts.verbose, Verbosity::Debug);
        assert_eq!(opts.files.len(), 2);
    }

    #[test]
    fn lz77_settings_test() {
        let opts = parse(&["lzhuff", "--window", "4096", "--min-match", "12", "x"]).unwrap();
        assert_eq!(opts.lz77.window_size, 4096);
        assert_eq!(opts.lz77.min_match, 12);
        assert!(parse(&["lzhuff", "--window", "0", "x"]).is_err());
    }

    #[test]
    fn quiet_wins_test() {
        let opts = parse(&["lzhuff", "-q", "-vv", "-t", "x.lzh"]).unwrap();
        assert_eq!(opts.verbose, Verbosity::Quiet);
        assert_eq!(opts.op_mode, Mode::Test);
    }
}
