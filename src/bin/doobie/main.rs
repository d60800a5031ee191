mod error;
mod logger;

use self::error::*;
use self::logger::*;

use std::io::stdin;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Parser;
use doobie::hash::Algorithm;
use doobie::DigestSink;
use doobie::StreamHasher;
use log::LevelFilter;

/// Hash in a pipe.
///
/// Copies standard input to standard output and writes the hex digest of the data to standard
/// error or to the specified file.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Hash algorithm.
    ///
    /// Possible values: md5, sha1, sha224, sha256, sha384, sha512.
    #[arg(
        short = 'a',
        long = "algorithm",
        env = "DOOBIE_ALGORITHM",
        default_value = "md5",
        value_name = "ALGORITHM"
    )]
    algorithm: Algorithm,

    /// Write the digest to this file instead of standard error.
    #[arg(short = 'o', long = "output", env = "DOOBIE_OUTPUT", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Read input in chunks of this size.
    #[arg(
        short = 'b',
        long = "chunk-size",
        env = "DOOBIE_CHUNK_SIZE",
        default_value = "1024",
        value_name = "BYTES"
    )]
    chunk_size: NonZeroUsize,

    /// Fail unless the digest matches this one.
    #[arg(short = 'c', long = "check", value_name = "HASH")]
    check: Option<String>,

    /// Report progress on standard error.
    ///
    /// Progress is never reported when the digest is written to standard error or when standard
    /// error is not a terminal.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbosity: u8,

    /// Maximum log level.
    #[arg(
        long = "log-level",
        env = "DOOBIE_LOG",
        default_value = "warn",
        value_name = "LEVEL"
    )]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    match do_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn do_main() -> Result<ExitCode, Error> {
    let args = Args::parse();
    Logger::init(args.log_level)?;
    let expected = args
        .check
        .as_deref()
        .map(|s| args.algorithm.parse_hash(s))
        .transpose()?;
    let mut hasher =
        StreamHasher::new(args.algorithm, args.verbosity).with_chunk_size(args.chunk_size);
    let input = stdin().lock();
    let actual = match args.output {
        Some(ref path) => {
            let file = fs_err::File::create(path)?;
            hasher.run_stdio(input, DigestSink::Writer(file))?
        }
        None => hasher.run_stdio(input, DigestSink::<fs_err::File>::Progress)?,
    };
    if let Some(expected) = expected {
        if expected != actual {
            if args.output.is_none() {
                // Terminate the digest line.
                eprintln!();
            }
            return Err(Error::HashMismatch(expected.into(), actual.into()));
        }
        log::info!("Hash matches: {}", actual);
    }
    Ok(ExitCode::SUCCESS)
}
