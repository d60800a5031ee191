use std::io::stderr;
use std::io::stdout;
use std::io::IsTerminal;
use std::io::Read;
use std::io::Stderr;
use std::io::StderrLock;
use std::io::Write;
use std::num::NonZeroUsize;

use crate::format_size;
use crate::hash::Algorithm;
use crate::hash::AnyHash;
use crate::hash::Hasher;
use crate::Error;

/// Destination of the progress line.
pub trait ProgressSink: Write {
    /// Whether the destination is an interactive terminal.
    fn is_interactive(&self) -> bool;
}

impl ProgressSink for Stderr {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }
}

impl ProgressSink for StderrLock<'_> {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }
}

impl<T: ProgressSink + ?Sized> ProgressSink for &mut T {
    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }
}

/// Where to write the final hex digest.
pub enum DigestSink<D> {
    /// Share the progress destination (standard error in [`StreamHasher::run_stdio`]).
    ///
    /// Progress output is disabled in this case.
    Progress,
    /// Write to a separate stream. The stream is flushed and closed afterwards.
    Writer(D),
}

/// Copies input to output and computes the digest of the bytes in transit.
///
/// A hasher performs a single pass. Every call to [`run`](Self::run) consumes the input and the
/// digest stream; hashing another stream requires fresh streams.
pub struct StreamHasher {
    algorithm: Algorithm,
    verbosity: u8,
    chunk_size: NonZeroUsize,
}

impl StreamHasher {
    pub fn new(algorithm: Algorithm, verbosity: u8) -> Self {
        Self {
            algorithm,
            verbosity,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Create a hasher for the algorithm with the specified canonical name.
    pub fn from_name(name: &str, verbosity: u8) -> Result<Self, Error> {
        Ok(Self::new(name.parse()?, verbosity))
    }

    pub fn with_chunk_size(mut self, chunk_size: NonZeroUsize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    pub fn chunk_size(&self) -> NonZeroUsize {
        self.chunk_size
    }

    /// Copy `input` to the standard output and report progress on the standard error.
    pub fn run_stdio<R: Read, D: Write>(
        &mut self,
        input: R,
        digest: DigestSink<D>,
    ) -> Result<AnyHash, Error> {
        self.run(input, stdout().lock(), stderr(), digest)
    }

    /// Copy `input` to `output` chunk by chunk and write the hex digest to `digest`.
    ///
    /// `output` is flushed after every chunk. When verbosity is non-zero, the running total is
    /// printed to `progress` after every mebibyte. The total grows by the chunk size for every
    /// chunk read, including the last one which may be shorter.
    ///
    /// Verbosity is reset to zero for good when `progress` is not a terminal or when the digest
    /// is written to `progress`.
    pub fn run<R, W, P, D>(
        &mut self,
        mut input: R,
        mut output: W,
        mut progress: P,
        digest: DigestSink<D>,
    ) -> Result<AnyHash, Error>
    where
        R: Read,
        W: Write,
        P: ProgressSink,
        D: Write,
    {
        if self.verbosity > 0 && !progress.is_interactive() {
            log::debug!("Progress is disabled: not a terminal");
            self.verbosity = 0;
        }
        if self.verbosity > 0 && matches!(digest, DigestSink::Progress) {
            log::debug!("Progress is disabled: digest is written to the same stream");
            self.verbosity = 0;
        }
        let chunk_size = self.chunk_size.get();
        log::debug!("Hashing with {} in chunks of {} bytes", self.algorithm, chunk_size);
        let mut hasher = self.algorithm.hasher();
        // Not preallocated: the chunk size may exceed the addressable memory.
        let mut buf = Vec::new();
        let mut processed: u64 = 0;
        loop {
            buf.clear();
            if read_chunk(&mut input, &mut buf, chunk_size)? == 0 {
                break;
            }
            processed = processed.saturating_add(chunk_size as u64);
            hasher.update(&buf);
            output.write_all(&buf)?;
            output.flush()?;
            if self.verbosity > 0 && processed % PROGRESS_INTERVAL == 0 {
                write!(
                    progress,
                    "Processed {:>8}\r",
                    format_size(u128::from(processed))
                )?;
                progress.flush()?;
            }
        }
        if self.verbosity > 0 {
            writeln!(progress)?;
            progress.flush()?;
        }
        let hash = hasher.finalize();
        match digest {
            DigestSink::Progress => {
                write!(progress, "{}", hash)?;
                progress.flush()?;
            }
            DigestSink::Writer(mut writer) => {
                write!(writer, "{}", hash)?;
                writer.flush()?;
            }
        }
        log::debug!("Processed {}: {} {}", processed, self.algorithm, hash);
        Ok(hash)
    }
}

// Fills the buffer until it holds `chunk_size` bytes or the input is exhausted.
fn read_chunk<R: Read>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    chunk_size: usize,
) -> Result<usize, std::io::Error> {
    reader.by_ref().take(chunk_size as u64).read_to_end(buf)
}

pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(n) => n,
    None => unreachable!(),
};

const PROGRESS_INTERVAL: u64 = 1024 * 1024;
