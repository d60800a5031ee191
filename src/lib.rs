//! Hash in a pipe.
//!
//! [`StreamHasher`] copies a byte stream to the standard output unchanged while computing its
//! digest, then writes the hex digest to a separate stream.

mod error;
pub mod hash;
mod size;
mod stream_hasher;

pub use self::error::*;
pub use self::size::*;
pub use self::stream_hasher::*;
