use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::hash::AnyHash;
use crate::hash::AnyHasher;
use crate::hash::Hasher;
use crate::hash::Md5Hash;
use crate::hash::Md5Hasher;
use crate::hash::Sha1Hash;
use crate::hash::Sha1Hasher;
use crate::hash::Sha224Hash;
use crate::hash::Sha224Hasher;
use crate::hash::Sha256Hash;
use crate::hash::Sha256Hasher;
use crate::hash::Sha384Hash;
use crate::hash::Sha384Hasher;
use crate::hash::Sha512Hash;
use crate::hash::Sha512Hasher;
use crate::Error;

/// Supported digest algorithms.
///
/// The canonical name of each algorithm is its lowercase identifier, e.g. `sha256`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(arbitrary::Arbitrary))]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

#[allow(clippy::len_without_is_empty)]
impl Algorithm {
    pub const ALL: [Self; 6] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    /// Create a fresh hasher for this algorithm.
    pub fn hasher(self) -> AnyHasher {
        use Algorithm::*;
        match self {
            Md5 => AnyHasher::Md5(<Md5Hasher as Hasher>::new()),
            Sha1 => AnyHasher::Sha1(<Sha1Hasher as Hasher>::new()),
            Sha224 => AnyHasher::Sha224(<Sha224Hasher as Hasher>::new()),
            Sha256 => AnyHasher::Sha256(<Sha256Hasher as Hasher>::new()),
            Sha384 => AnyHasher::Sha384(<Sha384Hasher as Hasher>::new()),
            Sha512 => AnyHasher::Sha512(<Sha512Hasher as Hasher>::new()),
        }
    }

    /// Digest length in bytes.
    pub const fn len(self) -> usize {
        use Algorithm::*;
        match self {
            Md5 => Md5Hash::LEN,
            Sha1 => Sha1Hash::LEN,
            Sha224 => Sha224Hash::LEN,
            Sha256 => Sha256Hash::LEN,
            Sha384 => Sha384Hash::LEN,
            Sha512 => Sha512Hash::LEN,
        }
    }

    /// Digest length in hex characters.
    pub const fn hex_len(self) -> usize {
        2 * self.len()
    }

    pub const fn as_str(self) -> &'static str {
        use Algorithm::*;
        match self {
            Md5 => "md5",
            Sha1 => "sha1",
            Sha224 => "sha224",
            Sha256 => "sha256",
            Sha384 => "sha384",
            Sha512 => "sha512",
        }
    }

    /// Parse hex digest produced by this algorithm.
    pub fn parse_hash(self, s: &str) -> Result<AnyHash, Error> {
        let hash: AnyHash = s.parse()?;
        if hash.algorithm() != self {
            return Err(Error::InvalidHash(s.into()));
        }
        Ok(hash)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.into()))
    }
}
