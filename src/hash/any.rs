use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::hash::Algorithm;
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

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum AnyHash {
    Md5(Md5Hash),
    Sha1(Sha1Hash),
    Sha224(Sha224Hash),
    Sha256(Sha256Hash),
    Sha384(Sha384Hash),
    Sha512(Sha512Hash),
}

impl AnyHash {
    pub const fn algorithm(&self) -> Algorithm {
        use AnyHash::*;
        match self {
            Md5(..) => Algorithm::Md5,
            Sha1(..) => Algorithm::Sha1,
            Sha224(..) => Algorithm::Sha224,
            Sha256(..) => Algorithm::Sha256,
            Sha384(..) => Algorithm::Sha384,
            Sha512(..) => Algorithm::Sha512,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        use AnyHash::*;
        match self {
            Md5(hash) => &hash[..],
            Sha1(hash) => &hash[..],
            Sha224(hash) => &hash[..],
            Sha256(hash) => &hash[..],
            Sha384(hash) => &hash[..],
            Sha512(hash) => &hash[..],
        }
    }
}

impl Display for AnyHash {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        use AnyHash::*;
        match self {
            Md5(hash) => Display::fmt(hash, f),
            Sha1(hash) => Display::fmt(hash, f),
            Sha224(hash) => Display::fmt(hash, f),
            Sha256(hash) => Display::fmt(hash, f),
            Sha384(hash) => Display::fmt(hash, f),
            Sha512(hash) => Display::fmt(hash, f),
        }
    }
}

// Hex lengths of all supported digests are distinct.
impl FromStr for AnyHash {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.len() {
            Md5Hash::HEX_LEN => Ok(Self::Md5(s.parse()?)),
            Sha1Hash::HEX_LEN => Ok(Self::Sha1(s.parse()?)),
            Sha224Hash::HEX_LEN => Ok(Self::Sha224(s.parse()?)),
            Sha256Hash::HEX_LEN => Ok(Self::Sha256(s.parse()?)),
            Sha384Hash::HEX_LEN => Ok(Self::Sha384(s.parse()?)),
            Sha512Hash::HEX_LEN => Ok(Self::Sha512(s.parse()?)),
            _ => Err(Error::InvalidHash(s.into())),
        }
    }
}

impl_from!(Md5Hash, Md5);
impl_from!(Sha1Hash, Sha1);
impl_from!(Sha224Hash, Sha224);
impl_from!(Sha256Hash, Sha256);
impl_from!(Sha384Hash, Sha384);
impl_from!(Sha512Hash, Sha512);

macro_rules! impl_from {
    ($from:ty, $self:ident) => {
        impl From<$from> for AnyHash {
            fn from(other: $from) -> Self {
                Self::$self(other)
            }
        }
    };
}

use impl_from;

/// Hasher for any of the supported [`Algorithm`]s.
///
/// Use [`Algorithm::hasher`] to choose the algorithm.
pub enum AnyHasher {
    Md5(Md5Hasher),
    Sha1(Sha1Hasher),
    Sha224(Sha224Hasher),
    Sha256(Sha256Hasher),
    Sha384(Sha384Hasher),
    Sha512(Sha512Hasher),
}

impl Hasher for AnyHasher {
    type Output = AnyHash;

    // Only the generic test helpers construct the hasher this way.
    fn new() -> Self {
        Self::Sha256(<Sha256Hasher as Hasher>::new())
    }

    fn update(&mut self, data: &[u8]) {
        use AnyHasher::*;
        match self {
            Md5(hasher) => Hasher::update(hasher, data),
            Sha1(hasher) => Hasher::update(hasher, data),
            Sha224(hasher) => Hasher::update(hasher, data),
            Sha256(hasher) => Hasher::update(hasher, data),
            Sha384(hasher) => Hasher::update(hasher, data),
            Sha512(hasher) => Hasher::update(hasher, data),
        }
    }

    fn finalize(self) -> Self::Output {
        use AnyHasher::*;
        match self {
            Md5(hasher) => Hasher::finalize(hasher).into(),
            Sha1(hasher) => Hasher::finalize(hasher).into(),
            Sha224(hasher) => Hasher::finalize(hasher).into(),
            Sha256(hasher) => Hasher::finalize(hasher).into(),
            Sha384(hasher) => Hasher::finalize(hasher).into(),
            Sha512(hasher) => Hasher::finalize(hasher).into(),
        }
    }
}
