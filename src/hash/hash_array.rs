use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::ops::Deref;
use std::str::FromStr;

use base16ct::lower::encode_string;
use base16ct::mixed::decode;
use constant_time_eq::constant_time_eq_n;

use crate::Error;

/// Fixed-size digest that is displayed as lowercase hex.
#[derive(PartialOrd, Ord, Clone)]
#[cfg_attr(test, derive(arbitrary::Arbitrary))]
pub struct HashArray<const N: usize>([u8; N]);

impl<const N: usize> HashArray<N> {
    pub const fn new(array: [u8; N]) -> Self {
        Self(array)
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub const LEN: usize = N;
    pub const HEX_LEN: usize = 2 * N;
}

impl<const N: usize> PartialEq for HashArray<N> {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq_n(&self.0, &other.0)
    }
}

impl<const N: usize> Eq for HashArray<N> {}

impl<const N: usize> Hash for HashArray<N> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.0.hash(state);
    }
}

impl<const N: usize> Deref for HashArray<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> Display for HashArray<N> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let s = encode_string(&self[..]);
        f.write_str(&s)
    }
}

impl<const N: usize> Debug for HashArray<N> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<const N: usize> FromStr for HashArray<N> {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::HEX_LEN {
            return Err(Error::InvalidHash(s.into()));
        }
        let mut array = [0_u8; N];
        decode(s.as_bytes(), &mut array[..]).map_err(|_| Error::InvalidHash(s.into()))?;
        Ok(Self(array))
    }
}
