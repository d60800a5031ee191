mod algorithm;
mod any;
mod hash_array;
mod hasher;
mod md5;
mod sha1;
mod sha256;
mod sha512;
#[cfg(test)]
pub(crate) mod tests;

pub use self::algorithm::*;
pub use self::any::*;
pub use self::hash_array::*;
pub use self::hasher::*;
pub use self::md5::*;
pub use self::sha1::*;
pub use self::sha256::*;
pub use self::sha512::*;
