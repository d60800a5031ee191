use crate::hash::HashArray;
use crate::hash::Hasher;

impl Hasher for Sha384 {
    type Output = Sha384Hash;

    fn new() -> Self {
        sha2::Digest::new()
    }

    fn update(&mut self, data: &[u8]) {
        sha2::Digest::update(self, data);
    }

    fn finalize(self) -> Self::Output {
        Sha384Hash::new(sha2::Digest::finalize(self).into())
    }
}

impl Hasher for Sha512 {
    type Output = Sha512Hash;

    fn new() -> Self {
        sha2::Digest::new()
    }

    fn update(&mut self, data: &[u8]) {
        sha2::Digest::update(self, data);
    }

    fn finalize(self) -> Self::Output {
        Sha512Hash::new(sha2::Digest::finalize(self).into())
    }
}

pub type Sha384 = sha2::Sha384;
pub type Sha384Hasher = Sha384;
pub type Sha384Hash = HashArray<48>;

pub type Sha512 = sha2::Sha512;
pub type Sha512Hasher = Sha512;
pub type Sha512Hash = HashArray<64>;
