use crate::hash::HashArray;
use crate::hash::Hasher;

impl Hasher for Sha1 {
    type Output = Sha1Hash;

    fn new() -> Self {
        sha1::Digest::new()
    }

    fn update(&mut self, data: &[u8]) {
        sha1::Digest::update(self, data);
    }

    fn finalize(self) -> Self::Output {
        Sha1Hash::new(sha1::Digest::finalize(self).into())
    }
}

pub type Sha1 = sha1::Sha1;
pub type Sha1Hasher = Sha1;
pub type Sha1Hash = HashArray<20>;
