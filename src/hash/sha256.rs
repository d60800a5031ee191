use crate::hash::HashArray;
use crate::hash::Hasher;

impl Hasher for Sha224 {
    type Output = Sha224Hash;

    fn new() -> Self {
        sha2::Digest::new()
    }

    fn update(&mut self, data: &[u8]) {
        sha2::Digest::update(self, data);
    }

    fn finalize(self) -> Self::Output {
        Sha224Hash::new(sha2::Digest::finalize(self).into())
    }
}

impl Hasher for Sha256 {
    type Output = Sha256Hash;

    fn new() -> Self {
        sha2::Digest::new()
    }

    fn update(&mut self, data: &[u8]) {
        sha2::Digest::update(self, data);
    }

    fn finalize(self) -> Self::Output {
        Sha256Hash::new(sha2::Digest::finalize(self).into())
    }
}

pub type Sha224 = sha2::Sha224;
pub type Sha224Hasher = Sha224;
pub type Sha224Hash = HashArray<28>;

pub type Sha256 = sha2::Sha256;
pub type Sha256Hasher = Sha256;
pub type Sha256Hash = HashArray<32>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::tests::*;

    #[test]
    fn sha224() {
        same_as_computing_hash_of_the_whole_stream::<Sha224>();
        display_parse::<Sha224Hash>();
        assert_eq!(
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f",
            Sha224::compute(b"").to_string()
        );
        assert_eq!(
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
            Sha224::compute(b"abc").to_string()
        );
    }

    #[test]
    fn sha256() {
        same_as_computing_hash_of_the_whole_stream::<Sha256>();
        display_parse::<Sha256Hash>();
        assert_eq!(
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            Sha256::compute(b"").to_string()
        );
        assert_eq!(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            Sha256::compute(b"abc").to_string()
        );
    }
}
