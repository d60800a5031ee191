use crate::hash::HashArray;
use crate::hash::Hasher;

impl Hasher for md5::Context {
    type Output = Md5Hash;

    fn new() -> Self {
        md5::Context::new()
    }

    fn update(&mut self, data: &[u8]) {
        self.consume(data);
    }

    fn finalize(self) -> Self::Output {
        Md5Hash::new(self.compute().0)
    }
}

pub type Md5Hasher = md5::Context;
pub type Md5Hash = HashArray<16>;
