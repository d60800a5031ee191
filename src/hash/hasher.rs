/// Incremental digest computation.
///
/// Every byte passed to [`update`](Hasher::update) is reflected in the output of
/// [`finalize`](Hasher::finalize), in order.
pub trait Hasher {
    type Output;

    fn new() -> Self;
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Self::Output;

    fn compute(data: &[u8]) -> Self::Output
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}
