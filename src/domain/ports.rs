/// Arithmetic capability consumed by the smoke runner.
pub trait Calculator {
    fn add(&self, a: i64, b: i64) -> i64;
    fn subtract(&self, a: i64, b: i64) -> i64;
}
