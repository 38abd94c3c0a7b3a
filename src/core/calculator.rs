use crate::domain::ports::Calculator;
use crate::utils::error::{CalcError, Result};

// Two's-complement wrap on overflow, never a panic.
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

pub fn subtract(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

pub fn multiply(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

/// True division, so `divide(7, 2)` is `3.5`.
///
/// Operands are converted to `f64` first, so magnitudes above 2^53 are
/// rounded to the nearest representable value before dividing.
pub fn divide(a: i64, b: i64) -> Result<f64> {
    if b == 0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a as f64 / b as f64)
}

/// The calculator the smoke runner checks by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdCalculator;

impl Calculator for StdCalculator {
    fn add(&self, a: i64, b: i64) -> i64 {
        add(a, b)
    }

    fn subtract(&self, a: i64, b: i64) -> i64 {
        subtract(a, b)
    }
}
