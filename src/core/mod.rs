pub mod calculator;
pub mod runner;

pub use crate::domain::ports::Calculator;
