use crate::domain::ports::Calculator;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
        }
    }
}

/// One smoke check: `lhs <operation> rhs` must equal `expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckCase {
    pub operation: Operation,
    pub lhs: i64,
    pub rhs: i64,
    pub expected: i64,
}

impl CheckCase {
    pub fn evaluate<C: Calculator + ?Sized>(&self, calculator: &C) -> i64 {
        match self.operation {
            Operation::Add => calculator.add(self.lhs, self.rhs),
            Operation::Subtract => calculator.subtract(self.lhs, self.rhs),
        }
    }
}

impl fmt::Display for CheckCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs,
            self.operation.symbol(),
            self.rhs,
            self.expected
        )
    }
}

pub const ADD_CASE: CheckCase = CheckCase {
    operation: Operation::Add,
    lhs: 2,
    rhs: 2,
    expected: 4,
};

pub const SUBTRACT_CASE: CheckCase = CheckCase {
    operation: Operation::Subtract,
    lhs: 5,
    rhs: 3,
    expected: 2,
};
