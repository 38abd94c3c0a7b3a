use crate::domain::model::{CheckCase, ADD_CASE, SUBTRACT_CASE};
use crate::domain::ports::Calculator;
use crate::utils::error::{CalcError, Result};
use std::io::Write;

pub const SUCCESS_MESSAGE: &str = "✅ All tests passed";

pub struct SmokeRunner<C: Calculator> {
    calculator: C,
}

impl<C: Calculator> SmokeRunner<C> {
    pub fn new(calculator: C) -> Self {
        Self { calculator }
    }

    pub fn check_add(&self) -> Result<()> {
        self.check(&ADD_CASE)
    }

    pub fn check_subtract(&self) -> Result<()> {
        self.check(&SUBTRACT_CASE)
    }

    /// Runs every check in order and stops at the first mismatch.
    /// The success line is only written when all checks pass.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        tracing::info!("Starting calculator smoke tests");
        writeln!(out, "🧪 Running calculator smoke tests")?;

        self.check_add()?;
        self.check_subtract()?;

        writeln!(out, "{}", SUCCESS_MESSAGE)?;
        out.flush()?;
        Ok(())
    }

    /// Runs the checks and reports the outcome the way the binary does:
    /// report lines to `out`, the failure diagnostic to `err`.
    /// Returns the process exit status.
    pub fn report<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> u8 {
        match self.run(out) {
            Ok(()) => 0,
            Err(e) => {
                tracing::debug!("Smoke run aborted: {:?}", e);
                if let Err(write_err) = writeln!(err, "❌ {}", e.user_friendly_message()) {
                    tracing::warn!("Failed to write diagnostic: {}", write_err);
                }
                e.exit_code()
            }
        }
    }

    fn check(&self, case: &CheckCase) -> Result<()> {
        let actual = case.evaluate(&self.calculator);
        tracing::debug!("{} {} {} -> {}", case.lhs, case.operation.symbol(), case.rhs, actual);

        if actual != case.expected {
            tracing::debug!("Check failed: expected {}, got {}", case.expected, actual);
            return Err(CalcError::AssertionMismatch {
                case: *case,
                actual,
            });
        }

        Ok(())
    }
}
