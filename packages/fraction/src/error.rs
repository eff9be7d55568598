use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("[Fraction] Denominator cannot be zero, numerator '{numerator}'")]
    ZeroDenominator { numerator: i64 },

    #[error("[Fraction] Division by zero when evaluating `{details}`")]
    DivisionByZero { details: String },

    #[error("[Fraction] Arithmetic overflow when evaluating `{details}`")]
    Overflow { details: String },

    #[error("[Fraction] Expected at least one fraction but got none")]
    EmptyInput,
}

impl Error {
    pub fn zero_denominator(numerator: i64) -> Self {
        tracing::debug!(numerator, "zero denominator");

        Self::ZeroDenominator { numerator }
    }

    pub fn division_by_zero<L>(lhs: L) -> Self
    where
        L: Debug,
    {
        let details = format!("({:?} / 0)", lhs);
        tracing::debug!(%details, "division by zero");

        Self::DivisionByZero { details }
    }

    pub fn overflow<L, R>(op: &str, lhs: L, rhs: R) -> Self
    where
        L: Debug,
        R: Debug,
    {
        let details = format!("({:?} {} {:?})", lhs, op, rhs);
        tracing::debug!(%details, "arithmetic overflow");

        Self::Overflow { details }
    }

    pub fn empty_input() -> Self {
        tracing::debug!("empty input");

        Self::EmptyInput
    }
}

pub type Result<T> = core::result::Result<T, Error>;
