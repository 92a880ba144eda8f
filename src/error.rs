//! Defines the error types raised at the crate's construction boundary.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateError {
    /// A rate built from two measurements requires a strictly positive
    /// denominator value; the quotient must never be infinite or NaN.
    #[error("denominator measurement must be strictly positive, got {0}")]
    NonPositiveDenominator(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let err = RateError::NonPositiveDenominator(-1.5);
        assert_eq!(
            err.to_string(),
            "denominator measurement must be strictly positive, got -1.5"
        );
    }
}
