//! Worked examples: the lesson's sample sets and its factorization exercise.

use crate::prelude::*;

/// Builds the lesson's two sample sets:
///
/// - the non-negative integers from the range −10..11, i.e. {0, 1, …, 10};
/// - the integers in the range 5..15, i.e. {5, 6, …, 14}.
#[must_use]
pub fn sample_sets() -> (IntSet, IntSet) {
    let s = IntSet::from_range(-10..11).select(|x| x >= 0);
    let a = IntSet::from_range(5..15);
    (s, a)
}

/// Fixed dividend split by [`factor_pair`].
const DIVIDEND: i64 = 100;

/// Error from [`factor_pair`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FactorError {
    /// The factor was negative.
    Negative,
    /// A zero factor admits no quotient.
    Zero,
}

impl Display for FactorError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(match self {
            Self::Negative => "factor must be positive",
            Self::Zero => "division by zero",
        })
    }
}

impl std::error::Error for FactorError {}

/// The lesson's factorization exercise: splits the fixed dividend 100 into the pair
/// (x, 100 / x), with real rather than integer division.
///
/// ## Errors
///
/// Returns [`FactorError::Negative`] for a negative factor, and [`FactorError::Zero`]
/// for zero, which admits no finite quotient.
pub fn factor_pair(x: i64) -> Result<(i64, f64), FactorError> {
    if x < 0 {
        Err(FactorError::Negative)
    } else if x == 0 {
        Err(FactorError::Zero)
    } else {
        Ok((x, DIVIDEND as f64 / x as f64))
    }
}

/// Tests for the worked examples.
#[cfg(test)]
mod lesson {
    use super::*;

    #[test]
    fn samples() {
        let (s, a) = sample_sets();
        assert_eq!(s, IntSet::from_range(0..11));
        assert_eq!(a, IntSet::from_range(5..15));
        assert_eq!(s.card(), 11);
        assert_eq!(a.card(), 10);
    }

    #[test]
    fn factor() {
        assert_eq!(factor_pair(10), Ok((10, 10.0)));
        assert_eq!(factor_pair(4), Ok((4, 25.0)));
        assert_eq!(factor_pair(3), Ok((3, 100.0 / 3.0)));
        assert_eq!(factor_pair(-5), Err(FactorError::Negative));
        assert_eq!(factor_pair(0), Err(FactorError::Zero));
    }

    #[test]
    fn factor_errors_display() {
        assert_eq!(FactorError::Negative.to_string(), "factor must be positive");
        assert_eq!(FactorError::Zero.to_string(), "division by zero");
    }
}
