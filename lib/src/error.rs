//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Rule number {0} is out of range. It should be between 0 and 255.
    RuleOutOfRange(i64),
    /// Invalid rule: {0:?}.
    ParseRuleError(String),
    /// A neighborhood pattern should have exactly 3 cells, but this one has {0}.
    InvalidPattern(usize),
    /// Invalid state: {0}. A cell is either 0 (dead) or 1 (alive).
    InvalidState(u8),
    /// Invalid character {0:?} in a row.
    ParseRowError(char),
    /// Width / height / scale should be positive.
    NonPositiveError,
    /// Scale should be at most {1}, but got {0}.
    ScaleError(usize, usize),
    /// Density should be between 0 and 1, but got {0}.
    DensityError(f64),
}
