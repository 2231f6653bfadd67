use crate::grammar::Grammar;
use crate::position::Label;
use core::fmt::{self, Display};

/// The broad category of a [`VersionError`], useful when the exact variant does not matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A string failed one of the identifier grammars.
    Parse,
    /// A number would become (or was given as) negative.
    NegativeValue,
    /// A number would grow past what can be represented.
    Overflow,
    /// There is no pre-release label, or no trailing numeric identifier, to mutate.
    NoValue,
    /// A position could not be recognized.
    InvalidPosition,
    /// An add/remove operation conflicts with the version's current state, or is malformed.
    InvalidOperation,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Parse => "parse",
            ErrorKind::NegativeValue => "negative value",
            ErrorKind::Overflow => "overflow",
            ErrorKind::NoValue => "no value",
            ErrorKind::InvalidPosition => "invalid position",
            ErrorKind::InvalidOperation => "invalid operation",
        };
        f.write_str(name)
    }
}

/// Errors raised while parsing or mutating versions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Returned when a string does not match the grammar it is validated against.
    #[error("Invalid {grammar} string: {value}")]
    Parse { grammar: Grammar, value: String },

    /// Returned when a negative number is supplied where a version number is expected.
    #[error("Number must not be negative, got `{value}`")]
    NegativeValue { value: i64 },

    /// Returned when decrementing a number that is already zero.
    #[error("Cannot decrement number to a negative value")]
    NegativeDecrement,

    /// Returned when bumping a number would exceed `u64::MAX`.
    #[error("Cannot add `{amount}` to `{value}` without overflowing")]
    Overflow { value: u64, amount: u64 },

    /// Returned when incrementing/decrementing a pre-release whose last identifier is not numeric.
    #[error(
        "No digit to increment/decrement. Make sure the last dot-separated identifier is a \
        numeric value: {pre}"
    )]
    NoTrailingDigit { pre: String },

    /// Returned when a pre-release operation is requested on a version without one.
    #[error("Version `{version}` has no pre-release label")]
    NoPreRelease { version: String },

    /// Returned when a position name is not one of `major`, `minor`, `patch` or `pre`.
    #[error("Unrecognized version position: `{position}`")]
    InvalidPosition { position: String },

    /// Returned when adding a label that is already set.
    #[error("Cannot add {label} that already exists: `{version}`")]
    LabelExists { label: Label, version: String },

    /// Returned when removing a label that is not set.
    #[error("Cannot remove {label} that does not exist: `{version}`")]
    LabelMissing { label: Label, version: String },

    /// Returned when a textual operation cannot be interpreted.
    #[error("Cannot {action} an invalid string: `{operand}`")]
    InvalidOperand {
        action: &'static str,
        operand: String,
    },
}

impl VersionError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        use VersionError::*;
        match self {
            Parse { .. } => ErrorKind::Parse,
            NegativeValue { .. } | NegativeDecrement => ErrorKind::NegativeValue,
            Overflow { .. } => ErrorKind::Overflow,
            NoTrailingDigit { .. } | NoPreRelease { .. } => ErrorKind::NoValue,
            InvalidPosition { .. } => ErrorKind::InvalidPosition,
            LabelExists { .. } | LabelMissing { .. } | InvalidOperand { .. } => {
                ErrorKind::InvalidOperation
            }
        }
    }

    pub(crate) fn parse(grammar: Grammar, value: &str) -> Self {
        VersionError::Parse {
            grammar,
            value: value.to_owned(),
        }
    }
}
