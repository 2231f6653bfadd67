//! Pre-release labels.
//!
//! Precedence follows <https://semver.org/spec/v2.0.0.html#spec-item-11>.

use crate::error::VersionError;
use crate::grammar::{self, Grammar};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

/// One dot-separated identifier of a pre-release label, classified for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// An identifier made only of digits, without a leading zero (or exactly `0`). Kept as its
    /// decimal digits so any length round-trips.
    Numeric(String),
    /// Any other identifier. Compared by ASCII code point.
    AlphaNumeric(String),
}

impl Identifier {
    fn parse(s: &str) -> Self {
        if grammar::is_numeric_identifier(s) {
            Identifier::Numeric(s.to_owned())
        } else {
            Identifier::AlphaNumeric(s.to_owned())
        }
    }

    /// Shorthand for a numeric identifier.
    pub fn numeric(n: u64) -> Self {
        Identifier::Numeric(n.to_string())
    }
}

/// Adds `amount` to a string of decimal digits.
fn add_decimal(digits: &str, amount: u64) -> String {
    let mut carry = u128::from(amount);
    let mut reversed = Vec::with_capacity(digits.len() + 20);
    for b in digits.bytes().rev() {
        let sum = u128::from(b - b'0') + carry;
        reversed.push(char::from(b'0' + (sum % 10) as u8));
        carry = sum / 10;
    }
    while carry > 0 {
        reversed.push(char::from(b'0' + (carry % 10) as u8));
        carry /= 10;
    }
    reversed.into_iter().rev().collect()
}

/// Subtracts one from a string of decimal digits, or `None` if it is `0`.
fn decrement_decimal(digits: &str) -> Option<String> {
    if digits.bytes().all(|b| b == b'0') {
        return None;
    }
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'0' {
            *b = b'9';
        } else {
            *b -= 1;
            break;
        }
    }
    let decremented: String = bytes.into_iter().map(char::from).collect();
    match decremented.trim_start_matches('0') {
        "" => Some("0".to_owned()),
        trimmed => Some(trimmed.to_owned()),
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    /// Numeric identifiers always have lower precedence than alphanumeric ones.
    fn cmp(&self, other: &Self) -> Ordering {
        use Identifier::*;
        match (self, other) {
            // no leading zeros, so a longer number is always greater
            (Numeric(a), Numeric(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (AlphaNumeric(a), AlphaNumeric(b)) => a.as_bytes().cmp(b.as_bytes()),
            (Numeric(_), AlphaNumeric(_)) => Ordering::Less,
            (AlphaNumeric(_), Numeric(_)) => Ordering::Greater,
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(s) | Identifier::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

/// A pre-release label: the dot-separated identifiers after the first `-` of a version.
///
/// The label is kept both as its canonical string and as a list of classified [`Identifier`]s.
/// The two are always rebuilt together, so they never disagree.
///
/// ```
/// use asemver::PreRelease;
///
/// let mut pre: PreRelease = "rc.1".parse().unwrap();
/// pre.increment().unwrap();
/// assert_eq!("rc.2", pre.as_str());
/// assert!(pre > PreRelease::new("rc.1").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PreRelease {
    string: String,
    identifiers: Vec<Identifier>,
}

impl PreRelease {
    /// Parses a pre-release label. `s` must not include the leading `-`.
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::Parse`] if `s` is not a valid pre-release label.
    pub fn new(s: &str) -> Result<Self, VersionError> {
        let s = Grammar::PreRelease.validate(s)?;
        let identifiers = s.split('.').map(Identifier::parse).collect();
        Ok(Self {
            string: s.to_owned(),
            identifiers,
        })
    }

    /// Replaces the label with `s`. On failure, the label is left unchanged.
    pub fn set(&mut self, s: &str) -> Result<(), VersionError> {
        *self = Self::new(s)?;
        Ok(())
    }

    /// Returns the label without the leading `-`.
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// Returns the classified identifiers, in order.
    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    /// Returns the digits of the last identifier if it is numeric. This is the value that
    /// [`add`](Self::add), [`increment`](Self::increment) and [`decrement`](Self::decrement) act
    /// on.
    pub fn trailing_digits(&self) -> Option<&str> {
        match self.identifiers.last() {
            Some(Identifier::Numeric(digits)) => Some(digits.as_str()),
            _ => None,
        }
    }

    /// Returns the last identifier as a number if it is numeric and fits in a `u64`.
    pub fn digit(&self) -> Option<u64> {
        self.trailing_digits().and_then(|digits| digits.parse().ok())
    }

    fn trailing_digits_mut(&mut self) -> Result<&mut String, VersionError> {
        match self.identifiers.last_mut() {
            Some(Identifier::Numeric(digits)) => Ok(digits),
            _ => Err(VersionError::NoTrailingDigit {
                pre: self.string.clone(),
            }),
        }
    }

    fn rebuild_string(&mut self) {
        self.string = self
            .identifiers
            .iter()
            .map(Identifier::to_string)
            .collect::<Vec<_>>()
            .join(".");
    }

    /// Adds `amount` to the trailing numeric identifier. Identifiers have no upper bound, so this
    /// never overflows.
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::NoTrailingDigit`] if the last identifier is not numeric, even when
    ///   `amount` is zero.
    pub fn add(&mut self, amount: u64) -> Result<(), VersionError> {
        let digits = self.trailing_digits_mut()?;
        *digits = add_decimal(digits, amount);
        self.rebuild_string();
        Ok(())
    }

    /// Increments the trailing numeric identifier.
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::NoTrailingDigit`] if the last identifier is not numeric.
    pub fn increment(&mut self) -> Result<(), VersionError> {
        self.add(1)
    }

    /// Decrements the trailing numeric identifier.
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::NoTrailingDigit`] if the last identifier is not numeric.
    /// - Returns [`VersionError::NegativeDecrement`] if the last identifier is `0`.
    pub fn decrement(&mut self) -> Result<(), VersionError> {
        let digits = self.trailing_digits_mut()?;
        *digits = decrement_decimal(digits).ok_or(VersionError::NegativeDecrement)?;
        self.rebuild_string();
        Ok(())
    }

    /// Resets the label to a bare `-`, which has no trailing digit.
    pub fn reset(&mut self) {
        self.string = "-".to_owned();
        self.identifiers = vec![Identifier::AlphaNumeric("-".to_owned())];
    }

    /// Returns true if the first identifier starts with `alpha` or `a` (case-insensitive),
    /// followed by nothing or only digits. E.g. `alpha`, `a1`, `alpha0.x`.
    pub fn is_alpha(&self) -> bool {
        self.first_identifier_is(&["alpha", "a"])
    }

    /// Returns true if the first identifier starts with `beta` or `b` (case-insensitive),
    /// followed by nothing or only digits. E.g. `beta`, `b24`, `beta.x.4`.
    pub fn is_beta(&self) -> bool {
        self.first_identifier_is(&["beta", "b"])
    }

    /// Returns true if the first identifier starts with `rc` (case-insensitive), followed by
    /// nothing or only digits. E.g. `rc`, `rc6.2`.
    pub fn is_rc(&self) -> bool {
        self.first_identifier_is(&["rc"])
    }

    fn first_identifier_is(&self, prefixes: &[&str]) -> bool {
        let Some(Identifier::AlphaNumeric(first)) = self.identifiers.first() else {
            return false;
        };
        let lowered = first.to_ascii_lowercase();
        prefixes.iter().any(|prefix| {
            lowered
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.bytes().all(|b| b.is_ascii_digit()))
        })
    }
}

impl FromStr for PreRelease {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq for PreRelease {
    fn eq(&self, other: &Self) -> bool {
        self.identifiers == other.identifiers
    }
}

impl Eq for PreRelease {}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreRelease {
    /// Compares identifiers pairwise; the first difference decides. If one label is a prefix of
    /// the other, the shorter one has lower precedence. This is exactly lexicographic ordering of
    /// the identifier lists.
    fn cmp(&self, other: &Self) -> Ordering {
        self.identifiers.cmp(&other.identifiers)
    }
}

impl Display for PreRelease {
    /// Displays the label without the leading `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}
