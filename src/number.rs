use crate::error::VersionError;
use core::fmt::{self, Display};

/// A non-negative version number, such as the major, minor or patch part of a version.
///
/// Decrementing below zero is an error instead of wrapping or clamping.
///
/// ```
/// use asemver::VersionNumber;
///
/// let mut number = VersionNumber::new(1);
/// number.decrement().unwrap();
/// assert_eq!(0, number.value());
/// assert!(number.decrement().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionNumber(u64);

impl VersionNumber {
    /// Wraps `value`.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Replaces the value, failing with [`VersionError::NegativeValue`] if `value` is negative.
    /// On failure, the number is left unchanged.
    pub fn set(&mut self, value: i64) -> Result<(), VersionError> {
        *self = Self::try_from(value)?;
        Ok(())
    }

    /// Adds one, failing with [`VersionError::Overflow`] at `u64::MAX`.
    pub fn increment(&mut self) -> Result<(), VersionError> {
        self.add(1)
    }

    /// Adds `amount`, failing with [`VersionError::Overflow`] instead of wrapping.
    pub fn add(&mut self, amount: u64) -> Result<(), VersionError> {
        self.0 = self
            .0
            .checked_add(amount)
            .ok_or(VersionError::Overflow {
                value: self.0,
                amount,
            })?;
        Ok(())
    }

    /// Subtracts one, failing with [`VersionError::NegativeDecrement`] if the value is zero.
    pub fn decrement(&mut self) -> Result<(), VersionError> {
        self.0 = self
            .0
            .checked_sub(1)
            .ok_or(VersionError::NegativeDecrement)?;
        Ok(())
    }

    /// Sets the value to zero.
    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

impl From<u64> for VersionNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for VersionNumber {
    type Error = VersionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| VersionError::NegativeValue { value })
    }
}

impl Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(i64::MAX)]
    fn test_try_from_ok(#[case] value: i64) {
        assert_eq!(Ok(value as u64), VersionNumber::try_from(value).map(|n| n.value()));
    }

    #[rstest]
    #[case(-1)]
    #[case(i64::MIN)]
    fn test_try_from_negative(#[case] value: i64) {
        assert_eq!(
            Err(VersionError::NegativeValue { value }),
            VersionNumber::try_from(value)
        );
    }

    #[test]
    fn test_set() {
        let mut number = VersionNumber::new(4);
        number.set(9).unwrap();
        assert_eq!(9, number.value());

        // failed set leaves the number untouched
        assert!(number.set(-3).is_err());
        assert_eq!(9, number.value());
    }

    #[test]
    fn test_increment() {
        let mut number = VersionNumber::new(0);
        number.increment().unwrap();
        number.increment().unwrap();
        assert_eq!(2, number.value());

        let mut number = VersionNumber::new(u64::MAX);
        assert_eq!(
            Err(VersionError::Overflow {
                value: u64::MAX,
                amount: 1
            }),
            number.increment()
        );
        assert_eq!(u64::MAX, number.value());
    }

    #[test]
    fn test_decrement() {
        let mut number = VersionNumber::new(2);
        number.decrement().unwrap();
        assert_eq!(1, number.value());
        number.decrement().unwrap();
        assert_eq!(0, number.value());
        assert_eq!(Err(VersionError::NegativeDecrement), number.decrement());
        assert_eq!(0, number.value());
    }

    #[test]
    fn test_add() {
        let mut number = VersionNumber::new(5);
        number.add(10).unwrap();
        assert_eq!(15, number.value());

        let mut number = VersionNumber::new(u64::MAX - 1);
        assert_eq!(
            Err(VersionError::Overflow {
                value: u64::MAX - 1,
                amount: 2
            }),
            number.add(2)
        );
        assert_eq!(u64::MAX - 1, number.value());
    }

    #[test]
    fn test_reset() {
        let mut number = VersionNumber::new(42);
        number.reset();
        assert_eq!(VersionNumber::default(), number);
    }

    #[test]
    fn test_ordering() {
        assert!(VersionNumber::new(2) < VersionNumber::new(10));
        assert_eq!(VersionNumber::new(7), VersionNumber::from(7));
    }

    #[test]
    fn test_display() {
        assert_eq!("120", VersionNumber::new(120).to_string());
    }
}
