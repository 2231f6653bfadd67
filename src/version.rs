use crate::{
    build::BuildMetadata,
    error::VersionError,
    grammar::{self, Grammar},
    number::VersionNumber,
    operation::{AddOp, Operation, RemoveOp},
    position::{Label, Position},
    prerelease::PreRelease,
};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};
use tracing::{debug, trace};

/// A Version object represents a [Semantic Versioning 2.0.0](https://semver.org/spec/v2.0.0.html)
/// version: three numbers, plus an optional pre-release label and optional build metadata.
///
/// Versions can be [parsed](Version::parse), [displayed](Version::to_string),
/// [mutated](Version::increment), and [compared](Version::cmp).
///
/// Comparison follows semver precedence, which ignores build metadata entirely: `1.2.3+a` and
/// `1.2.3+b` are equal.
///
/// # Examples
///
/// ```
/// use asemver::prelude::*;
///
/// let mut version = Version::parse("2.5.3-alpha.52+meta34").unwrap();
/// version.increment(Position::Major).unwrap();
/// assert_eq!("3.0.0-alpha.52+meta34", version.to_string());
/// ```
///
/// Mutations can be chained. The first failing step stops the chain, but steps before it stay
/// applied:
///
/// ```
/// use asemver::prelude::*;
///
/// let mut version = Version::new(1, 2, 3);
/// version
///     .apply_add(AddOp::Increment(Position::Minor))
///     .unwrap()
///     .apply_add(AddOp::SetPreRelease("rc.1".to_string()))
///     .unwrap();
/// assert_eq!("1.3.0-rc.1", version.to_string());
/// assert!(version < Version::new(1, 3, 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Version {
    major: VersionNumber,
    minor: VersionNumber,
    patch: VersionNumber,
    pre: Option<PreRelease>,
    build: Option<BuildMetadata>,
}

impl Version {
    /// Returns a version with the given numbers and no labels.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major: major.into(),
            minor: minor.into(),
            patch: patch.into(),
            pre: None,
            build: None,
        }
    }

    /// Returns a version from signed numbers and optional label strings, validating everything.
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::NegativeValue`] if any number is negative.
    /// - Returns [`VersionError::Parse`] if a label is not valid for its grammar.
    pub fn try_new(
        major: i64,
        minor: i64,
        patch: i64,
        pre: Option<&str>,
        build: Option<&str>,
    ) -> Result<Self, VersionError> {
        Ok(Self {
            major: major.try_into()?,
            minor: minor.try_into()?,
            patch: patch.try_into()?,
            pre: pre.map(PreRelease::new).transpose()?,
            build: build.map(BuildMetadata::new).transpose()?,
        })
    }

    /// Builder-style: returns this version with its pre-release label replaced by `pre`.
    pub fn with_pre(mut self, pre: &str) -> Result<Self, VersionError> {
        self.set_pre(pre)?;
        Ok(self)
    }

    /// Builder-style: returns this version with its build metadata replaced by `build`.
    pub fn with_build(mut self, build: &str) -> Result<Self, VersionError> {
        self.set_build(build)?;
        Ok(self)
    }

    /// Parses a full version string, such as `1.2.3`, `1.0.0-rc.1` or `1.0.0-rc.1+sha.5114f85`.
    ///
    /// No leading `v` or surrounding whitespace is accepted. See [`crate::ops::clean`] for that.
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::Parse`] if `version_str` is not a valid semantic version, or if
    ///   its major, minor or patch number does not fit in a `u64`. Numeric pre-release identifiers
    ///   have no such limit.
    pub fn parse(version_str: &str) -> Result<Self, VersionError> {
        let parts = grammar::split_version(version_str)?;
        let number = |s: &str| {
            s.parse::<u64>()
                .map(VersionNumber::new)
                .map_err(|_| VersionError::parse(Grammar::Version, version_str))
        };
        let pre_release = |s: &str| {
            PreRelease::new(s).map_err(|_| VersionError::parse(Grammar::Version, version_str))
        };

        let version = Self {
            major: number(parts.major)?,
            minor: number(parts.minor)?,
            patch: number(parts.patch)?,
            pre: parts.pre.map(pre_release).transpose()?,
            build: parts.build.map(BuildMetadata::new).transpose()?,
        };
        debug!(input = version_str, "parsed version");
        Ok(version)
    }

    /// The major number.
    pub fn major(&self) -> u64 {
        self.major.value()
    }

    /// The minor number.
    pub fn minor(&self) -> u64 {
        self.minor.value()
    }

    /// The patch number.
    pub fn patch(&self) -> u64 {
        self.patch.value()
    }

    /// The pre-release label without its leading `-`, if there is one.
    pub fn pre(&self) -> Option<&str> {
        self.pre.as_ref().map(PreRelease::as_str)
    }

    /// The build metadata without its leading `+`, if there is any.
    pub fn build(&self) -> Option<&str> {
        self.build.as_ref().map(BuildMetadata::as_str)
    }

    /// The structured pre-release label, if there is one.
    pub fn pre_release(&self) -> Option<&PreRelease> {
        self.pre.as_ref()
    }

    /// The structured build metadata, if there is any.
    pub fn build_metadata(&self) -> Option<&BuildMetadata> {
        self.build.as_ref()
    }

    /// The trailing numeric identifier of the pre-release label. `None` if there is no
    /// pre-release label, its last identifier is not numeric, or it does not fit in a `u64`.
    pub fn pre_digit(&self) -> Option<u64> {
        self.pre.as_ref().and_then(PreRelease::digit)
    }

    /// Whether a pre-release label is set.
    pub fn has_pre(&self) -> bool {
        self.pre.is_some()
    }

    /// Whether build metadata is set.
    pub fn has_build(&self) -> bool {
        self.build.is_some()
    }

    /// Sets the major number. Labels and other numbers are untouched.
    pub fn set_major(&mut self, major: i64) -> Result<(), VersionError> {
        self.major.set(major)
    }

    /// Sets the minor number. Labels and other numbers are untouched.
    pub fn set_minor(&mut self, minor: i64) -> Result<(), VersionError> {
        self.minor.set(minor)
    }

    /// Sets the patch number. Labels and other numbers are untouched.
    pub fn set_patch(&mut self, patch: i64) -> Result<(), VersionError> {
        self.patch.set(patch)
    }

    /// Sets (or replaces) the pre-release label. `pre` must not include the leading `-`.
    pub fn set_pre(&mut self, pre: &str) -> Result<(), VersionError> {
        self.pre = Some(PreRelease::new(pre)?);
        Ok(())
    }

    /// Sets (or replaces) the build metadata. `build` must not include the leading `+`.
    pub fn set_build(&mut self, build: &str) -> Result<(), VersionError> {
        self.build = Some(BuildMetadata::new(build)?);
        Ok(())
    }

    /// Removes the pre-release label, if any. `1.4.5-alpha.4+meta` becomes `1.4.5+meta`.
    pub fn remove_pre(&mut self) {
        self.pre = None;
    }

    /// Removes the build metadata, if any. `1.4.5-alpha.4+meta` becomes `1.4.5-alpha.4`.
    pub fn remove_build(&mut self) {
        self.build = None;
    }

    fn number_mut(&mut self, position: Position) -> Option<&mut VersionNumber> {
        match position {
            Position::Major => Some(&mut self.major),
            Position::Minor => Some(&mut self.minor),
            Position::Patch => Some(&mut self.patch),
            Position::Pre => None,
        }
    }

    fn pre_mut(&mut self) -> Result<&mut PreRelease, VersionError> {
        match self.pre {
            Some(ref mut pre) => Ok(pre),
            None => Err(VersionError::NoPreRelease {
                version: self.to_string(),
            }),
        }
    }

    /// Increments the number at `position` by one.
    ///
    /// Incrementing major, minor or patch resets the lesser numbers to zero, but leaves the
    /// pre-release label and build metadata alone: the major of `2.3.5-alpha.1+a93eb2` increments
    /// to `3.0.0-alpha.1+a93eb2`.
    ///
    /// Incrementing [`Position::Pre`] increments the trailing numeric identifier of the
    /// pre-release label.
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::NoPreRelease`] if `position` is [`Position::Pre`] and there is no
    ///   pre-release label.
    /// - Returns [`VersionError::NoTrailingDigit`] if `position` is [`Position::Pre`] and the
    ///   last pre-release identifier is not numeric.
    /// - Returns [`VersionError::Overflow`] if major, minor or patch is already `u64::MAX`. The
    ///   version is not modified.
    pub fn increment(&mut self, position: Position) -> Result<(), VersionError> {
        match self.number_mut(position) {
            Some(number) => {
                number.increment()?;
                for &lesser in position.lesser() {
                    if let Some(number) = self.number_mut(lesser) {
                        number.reset();
                    }
                }
            }
            None => self.pre_mut()?.increment()?,
        }
        debug!(%position, version = %self, "incremented");
        Ok(())
    }

    /// Decrements the number at `position` by one. No other part of the version changes: the
    /// major of `2.6.12-beta.5+meta` decrements to `1.6.12-beta.5+meta`.
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::NegativeDecrement`] if the number is already zero.
    /// - Returns [`VersionError::NoPreRelease`] or [`VersionError::NoTrailingDigit`] for
    ///   [`Position::Pre`], as with [`Version::increment`].
    pub fn decrement(&mut self, position: Position) -> Result<(), VersionError> {
        match self.number_mut(position) {
            Some(number) => number.decrement()?,
            None => self.pre_mut()?.decrement()?,
        }
        debug!(%position, version = %self, "decremented");
        Ok(())
    }

    /// Adds `amount` to the number at `position`.
    ///
    /// With `carry`, every position to the right is reset: lesser numbers become zero and the
    /// pre-release label is removed. Build metadata is always kept. Bumping [`Position::Pre`]
    /// adds `amount` to the trailing pre-release digit, which has no upper bound, and ignores
    /// `carry`.
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::Overflow`] if major, minor or patch would exceed `u64::MAX`. The
    ///   version is not modified.
    /// - Returns [`VersionError::NoPreRelease`] or [`VersionError::NoTrailingDigit`] for
    ///   [`Position::Pre`], even when `amount` is zero.
    pub fn bump(
        &mut self,
        position: Position,
        amount: u64,
        carry: bool,
    ) -> Result<(), VersionError> {
        match self.number_mut(position) {
            Some(number) => {
                number.add(amount)?;
                if carry {
                    for &lesser in position.lesser() {
                        if let Some(number) = self.number_mut(lesser) {
                            number.reset();
                        }
                    }
                    self.remove_pre();
                }
            }
            None => self.pre_mut()?.add(amount)?,
        }
        debug!(%position, amount, carry, version = %self, "bumped");
        Ok(())
    }

    /// Applies an [`AddOp`] and returns `self` so operations can be chained.
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::LabelExists`] when adding a label that is already set. The
    ///   version is not modified.
    /// - Returns [`VersionError::Parse`] when the label to add is invalid.
    /// - Otherwise, see [`Version::increment`].
    pub fn apply_add(&mut self, op: AddOp) -> Result<&mut Self, VersionError> {
        match &op {
            AddOp::Increment(position) => self.increment(*position)?,
            AddOp::SetPreRelease(pre) => {
                self.ensure_absent(Label::PreRelease)?;
                self.set_pre(pre)?;
            }
            AddOp::SetBuild(build) => {
                self.ensure_absent(Label::Build)?;
                self.set_build(build)?;
            }
        }
        debug!(%op, version = %self, "applied add");
        Ok(self)
    }

    /// Applies a [`RemoveOp`] and returns `self` so operations can be chained.
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::LabelMissing`] when removing a label that is not set.
    /// - Otherwise, see [`Version::decrement`].
    pub fn apply_remove(&mut self, op: RemoveOp) -> Result<&mut Self, VersionError> {
        match op {
            RemoveOp::Decrement(position) => self.decrement(position)?,
            RemoveOp::RemovePreRelease => {
                self.ensure_present(Label::PreRelease)?;
                self.remove_pre();
            }
            RemoveOp::RemoveBuild => {
                self.ensure_present(Label::Build)?;
                self.remove_build();
            }
        }
        debug!(%op, version = %self, "applied remove");
        Ok(self)
    }

    /// Applies either kind of [`Operation`].
    pub fn apply(&mut self, op: Operation) -> Result<&mut Self, VersionError> {
        match op {
            Operation::Add(op) => self.apply_add(op),
            Operation::Remove(op) => self.apply_remove(op),
        }
    }

    fn has_label(&self, label: Label) -> bool {
        match label {
            Label::PreRelease => self.has_pre(),
            Label::Build => self.has_build(),
        }
    }

    fn ensure_absent(&self, label: Label) -> Result<(), VersionError> {
        if self.has_label(label) {
            return Err(VersionError::LabelExists {
                label,
                version: self.to_string(),
            });
        }
        Ok(())
    }

    fn ensure_present(&self, label: Label) -> Result<(), VersionError> {
        if !self.has_label(label) {
            return Err(VersionError::LabelMissing {
                label,
                version: self.to_string(),
            });
        }
        Ok(())
    }

    /// Resets to `0.0.0`, removing both labels.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the pre-release label marks an alpha release. See [`PreRelease::is_alpha`].
    pub fn is_alpha(&self) -> bool {
        self.pre.as_ref().is_some_and(PreRelease::is_alpha)
    }

    /// Whether the pre-release label marks a beta release. See [`PreRelease::is_beta`].
    pub fn is_beta(&self) -> bool {
        self.pre.as_ref().is_some_and(PreRelease::is_beta)
    }

    /// Whether the pre-release label marks a release candidate. See [`PreRelease::is_rc`].
    pub fn is_rc(&self) -> bool {
        self.pre.as_ref().is_some_and(PreRelease::is_rc)
    }

    /// Whether this is a final release: neither a pre-release label nor build metadata.
    ///
    /// `2.6.2` is final, `2.1.2+build3201b3` is not.
    pub fn is_final(&self) -> bool {
        !self.has_pre() && !self.has_build()
    }

    /// Whether this is a stable release: a major of at least 1 and no pre-release label. Build
    /// metadata is allowed, so this is looser than [`Version::is_final`].
    pub fn is_stable(&self) -> bool {
        self.major() > 0 && !self.has_pre()
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for Version {
    /// Versions are equal when their numbers and pre-release labels are. Build metadata is
    /// ignored.
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// Compares by precedence: major, minor and patch numerically, then the pre-release label,
    /// where having no label outranks having one.
    fn cmp(&self, other: &Self) -> Ordering {
        let ordering = self
            .major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            });
        trace!(lhs = %self, rhs = %other, ?ordering, "compared");
        ordering
    }
}

impl Display for Version {
    /// Renders `MAJOR.MINOR.PATCH[-PRE][+BUILD]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "{}{pre}", Label::PreRelease.prefix())?;
        }
        if let Some(build) = &self.build {
            write!(f, "{}{build}", Label::Build.prefix())?;
        }
        Ok(())
    }
}
