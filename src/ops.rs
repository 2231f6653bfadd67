//! Stateless operations on version strings.
//!
//! Every function here parses its input, does one thing to the resulting [`Version`], and renders
//! it back. They are conveniences for callers that keep versions as text, such as the `asemver`
//! command line.
//!
//! ```
//! use asemver::ops;
//! use asemver::Position;
//!
//! assert_eq!("3.0.0+meta34", ops::bump("2.5.3-alpha.52+meta34", Position::Major, 1, true).unwrap());
//! assert_eq!("1.2.3", ops::clean("  v=1.2.3  "));
//! assert!(!ops::valid("01.2.3"));
//! ```

use crate::{
    error::VersionError,
    operation::{AddOp, Operation, RemoveOp},
    position::Position,
    version::Version,
};
use core::cmp::Ordering;
use tracing::debug;

/// Parses a version string. See [`Version::parse`].
pub fn parse(version: &str) -> Result<Version, VersionError> {
    Version::parse(version)
}

/// Compares two version strings by precedence. Build metadata is ignored.
///
/// Use `compare(..)? as i8` for the conventional `-1`/`0`/`1`.
///
/// ```
/// use asemver::ops::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(Ordering::Less, compare("1.0.0-rc.1", "1.0.0").unwrap());
/// assert_eq!(0, compare("1.2.3+a", "1.2.3+b").unwrap() as i8);
/// ```
pub fn compare(lhs: &str, rhs: &str) -> Result<Ordering, VersionError> {
    Ok(parse(lhs)?.cmp(&parse(rhs)?))
}

/// Bumps the number at `position` by `amount`. See [`Version::bump`] for how `carry` behaves.
pub fn bump(
    version: &str,
    position: Position,
    amount: u64,
    carry: bool,
) -> Result<String, VersionError> {
    let mut parsed = parse(version)?;
    parsed.bump(position, amount, carry)?;
    Ok(parsed.to_string())
}

/// Returns the major number of a version string.
pub fn get_major(version: &str) -> Result<u64, VersionError> {
    Ok(parse(version)?.major())
}

/// Returns the minor number of a version string.
pub fn get_minor(version: &str) -> Result<u64, VersionError> {
    Ok(parse(version)?.minor())
}

/// Returns the patch number of a version string.
pub fn get_patch(version: &str) -> Result<u64, VersionError> {
    Ok(parse(version)?.patch())
}

/// Returns the pre-release label of a version string, without its leading `-`.
pub fn get_pre(version: &str) -> Result<Option<String>, VersionError> {
    Ok(parse(version)?.pre().map(str::to_owned))
}

/// Returns the trailing numeric identifier of the pre-release label of a version string.
pub fn get_pre_digit(version: &str) -> Result<Option<u64>, VersionError> {
    Ok(parse(version)?.pre_digit())
}

/// Returns the build metadata of a version string, without its leading `+`.
pub fn get_build(version: &str) -> Result<Option<String>, VersionError> {
    Ok(parse(version)?.build().map(str::to_owned))
}

fn modify<F>(version: &str, f: F) -> Result<String, VersionError>
where
    F: FnOnce(&mut Version) -> Result<(), VersionError>,
{
    let mut parsed = parse(version)?;
    f(&mut parsed)?;
    Ok(parsed.to_string())
}

/// Sets the major number of a version string.
pub fn set_major(version: &str, major: i64) -> Result<String, VersionError> {
    modify(version, |v| v.set_major(major))
}

/// Sets the minor number of a version string.
pub fn set_minor(version: &str, minor: i64) -> Result<String, VersionError> {
    modify(version, |v| v.set_minor(minor))
}

/// Sets the patch number of a version string.
pub fn set_patch(version: &str, patch: i64) -> Result<String, VersionError> {
    modify(version, |v| v.set_patch(patch))
}

/// Sets or replaces the pre-release label of a version string. `pre` has no leading `-`.
pub fn set_pre(version: &str, pre: &str) -> Result<String, VersionError> {
    modify(version, |v| v.set_pre(pre))
}

/// Sets or replaces the build metadata of a version string. `build` has no leading `+`.
pub fn set_build(version: &str, build: &str) -> Result<String, VersionError> {
    modify(version, |v| v.set_build(build))
}

/// Applies each [`AddOp`] in order. The first failure is returned.
pub fn add<I>(version: &str, ops: I) -> Result<String, VersionError>
where
    I: IntoIterator<Item = AddOp>,
{
    update(version, ops.into_iter().map(Operation::Add))
}

/// Applies each [`RemoveOp`] in order. The first failure is returned.
pub fn sub<I>(version: &str, ops: I) -> Result<String, VersionError>
where
    I: IntoIterator<Item = RemoveOp>,
{
    update(version, ops.into_iter().map(Operation::Remove))
}

/// Applies a mixed sequence of operations from left to right. The first failure is returned.
///
/// ```
/// use asemver::ops::update;
/// use asemver::Operation;
///
/// let ops = ["minor", "-rc.1", "+sha.9", "~-"]
///     .map(|op| op.parse::<Operation>().unwrap());
/// assert_eq!("1.3.0+sha.9", update("1.2.3", ops).unwrap());
/// ```
pub fn update<I>(version: &str, ops: I) -> Result<String, VersionError>
where
    I: IntoIterator,
    I::Item: Into<Operation>,
{
    let mut parsed = parse(version)?;
    for op in ops {
        parsed.apply(op.into())?;
    }
    debug!(from = version, to = %parsed, "updated");
    Ok(parsed.to_string())
}

/// Returns whether `version` is a valid semantic version. Never fails.
pub fn valid(version: &str) -> bool {
    crate::grammar::Grammar::Version.is_match(version)
}

/// Strips surrounding whitespace and any leading run of `v` and `=` characters.
///
/// The result is not validated. Use [`clean_and_parse`] to also parse it.
pub fn clean(version: &str) -> String {
    version.trim().trim_start_matches(['v', '=']).to_owned()
}

/// [Cleans](clean) a version string, then parses it.
pub fn clean_and_parse(version: &str) -> Result<Version, VersionError> {
    parse(&clean(version))
}
