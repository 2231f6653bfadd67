use asemver::ops::{self, add, bump, compare, sub, update};
use asemver::prelude::*;
use asemver::{ErrorKind, Grammar};
use itertools::Itertools;
use rstest::*;
use std::cmp::Ordering;

use AddOp::{Increment, SetBuild, SetPreRelease};
use Position::{Major, Minor, Patch, Pre};
use RemoveOp::{Decrement, RemoveBuild, RemovePreRelease};

#[fixture]
fn ordered() -> Vec<&'static str> {
    vec![
        "0.0.0",
        "0.0.1-0",
        "0.0.1",
        "0.9.0",
        "1.0.0-0.3.7",
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
        "1.0.1",
        "1.10.0",
        "10.0.0",
    ]
}

#[rstest]
fn test_compare_ordered(ordered: Vec<&'static str>) {
    for (lhs, rhs) in ordered.iter().tuple_combinations() {
        assert_eq!(Ok(Ordering::Less), compare(lhs, rhs), "{lhs} < {rhs}");
        assert_eq!(Ok(Ordering::Greater), compare(rhs, lhs), "{rhs} > {lhs}");
    }
}

#[rstest]
#[case("4.5.6", "4.5.6")]
#[case("4.5.6-alpha.1", "4.5.6-alpha.1")]
#[case("4.5.6+meta1", "4.5.6+meta2")]
#[case("4.5.6-alpha.1+meta1", "4.5.6-alpha.1+meta2")]
fn test_compare_equal(#[case] lhs: &str, #[case] rhs: &str) {
    assert_eq!(0, compare(lhs, rhs).unwrap() as i8);
}

#[rstest]
#[case("a", "bc", "a")]
#[case("23.02.3", "1.2.3", "23.02.3")]
#[case("2.5.2", "bc", "bc")]
#[case("23.32.11", "1-2.3", "1-2.3")]
#[case("23.202.6", "2.1b9+meta+e", "2.1b9+meta+e")]
fn test_compare_invalid(#[case] lhs: &str, #[case] rhs: &str, #[case] bad: &str) {
    assert_eq!(
        Err(VersionError::Parse {
            grammar: Grammar::Version,
            value: bad.to_string()
        }),
        compare(lhs, rhs)
    );
}

#[rstest]
#[case("2.5.3-alpha.52+meta34", Major, 1, "3.5.3-alpha.52+meta34")]
#[case("2.5.3-alpha.52+meta34", Minor, 1, "2.6.3-alpha.52+meta34")]
#[case("2.5.3+meta34", Patch, 1, "2.5.4+meta34")]
#[case("2.5.3-alpha.52+meta34", Pre, 1, "2.5.3-alpha.53+meta34")]
#[case("2.5.3-alpha.52+meta34", Major, 4, "6.5.3-alpha.52+meta34")]
#[case("2.5.3-alpha.52+meta34", Minor, 2, "2.7.3-alpha.52+meta34")]
#[case("2.5.3-alpha.52+meta34", Patch, 9, "2.5.12-alpha.52+meta34")]
#[case("2.5.3-alpha.52+meta34", Pre, 3, "2.5.3-alpha.55+meta34")]
fn test_bump_no_carry(
    #[case] orig: &str,
    #[case] position: Position,
    #[case] amount: u64,
    #[case] expected: &str,
) {
    assert_eq!(Ok(expected.to_string()), bump(orig, position, amount, false));
}

#[rstest]
#[case("2.5.3-alpha.52+meta34", Major, 1, "3.0.0+meta34")]
#[case("2.5.3-alpha.52+meta34", Minor, 1, "2.6.0+meta34")]
#[case("2.5.3+meta34", Patch, 1, "2.5.4+meta34")]
#[case("2.5.3-alpha.52+meta34", Pre, 1, "2.5.3-alpha.53+meta34")]
#[case("2.5.3-alpha.52+meta34", Major, 4, "6.0.0+meta34")]
#[case("2.5.3-alpha.52+meta34", Minor, 2, "2.7.0+meta34")]
#[case("2.5.3-alpha.52+meta34", Patch, 9, "2.5.12+meta34")]
#[case("2.5.3-alpha.52+meta34", Pre, 3, "2.5.3-alpha.55+meta34")]
fn test_bump_carry(
    #[case] orig: &str,
    #[case] position: Position,
    #[case] amount: u64,
    #[case] expected: &str,
) {
    assert_eq!(Ok(expected.to_string()), bump(orig, position, amount, true));
}

#[test]
fn test_bump_errors() {
    let no_pre = bump("1.2.3", Pre, 1, true).unwrap_err();
    assert_eq!(ErrorKind::NoValue, no_pre.kind());
    assert_eq!("Version `1.2.3` has no pre-release label", no_pre.to_string());

    let no_digit = bump("1.2.5-alpha6", Pre, 1, true).unwrap_err();
    assert_eq!(ErrorKind::NoValue, no_digit.kind());
    assert_eq!(
        "No digit to increment/decrement. Make sure the last dot-separated identifier is a \
        numeric value: alpha6",
        no_digit.to_string()
    );

    let bad_position = "build".parse::<Position>().unwrap_err();
    assert_eq!(ErrorKind::InvalidPosition, bad_position.kind());

    let overflow = bump(&format!("{}.0.0", u64::MAX), Major, 1, true).unwrap_err();
    assert_eq!(ErrorKind::Overflow, overflow.kind());
}

#[rstest]
#[case("2.5.5", vec![Increment(Minor), Increment(Patch)], "2.6.1")]
#[case(
    "4.2.9",
    vec![
        Increment(Major),
        SetPreRelease("alpha.4".into()),
        Increment(Minor),
        Increment(Pre),
        Increment(Minor),
        Increment(Patch),
    ],
    "5.2.1-alpha.5"
)]
#[case(
    "5.2.6-alpha.6",
    vec![Increment(Major), SetBuild("meta".into()), Increment(Patch)],
    "6.0.1-alpha.6+meta"
)]
#[case(
    "2.3.4",
    vec![SetBuild("meta49".into()), SetPreRelease("beta.2".into())],
    "2.3.4-beta.2+meta49"
)]
fn test_add(#[case] version: &str, #[case] ops: Vec<AddOp>, #[case] expected: &str) {
    assert_eq!(Ok(expected.to_string()), add(version, ops));
}

#[rstest]
#[case(
    "2.5.5",
    vec![Decrement(Patch), Decrement(Minor), Decrement(Major), Decrement(Minor)],
    "1.3.4"
)]
#[case(
    "2.5.5-alpha.6",
    vec![Decrement(Patch), Decrement(Minor), Decrement(Major), RemovePreRelease, Decrement(Minor)],
    "1.3.4"
)]
#[case(
    "2.5.5+meta.6",
    vec![Decrement(Patch), Decrement(Minor), Decrement(Major), RemoveBuild, Decrement(Minor)],
    "1.3.4"
)]
#[case(
    "2.5.5-alpha.6+meta.6",
    vec![
        Decrement(Patch),
        Decrement(Minor),
        RemovePreRelease,
        Decrement(Major),
        RemoveBuild,
        Decrement(Minor),
    ],
    "1.3.4"
)]
fn test_sub(#[case] version: &str, #[case] ops: Vec<RemoveOp>, #[case] expected: &str) {
    assert_eq!(Ok(expected.to_string()), sub(version, ops));
}

#[rstest]
#[case("2.5.5", &["minor", "patch"], "2.6.1")]
#[case("2.5.5", &["+meta", "minor", "patch", "-alpha.56"], "2.6.1-alpha.56+meta")]
#[case("2.5.5-alpha.56+meta", &["~+", "minor", "patch", "~-"], "2.6.1")]
#[case(
    "2.5.7-alpha.65+meta.22",
    &["major", "~-", "minor", "~+", "minor", "-beta.0", "pre", "minor", "patch"],
    "3.3.1-beta.1"
)]
fn test_update(#[case] version: &str, #[case] ops: &[&str], #[case] expected: &str) {
    let ops: Vec<Operation> = ops.iter().map(|op| op.parse().unwrap()).collect();
    assert_eq!(Ok(expected.to_string()), update(version, ops));
}

#[rstest]
#[case("1.2.3-rc.1", vec![Operation::Add(SetPreRelease("rc.2".into()))], ErrorKind::InvalidOperation)]
#[case("1.2.3", vec![Operation::Remove(RemoveBuild)], ErrorKind::InvalidOperation)]
#[case("0.2.3", vec![Operation::Add(Increment(Minor)), Operation::Remove(Decrement(Major))], ErrorKind::NegativeValue)]
#[case("1.2.3", vec![Operation::Add(SetBuild("a..b".into()))], ErrorKind::Parse)]
#[case("1.2", vec![], ErrorKind::Parse)]
fn test_update_errors(
    #[case] version: &str,
    #[case] ops: Vec<Operation>,
    #[case] expected: ErrorKind,
) {
    assert_eq!(Err(expected), update(version, ops).map_err(|e| e.kind()));
}

#[rstest]
#[case("  v=1.2.3  ", "1.2.3")]
#[case("=v1.2.3-beta.4+build", "1.2.3-beta.4+build")]
#[case("vvv1.2.3", "1.2.3")]
#[case("1.2.3v", "1.2.3v")]
#[case("  x1.2.3", "x1.2.3")]
fn test_clean(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(expected, ops::clean(input));
}

#[rstest]
#[case("1.2.3", true)]
#[case("1.2.3.4", false)]
#[case("01.2.3", false)]
#[case("1.2.3-", false)]
#[case("1.2.3-01", false)]
#[case("1.2.3-0.01a", true)]
fn test_valid(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(expected, ops::valid(input));
}

#[rstest]
#[case("1.0.0-99999999999999999999")]
#[case("1.0.0-alpha.18446744073709551616.x")]
#[case("0.0.0-0.340282366920938463463374607431768211456")]
fn test_valid_strings_parse(#[case] input: &str) {
    assert!(ops::valid(input));
    assert_eq!(Ok(input.to_string()), ops::parse(input).map(|v| v.to_string()));
}

#[rstest]
#[case("1.0.0-rc.18446744073709551615", 1, "1.0.0-rc.18446744073709551616")]
#[case("1.0.0-rc.0", u64::MAX, "1.0.0-rc.18446744073709551615")]
#[case("1.0.0-rc.99999999999999999999", 1, "1.0.0-rc.100000000000000000000")]
fn test_bump_pre_past_u64(#[case] orig: &str, #[case] amount: u64, #[case] expected: &str) {
    assert_eq!(Ok(expected.to_string()), bump(orig, Pre, amount, true));
    assert_eq!(Ok(Ordering::Less), compare(orig, expected));
}

#[test]
fn test_increment_at_u64_max_is_an_error() {
    let max = format!("{}.2.3", u64::MAX);
    let err = update(&max, [Operation::Add(Increment(Major))]).unwrap_err();
    assert_eq!(ErrorKind::Overflow, err.kind());
}

#[test]
fn test_parse_round_trip() {
    let inputs = [
        "0.0.4",
        "1.1.2-prerelease+meta",
        "1.0.0-alpha.beta.1",
        "1.2.3----R-S.12.9.1--.12+meta",
        "2.0.0+build.1848",
    ];
    for input in inputs {
        let version = ops::parse(input).unwrap();
        assert_eq!(input, version.to_string());
        assert_eq!(version, ops::parse(&version.to_string()).unwrap());
    }
}
