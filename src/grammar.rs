//! Anchored regular grammars for the pieces of a semantic version.
//!
//! See <https://semver.org/spec/v2.0.0.html#backusnaur-form-grammar-for-valid-semver-versions>.

use crate::error::VersionError;
use core::fmt::{self, Display};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// a numeric identifier, or an alphanumeric one that has at least one non-digit
const PRE_IDENTIFIER: &str = r"(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)";
const BUILD_IDENTIFIER: &str = r"[0-9a-zA-Z-]+";
const NUMBER: &str = r"(0|[1-9][0-9]*)";

static PRE_RELEASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{PRE_IDENTIFIER}(?:\.{PRE_IDENTIFIER})*$"))
        .expect("pre-release pattern should compile")
});

static BUILD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{BUILD_IDENTIFIER}(?:\.{BUILD_IDENTIFIER})*$"))
        .expect("build pattern should compile")
});

static VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^{NUMBER}\.{NUMBER}\.{NUMBER}(?:-({PRE_IDENTIFIER}(?:\.{PRE_IDENTIFIER})*))?(?:\+({BUILD_IDENTIFIER}(?:\.{BUILD_IDENTIFIER})*))?$"
    ))
    .expect("version pattern should compile")
});

static NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{NUMBER}$")).expect("numeric pattern should compile"));

/// The grammars a string can be validated against. Carried by [`VersionError::Parse`] so callers
/// know which kind of string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// The identifiers following the `-` of a version.
    PreRelease,
    /// The identifiers following the `+` of a version.
    Build,
    /// A full `MAJOR.MINOR.PATCH[-PRE][+BUILD]` version.
    Version,
}

impl Grammar {
    fn regex(&self) -> &'static Regex {
        match self {
            Grammar::PreRelease => &PRE_RELEASE_RE,
            Grammar::Build => &BUILD_RE,
            Grammar::Version => &VERSION_RE,
        }
    }

    /// Returns true if the whole of `s` matches this grammar.
    pub fn is_match(&self, s: &str) -> bool {
        self.regex().is_match(s)
    }

    /// Returns `s` back if it matches this grammar, or a [`VersionError::Parse`] naming the
    /// grammar and `s`.
    pub fn validate<'a>(&self, s: &'a str) -> Result<&'a str, VersionError> {
        if self.is_match(s) {
            Ok(s)
        } else {
            Err(VersionError::parse(*self, s))
        }
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Grammar::PreRelease => "pre-release",
            Grammar::Build => "build/metadata",
            Grammar::Version => "semantic version",
        };
        f.write_str(name)
    }
}

/// The borrowed pieces of a version string that matched [`Grammar::Version`].
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct VersionParts<'s> {
    pub(crate) major: &'s str,
    pub(crate) minor: &'s str,
    pub(crate) patch: &'s str,
    pub(crate) pre: Option<&'s str>,
    pub(crate) build: Option<&'s str>,
}

impl<'s> VersionParts<'s> {
    fn from_captures(caps: &Captures<'s>) -> Option<Self> {
        Some(Self {
            major: caps.get(1)?.as_str(),
            minor: caps.get(2)?.as_str(),
            patch: caps.get(3)?.as_str(),
            pre: caps.get(4).map(|m| m.as_str()),
            build: caps.get(5).map(|m| m.as_str()),
        })
    }
}

/// Splits a version string into its five parts, or returns a [`VersionError::Parse`].
pub(crate) fn split_version(s: &str) -> Result<VersionParts<'_>, VersionError> {
    VERSION_RE
        .captures(s)
        .as_ref()
        .and_then(VersionParts::from_captures)
        .ok_or_else(|| VersionError::parse(Grammar::Version, s))
}

/// Returns true if a single dot-separated identifier is numeric: `0`, or digits without a leading
/// zero.
pub(crate) fn is_numeric_identifier(identifier: &str) -> bool {
    NUMERIC_RE.is_match(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("alpha", true)]
    #[case("alpha.1", true)]
    #[case("0", true)]
    #[case("0.3.7", true)]
    #[case("x.7.z.92", true)]
    #[case("x-y-z.--", true)]
    #[case("0alpha", true)]
    #[case("-", true)]
    #[case("01", false)] // leading zero on a numeric identifier
    #[case("alpha..1", false)]
    #[case("alpha.", false)]
    #[case("", false)]
    #[case("alpha_beta", false)]
    #[case("alpha+1", false)]
    fn test_pre_release_grammar(#[case] s: &str, #[case] matches: bool) {
        assert_eq!(matches, Grammar::PreRelease.is_match(s));
    }

    #[rstest]
    #[case("001", true)] // leading zeros are fine in build metadata
    #[case("exp.sha.5114f85", true)]
    #[case("21AF26D3----117B344092BD", true)]
    #[case("meta+meta", false)]
    #[case("a..b", false)]
    #[case("", false)]
    fn test_build_grammar(#[case] s: &str, #[case] matches: bool) {
        assert_eq!(matches, Grammar::Build.is_match(s));
    }

    #[rstest]
    #[case("0.0.4", true)]
    #[case("1.2.3", true)]
    #[case("10.20.30", true)]
    #[case("1.1.2-prerelease+meta", true)]
    #[case("1.1.2+meta-valid", true)]
    #[case("1.0.0-alpha.beta.1", true)]
    #[case("1.0.0-rc.1+build.1", true)]
    #[case("2.0.0-rc.1+build.123", true)]
    #[case("1.2.3----RC-SNAPSHOT.12.9.1--.12+788", true)]
    #[case("1.0.0+0.build.1-rc.10000aaa-kk-0.1", true)]
    #[case("1", false)]
    #[case("1.2", false)]
    #[case("1.2.3.4", false)]
    #[case("01.2.3", false)]
    #[case("1.02.3", false)]
    #[case("1.2.03", false)]
    #[case("1.2.3-0123", false)]
    #[case("1.2.3-alpha..1", false)]
    #[case("+justmeta", false)]
    #[case("9.8.7+meta+meta", false)]
    #[case("v1.2.3", false)]
    #[case(" 1.2.3", false)]
    fn test_version_grammar(#[case] s: &str, #[case] matches: bool) {
        assert_eq!(matches, Grammar::Version.is_match(s));
    }

    #[test]
    fn test_split_version() {
        let parts = split_version("1.22.333-rc.1+sha.abc").unwrap();
        assert_eq!(
            VersionParts {
                major: "1",
                minor: "22",
                patch: "333",
                pre: Some("rc.1"),
                build: Some("sha.abc"),
            },
            parts
        );

        let parts = split_version("1.2.3+only").unwrap();
        assert_eq!(None, parts.pre);
        assert_eq!(Some("only"), parts.build);
    }

    #[test]
    fn test_split_version_error() {
        assert_eq!(
            Err(VersionError::Parse {
                grammar: Grammar::Version,
                value: "1.2".to_string()
            }),
            split_version("1.2")
        );
    }

    #[rstest]
    #[case("0", true)]
    #[case("7", true)]
    #[case("120", true)]
    #[case("007", false)]
    #[case("7a", false)]
    #[case("-", false)]
    fn test_is_numeric_identifier(#[case] s: &str, #[case] numeric: bool) {
        assert_eq!(numeric, is_numeric_identifier(s));
    }
}
