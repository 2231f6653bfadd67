use crate::error::VersionError;
use crate::grammar::Grammar;
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// Build metadata: the dot-separated identifiers after the `+` of a version.
///
/// Build metadata has no precedence, so this type deliberately does not implement `PartialOrd`.
/// Versions that differ only in build metadata compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildMetadata {
    string: String,
}

impl BuildMetadata {
    /// Parses build metadata. `s` must not include the leading `+`.
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::Parse`] if `s` is not valid build metadata.
    pub fn new(s: &str) -> Result<Self, VersionError> {
        let s = Grammar::Build.validate(s)?;
        Ok(Self {
            string: s.to_owned(),
        })
    }

    /// Replaces the metadata with `s`. On failure, the metadata is left unchanged.
    pub fn set(&mut self, s: &str) -> Result<(), VersionError> {
        *self = Self::new(s)?;
        Ok(())
    }

    /// Returns the metadata without the leading `+`.
    pub fn as_str(&self) -> &str {
        &self.string
    }
}

impl FromStr for BuildMetadata {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}
