//! Tagged operations that can be applied to a [`Version`](crate::Version).
//!
//! Each operation says up front what it does to the version, so applying one never has to guess
//! from the shape of its operand. Front ends that receive operations as text use the [`FromStr`]
//! implementations:
//!
//! | Text | Operation |
//! |---|---|
//! | `major`, `minor`, `patch`, `pre` | [`AddOp::Increment`] |
//! | `-<pre-release>` | [`AddOp::SetPreRelease`] |
//! | `+<build>` | [`AddOp::SetBuild`] |
//! | `~major`, `~minor`, `~patch`, `~pre` | [`RemoveOp::Decrement`] |
//! | `~-` | [`RemoveOp::RemovePreRelease`] |
//! | `~+` | [`RemoveOp::RemoveBuild`] |

use crate::error::VersionError;
use crate::position::{Label, Position};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// Something that can be added to a version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AddOp {
    /// Increment the given position, resetting lesser numeric positions.
    Increment(Position),
    /// Add a pre-release label. Fails if one is already set.
    SetPreRelease(String),
    /// Add build metadata. Fails if it is already set.
    SetBuild(String),
}

impl FromStr for AddOp {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(pre) = s.strip_prefix(Label::PreRelease.prefix()) {
            Ok(AddOp::SetPreRelease(pre.to_owned()))
        } else if let Some(build) = s.strip_prefix(Label::Build.prefix()) {
            Ok(AddOp::SetBuild(build.to_owned()))
        } else {
            s.parse()
                .map(AddOp::Increment)
                .map_err(|_| VersionError::InvalidOperand {
                    action: "add",
                    operand: s.to_owned(),
                })
        }
    }
}

impl Display for AddOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOp::Increment(position) => write!(f, "{position}"),
            AddOp::SetPreRelease(pre) => write!(f, "{}{pre}", Label::PreRelease.prefix()),
            AddOp::SetBuild(build) => write!(f, "{}{build}", Label::Build.prefix()),
        }
    }
}

/// Something that can be removed from a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoveOp {
    /// Decrement the given position. Never resets other positions.
    Decrement(Position),
    /// Remove the pre-release label. Fails if there is none.
    RemovePreRelease,
    /// Remove the build metadata. Fails if there is none.
    RemoveBuild,
}

impl FromStr for RemoveOp {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some('-'), None) => Ok(RemoveOp::RemovePreRelease),
            (Some('+'), None) => Ok(RemoveOp::RemoveBuild),
            _ => s
                .parse()
                .map(RemoveOp::Decrement)
                .map_err(|_| VersionError::InvalidOperand {
                    action: "remove",
                    operand: s.to_owned(),
                }),
        }
    }
}

impl Display for RemoveOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveOp::Decrement(position) => write!(f, "{position}"),
            RemoveOp::RemovePreRelease => write!(f, "{}", Label::PreRelease.prefix()),
            RemoveOp::RemoveBuild => write!(f, "{}", Label::Build.prefix()),
        }
    }
}

/// Either kind of operation, for mixed sequences applied with [`crate::ops::update`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    /// See [`AddOp`].
    Add(AddOp),
    /// See [`RemoveOp`].
    Remove(RemoveOp),
}

impl From<AddOp> for Operation {
    fn from(op: AddOp) -> Self {
        Operation::Add(op)
    }
}

impl From<RemoveOp> for Operation {
    fn from(op: RemoveOp) -> Self {
        Operation::Remove(op)
    }
}

impl FromStr for Operation {
    type Err = VersionError;

    /// Text starting with `~` is a [`RemoveOp`], anything else is an [`AddOp`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('~') {
            Some(rest) => rest.parse().map(Operation::Remove),
            None => s.parse().map(Operation::Add),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add(op) => write!(f, "{op}"),
            Operation::Remove(op) => write!(f, "~{op}"),
        }
    }
}
