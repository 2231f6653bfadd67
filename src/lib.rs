//! # asemver
//!
//! A library for parsing, comparing and mutating [Semantic Versioning 2.0.0](https://semver.org/)
//! versions.
//!
//! ## Examples
//!
//! Parse, bump and compare a version:
//!
//! ```
//! use asemver::prelude::*;
//!
//! let mut version = Version::parse("2.5.3-alpha.52+meta34").unwrap();
//! version.increment(Position::Minor).unwrap();
//! assert_eq!("2.6.0-alpha.52+meta34", version.to_string());
//! assert!(version < Version::parse("2.6.0").unwrap());
//! ```
//!
//! Or work on strings directly with the [`ops`] module:
//!
//! ```
//! use asemver::ops;
//! use asemver::Position;
//!
//! let next = ops::bump("1.4.2-rc.3", Position::Patch, 1, true).unwrap();
//! assert_eq!("1.4.3", next);
//! ```
//!
//! ## Important Terms
//!
//! - **Version**: `MAJOR.MINOR.PATCH`, optionally followed by a *pre-release label* and *build
//!   metadata*. It's modeled by the [`Version`] struct.
//! - **Pre-release label**: Dot-separated identifiers after a `-`, as in `1.0.0-alpha.1`. A version
//!   with one has lower precedence than the same version without one. It's modeled by
//!   [`PreRelease`].
//! - **Build metadata**: Dot-separated identifiers after a `+`, as in `1.0.0+sha.5114f85`. It is
//!   ignored when comparing versions. It's modeled by [`BuildMetadata`].
//! - **Position**: One of the parts that can be incremented or decremented: major, minor, patch or
//!   the trailing digit of the pre-release label. See [`Position`].
//!
//! ## Mutation Rules
//!
//! | Operation | Effect | Fails when |
//! |---|---|---|
//! | [`Version::increment`] | Adds one to a position, zeroing lesser numbers | the number overflows, or the pre-release has no trailing digit |
//! | [`Version::decrement`] | Subtracts one from a position | the position is already `0` |
//! | [`Version::bump`] | Adds any amount, optionally zeroing lesser numbers and dropping the pre-release | a major, minor or patch number overflows |
//! | [`AddOp::SetPreRelease`], [`AddOp::SetBuild`] | Adds a label | the label already exists |
//! | [`RemoveOp::RemovePreRelease`], [`RemoveOp::RemoveBuild`] | Removes a label | the label does not exist |
//!
//! A failed mutation leaves the version unchanged.

#![warn(missing_docs)]

mod build;
mod error;
mod grammar;
mod number;
mod operation;
pub mod ops;
mod position;
mod prerelease;
mod version;

pub use crate::build::BuildMetadata;
pub use crate::error::{ErrorKind, VersionError};
pub use crate::grammar::Grammar;
pub use crate::number::VersionNumber;
pub use crate::operation::{AddOp, Operation, RemoveOp};
pub use crate::position::{Label, Position};
pub use crate::prerelease::{Identifier, PreRelease};
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use asemver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::AddOp;
    #[doc(no_inline)]
    pub use crate::BuildMetadata;
    #[doc(no_inline)]
    pub use crate::Label;
    #[doc(no_inline)]
    pub use crate::Operation;
    #[doc(no_inline)]
    pub use crate::Position;
    #[doc(no_inline)]
    pub use crate::PreRelease;
    #[doc(no_inline)]
    pub use crate::RemoveOp;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
