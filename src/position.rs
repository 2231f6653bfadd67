use crate::error::VersionError;
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

/// A position in a version that can be incremented or decremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// The major number. It is greater than the minor and patch positions.
    Major,
    /// The minor number. It is less than the major position and greater than the patch position.
    Minor,
    /// The patch number. It is less than the major and minor positions.
    Patch,
    /// The trailing numeric identifier of the pre-release label, if there is one. It is the least
    /// significant position.
    Pre,
}

impl Position {
    /// All positions, most significant first.
    pub const ALL: [Position; 4] = [
        Position::Major,
        Position::Minor,
        Position::Patch,
        Position::Pre,
    ];

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Position::Major => "major",
            Position::Minor => "minor",
            Position::Patch => "patch",
            Position::Pre => "pre",
        }
    }

    fn order_key(&self) -> u8 {
        match self {
            Position::Major => 0,
            Position::Minor => 1,
            Position::Patch => 2,
            Position::Pre => 3,
        }
    }

    /// Returns the positions that are less significant than this one, most significant first.
    /// These are the positions that are reset when this one is carried.
    pub fn lesser(&self) -> &'static [Position] {
        &Self::ALL[self.order_key() as usize + 1..]
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse it so e.g. major > minor
        other.order_key().cmp(&self.order_key())
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Position {
    type Err = VersionError;

    /// Parses a position name, case-insensitively. Accepts `major`, `minor`, `patch`, and `pre`
    /// (or `prerelease`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(Position::Major),
            "minor" => Ok(Position::Minor),
            "patch" => Ok(Position::Patch),
            "pre" | "prerelease" => Ok(Position::Pre),
            _ => Err(VersionError::InvalidPosition {
                position: s.to_owned(),
            }),
        }
    }
}

/// The optional labels of a version. These are the only parts that can be added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// The pre-release label, e.g. `alpha.1` in `1.2.3-alpha.1`.
    PreRelease,
    /// The build metadata label, e.g. `sha.5114f85` in `1.2.3+sha.5114f85`.
    Build,
}

impl Label {
    /// The character that introduces this label in a version string.
    pub fn prefix(&self) -> char {
        match self {
            Label::PreRelease => '-',
            Label::Build => '+',
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::PreRelease => f.write_str("pre-release"),
            Label::Build => f.write_str("build metadata"),
        }
    }
}
