use crate::error::IncrementError;
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// The kind of release to increment a [`Version`](crate::Version) to.
///
/// See [`increment`](crate::increment) for what each one does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    /// `1.2.3` → `2.0.0`
    Major,
    /// `1.2.3` → `1.3.0`
    Minor,
    /// `1.2.3` → `1.2.4`
    Patch,
    /// `1.2.3` → `2.0.0-0`
    Premajor,
    /// `1.2.3` → `1.3.0-0`
    Preminor,
    /// `1.2.3` → `1.2.4-0`
    Prepatch,
    /// `1.2.3` → `1.2.4-0`, but `1.2.3-0` → `1.2.3-1`
    Prerelease,
    /// `1.2.3` → `1.2.3-0`, and `1.2.3-0` → `1.2.3-1`
    Pre,
}

impl ReleaseType {
    /// Every release type, from most to least significant.
    pub const ALL: [ReleaseType; 8] = [
        ReleaseType::Major,
        ReleaseType::Minor,
        ReleaseType::Patch,
        ReleaseType::Premajor,
        ReleaseType::Preminor,
        ReleaseType::Prepatch,
        ReleaseType::Prerelease,
        ReleaseType::Pre,
    ];

    const EXPECTED: &'static str =
        "`major`, `minor`, `patch`, `premajor`, `preminor`, `prepatch`, `prerelease` or `pre`";

    /// Returns the lowercase name of this release type, as accepted by [`ReleaseType::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            ReleaseType::Major => "major",
            ReleaseType::Minor => "minor",
            ReleaseType::Patch => "patch",
            ReleaseType::Premajor => "premajor",
            ReleaseType::Preminor => "preminor",
            ReleaseType::Prepatch => "prepatch",
            ReleaseType::Prerelease => "prerelease",
            ReleaseType::Pre => "pre",
        }
    }
}

impl FromStr for ReleaseType {
    type Err = IncrementError;

    /// Parses a release type from its exact lowercase name.
    ///
    /// # Errors
    ///
    /// - Returns [`IncrementError::InvalidReleaseType`] for any other string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReleaseType::ALL
            .into_iter()
            .find(|release_type| release_type.name() == s)
            .ok_or_else(|| IncrementError::InvalidReleaseType {
                release_type: s.to_owned(),
                expected: Self::EXPECTED,
            })
    }
}

impl Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
