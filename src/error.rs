/// Errors that can occur when incrementing a [`Version`](crate::Version).
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum IncrementError {
    /// Returned when a release type string is not one of `major`, `minor`, `patch`, `premajor`,
    /// `preminor`, `prepatch`, `prerelease` or `pre`.
    #[error("Release type `{release_type}` should be one of {expected}")]
    InvalidReleaseType {
        /// The release type string that was given
        release_type: String,
        /// A human-readable list of the accepted release types
        expected: &'static str,
    },
}

/// Errors that can occur when parsing a [`Version`](crate::Version) or an
/// [`Identifier`](crate::Identifier) from a string.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    /// Returned when the version string is empty.
    #[error("Version string should not be empty")]
    Empty,

    /// Returned when the core of the version is not exactly `MAJOR.MINOR.PATCH`.
    #[error("Version core should have exactly 3 dot-separated parts, found {found}")]
    UnexpectedCoreParts {
        /// The number of parts that were found
        found: usize,
    },

    /// Returned when a major, minor or patch part is not a non-negative integer that fits in a
    /// `u64`.
    #[error("`{part}` should be a non-negative integer")]
    InvalidNumber {
        /// The offending part
        part: String,
    },

    /// Returned when a major, minor, patch or numeric prerelease identifier has a leading zero.
    #[error("Numeric part `{part}` should not have leading zeros")]
    LeadingZero {
        /// The offending part
        part: String,
    },

    /// Returned when a prerelease or build identifier is empty, such as in `1.2.3-alpha..1`.
    #[error("Prerelease and build identifiers should not be empty")]
    EmptyIdentifier,

    /// Returned when an identifier contains something other than ASCII alphanumerics and hyphens.
    #[error("Identifier `{identifier}` should only contain ASCII alphanumerics and hyphens")]
    InvalidCharacter {
        /// The offending identifier
        identifier: String,
    },
}
