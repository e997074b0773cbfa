use crate::{
    engine::{increment, increment_str},
    error::{IncrementError, ParseError},
    identifier::{self, Identifier},
    options::IncrementOptions,
    release::ReleaseType,
};
use core::str::FromStr;

/// A [SemVer 2.0.0](https://semver.org/) version: `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
///
/// Versions are values. Incrementing one never modifies it; a new, independent [`Version`] is
/// returned instead.
///
/// An empty `prerelease` means this is a release version, and an empty `build` means there is no
/// build metadata.
///
/// ```
/// use nextsem::prelude::*;
///
/// let version = Version::new(1, 2, 3)
///     .with_prerelease([Identifier::from("alpha"), Identifier::from(1u64)])
///     .with_build(["sha", "5114f85"]);
/// assert_eq!("1.2.3-alpha.1+sha.5114f85", version.to_string());
/// assert_eq!(version, "1.2.3-alpha.1+sha.5114f85".parse().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Version {
    /// The major number
    pub major: u64,
    /// The minor number
    pub minor: u64,
    /// The patch number
    pub patch: u64,
    /// Prerelease identifiers, in precedence order
    pub prerelease: Vec<Identifier>,
    /// Build metadata identifiers
    pub build: Vec<String>,
}

impl Version {
    /// Returns a release version with no prerelease identifiers or build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Returns this version with its prerelease identifiers replaced.
    pub fn with_prerelease(mut self, prerelease: impl IntoIterator<Item = Identifier>) -> Self {
        self.prerelease = prerelease.into_iter().collect();
        self
    }

    /// Returns this version with its build metadata replaced.
    pub fn with_build<B: Into<String>>(mut self, build: impl IntoIterator<Item = B>) -> Self {
        self.build = build.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if this version has at least one prerelease identifier.
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Returns the next version for `release_type`. See [`increment`] for the rules.
    ///
    /// # Example
    ///
    /// ```
    /// use nextsem::prelude::*;
    ///
    /// let version: Version = "1.2.3-beta.4".parse().unwrap();
    /// let next = version.increment(ReleaseType::Prerelease, &IncrementOptions::new());
    /// assert_eq!("1.2.3-beta.5", next.to_string());
    ///
    /// let next = next.increment(ReleaseType::Minor, &IncrementOptions::new());
    /// assert_eq!("1.3.0", next.to_string());
    /// ```
    pub fn increment(&self, release_type: ReleaseType, options: &IncrementOptions) -> Self {
        increment(self, release_type, options)
    }

    /// [`Self::increment`], but with the release type given as a string like `"premajor"`.
    ///
    /// # Errors
    ///
    /// - Returns [`IncrementError::InvalidReleaseType`] if `release_type` is not a known release
    ///   type.
    pub fn increment_str(
        &self,
        release_type: &str,
        options: &IncrementOptions,
    ) -> Result<Self, IncrementError> {
        increment_str(self, release_type, options)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    /// Parses a SemVer 2.0.0 version string strictly. No leading `v`, whitespace, or missing
    /// minor/patch parts are accepted.
    ///
    /// # Errors
    ///
    /// See [`ParseError`] for the ways parsing can fail.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        // build metadata may contain hyphens, so split it off first
        let (rest, build) = match s.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (s, None),
        };
        let (core, prerelease) = match rest.split_once('-') {
            Some((core, prerelease)) => (core, Some(prerelease)),
            None => (rest, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        let [major, minor, patch] = parts[..] else {
            return Err(ParseError::UnexpectedCoreParts { found: parts.len() });
        };

        let major = parse_core_part(major)?;
        let minor = parse_core_part(minor)?;
        let patch = parse_core_part(patch)?;

        let prerelease = prerelease
            .map(|pre| {
                pre.split('.')
                    .map(Identifier::from_str)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        let build = build
            .map(|build| {
                build
                    .split('.')
                    .map(|id| identifier::validate_characters(id).map(|()| id.to_owned()))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            major,
            minor,
            patch,
            prerelease,
            build,
        })
    }
}

fn parse_core_part(part: &str) -> Result<u64, ParseError> {
    identifier::parse_numeric(part).unwrap_or_else(|| {
        Err(ParseError::InvalidNumber {
            part: part.to_owned(),
        })
    })
}
