use crate::{
    error::ParseError,
    identifier::{self, Identifier},
};

/// What to do with a version's build metadata when incrementing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BuildMetadata {
    /// Keep the existing build metadata as it is.
    #[default]
    Preserve,
    /// Remove all build metadata.
    Clear,
    /// Replace the build metadata with this single identifier.
    Replace(String),
}

impl BuildMetadata {
    /// Resolves the intent from an optional string: `None` preserves, `Some("")` clears, and any
    /// other string replaces.
    ///
    /// ```
    /// use nextsem::BuildMetadata;
    ///
    /// assert_eq!(BuildMetadata::Preserve, BuildMetadata::from_option(None));
    /// assert_eq!(BuildMetadata::Clear, BuildMetadata::from_option(Some("")));
    /// assert_eq!(
    ///     BuildMetadata::Replace("ci.42".to_string()),
    ///     BuildMetadata::from_option(Some("ci.42"))
    /// );
    /// ```
    pub fn from_option(build: Option<&str>) -> Self {
        match build {
            None => BuildMetadata::Preserve,
            Some("") => BuildMetadata::Clear,
            Some(build) => BuildMetadata::Replace(build.to_owned()),
        }
    }

    /// Applies this intent to `existing` build metadata, returning a fresh sequence.
    pub(crate) fn resolve(&self, existing: &[String]) -> Vec<String> {
        match self {
            BuildMetadata::Preserve => existing.to_vec(),
            BuildMetadata::Clear => Vec::new(),
            BuildMetadata::Replace(build) => vec![build.clone()],
        }
    }
}

impl From<Option<&str>> for BuildMetadata {
    fn from(build: Option<&str>) -> Self {
        BuildMetadata::from_option(build)
    }
}

/// Options for [`increment`](crate::increment).
///
/// The default keeps build metadata and uses bare numeric prerelease identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IncrementOptions {
    /// The leading identifier for prerelease versions, like `alpha` in `1.2.3-alpha.0`. `None`
    /// means a bare numeric counter, like `1.2.3-0`.
    pub prerelease: Option<String>,
    /// What to do with build metadata.
    pub build: BuildMetadata,
}

impl IncrementOptions {
    /// Same as [`IncrementOptions::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prerelease identifier base. An empty string is the same as no base.
    ///
    /// The base is not checked here; see [`IncrementOptions::validate`].
    pub fn with_prerelease_base(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.prerelease = if base.is_empty() { None } else { Some(base) };
        self
    }

    /// Sets the build metadata intent. Accepts a [`BuildMetadata`], or a `&str` with the same
    /// meaning as `Some(..)` in [`BuildMetadata::from_option`].
    ///
    /// The build identifier is not checked here; see [`IncrementOptions::validate`].
    pub fn with_build(mut self, build: impl Into<BuildIntent>) -> Self {
        self.build = build.into().0;
        self
    }

    /// Builds and validates options from the optional strings a caller would pass at a boundary,
    /// like a command line.
    ///
    /// # Errors
    ///
    /// - Returns a [`ParseError`] if either string would not survive being formatted into a
    ///   version and parsed back. See [`IncrementOptions::validate`].
    pub fn from_parts(prerelease: Option<&str>, build: Option<&str>) -> Result<Self, ParseError> {
        let options = Self {
            prerelease: None,
            build: build.into(),
        };
        let options = match prerelease {
            Some(base) => options.with_prerelease_base(base),
            None => options,
        };
        options.validate()?;
        Ok(options)
    }

    /// Checks that every version incremented with these options can be parsed back.
    ///
    /// The prerelease base must be a valid prerelease identifier: ASCII alphanumerics and hyphens
    /// only, and no leading zeros if it is all digits. A replacement build identifier must be
    /// ASCII alphanumerics and hyphens only, so it cannot contain dots.
    ///
    /// ```
    /// use nextsem::IncrementOptions;
    ///
    /// assert!(IncrementOptions::new().with_prerelease_base("rc").validate().is_ok());
    /// assert!(IncrementOptions::new().with_prerelease_base("007").validate().is_err());
    /// assert!(IncrementOptions::new().with_build("ci.42").validate().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidCharacter`] for a base or build identifier with other characters.
    /// - [`ParseError::LeadingZero`] or [`ParseError::InvalidNumber`] for an all-digit base that is
    ///   not a valid numeric identifier.
    pub fn validate(&self) -> Result<(), ParseError> {
        if let Some(base) = &self.prerelease {
            base.parse::<Identifier>()?;
        }
        if let BuildMetadata::Replace(build) = &self.build {
            identifier::validate_characters(build)?;
        }
        Ok(())
    }
}

/// Conversion target for [`IncrementOptions::with_build`].
#[derive(Debug)]
pub struct BuildIntent(BuildMetadata);

impl From<BuildMetadata> for BuildIntent {
    fn from(build: BuildMetadata) -> Self {
        BuildIntent(build)
    }
}

impl From<&str> for BuildIntent {
    fn from(build: &str) -> Self {
        BuildIntent(BuildMetadata::from_option(Some(build)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_resolve() {
        let existing = vec!["sha".to_string(), "5114f85".to_string()];
        assert_eq!(existing, BuildMetadata::Preserve.resolve(&existing));
        assert!(BuildMetadata::Preserve.resolve(&[]).is_empty());
        assert!(BuildMetadata::Clear.resolve(&existing).is_empty());
        assert_eq!(
            vec!["ci".to_string()],
            BuildMetadata::Replace("ci".to_string()).resolve(&existing)
        );
    }

    #[test]
    fn test_builder() {
        let options = IncrementOptions::new()
            .with_prerelease_base("beta")
            .with_build("");
        assert_eq!(Some("beta".to_string()), options.prerelease);
        assert_eq!(BuildMetadata::Clear, options.build);

        let options = options.with_build(BuildMetadata::Preserve);
        assert_eq!(BuildMetadata::Preserve, options.build);
    }

    #[test]
    fn test_empty_base_is_no_base() {
        assert_eq!(None, IncrementOptions::new().with_prerelease_base("").prerelease);
        assert_eq!(
            Ok(None),
            IncrementOptions::from_parts(Some(""), None).map(|options| options.prerelease)
        );
    }

    #[test]
    fn test_from_option_conversion() {
        assert_eq!(BuildMetadata::Preserve, BuildMetadata::from(None));
        assert_eq!(BuildMetadata::Clear, BuildMetadata::from(Some("")));
        assert_eq!(
            BuildMetadata::Replace("ci".to_string()),
            BuildMetadata::from(Some("ci"))
        );
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(Ok(IncrementOptions::new()), IncrementOptions::from_parts(None, None));
        assert_eq!(
            Ok(IncrementOptions {
                prerelease: Some("rc".to_string()),
                build: BuildMetadata::Replace("7".to_string()),
            }),
            IncrementOptions::from_parts(Some("rc"), Some("7"))
        );
        assert_eq!(
            Ok(BuildMetadata::Clear),
            IncrementOptions::from_parts(Some("1"), Some("")).map(|options| options.build)
        );
    }

    #[rstest]
    #[case(Some("007"), None, ParseError::LeadingZero { part: "007".to_string() })]
    #[case(Some("a_b"), None, ParseError::InvalidCharacter { identifier: "a_b".to_string() })]
    #[case(Some("a.b"), None, ParseError::InvalidCharacter { identifier: "a.b".to_string() })]
    #[case(
        Some("18446744073709551616"),
        None,
        ParseError::InvalidNumber { part: "18446744073709551616".to_string() }
    )]
    #[case(None, Some("x y"), ParseError::InvalidCharacter { identifier: "x y".to_string() })]
    #[case(None, Some("x.y"), ParseError::InvalidCharacter { identifier: "x.y".to_string() })]
    #[case(Some("rc"), Some("+"), ParseError::InvalidCharacter { identifier: "+".to_string() })]
    fn test_from_parts_rejects(
        #[case] prerelease: Option<&str>,
        #[case] build: Option<&str>,
        #[case] expected: ParseError,
    ) {
        assert_eq!(Err(expected), IncrementOptions::from_parts(prerelease, build));
    }

    #[test]
    fn test_builders_defer_validation() {
        let options = IncrementOptions::new()
            .with_prerelease_base("a_b")
            .with_build("x.y");
        assert!(options.validate().is_err());
        assert!(IncrementOptions::new().with_build("").validate().is_ok());
    }
}
