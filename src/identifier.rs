use crate::error::ParseError;
use core::str::FromStr;

/// A single dot-separated prerelease identifier, such as `alpha` or `1` in `1.2.3-alpha.1`.
///
/// SemVer treats identifiers made only of digits differently from ones that contain letters or
/// hyphens, so the two kinds are kept apart.
///
/// ```
/// use nextsem::Identifier;
///
/// assert_eq!(Identifier::Numeric(7), "7".parse().unwrap());
/// assert_eq!(Identifier::Alphanumeric("rc".to_string()), "rc".parse().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// An identifier made only of digits, without leading zeros.
    Numeric(u64),
    /// An identifier containing at least one ASCII letter or hyphen.
    Alphanumeric(String),
}

impl Identifier {
    /// Classifies `text` without validating its characters.
    ///
    /// Text made only of digits, without a leading zero, and small enough for a `u64` becomes
    /// [`Identifier::Numeric`]. Everything else is kept verbatim as [`Identifier::Alphanumeric`].
    /// This is how prerelease identifier bases given to the increment engine are interpreted; use
    /// [`IncrementOptions::validate`](crate::IncrementOptions::validate) to reject bases that
    /// would not parse back.
    pub fn from_text(text: &str) -> Self {
        match parse_numeric(text) {
            Some(Ok(value)) => Identifier::Numeric(value),
            _ => Identifier::Alphanumeric(text.to_owned()),
        }
    }

    /// Returns true if this is a [`Identifier::Numeric`].
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        Identifier::Numeric(value)
    }
}

impl From<&str> for Identifier {
    fn from(text: &str) -> Self {
        Identifier::from_text(text)
    }
}

impl FromStr for Identifier {
    type Err = ParseError;

    /// Parses a prerelease identifier strictly.
    ///
    /// # Errors
    ///
    /// - [`ParseError::EmptyIdentifier`] if `s` is empty.
    /// - [`ParseError::InvalidCharacter`] if `s` contains anything besides `[0-9A-Za-z-]`.
    /// - [`ParseError::LeadingZero`] if `s` is all digits with a leading zero.
    /// - [`ParseError::InvalidNumber`] if `s` is all digits but too large for a `u64`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_characters(s)?;
        match parse_numeric(s) {
            Some(Ok(value)) => Ok(Identifier::Numeric(value)),
            Some(Err(err)) => Err(err),
            None => Ok(Identifier::Alphanumeric(s.to_owned())),
        }
    }
}

/// Checks that an identifier is non-empty and only contains ASCII alphanumerics and hyphens.
pub(crate) fn validate_characters(s: &str) -> Result<(), ParseError> {
    if s.is_empty() {
        return Err(ParseError::EmptyIdentifier);
    }
    if !s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
        return Err(ParseError::InvalidCharacter {
            identifier: s.to_owned(),
        });
    }
    Ok(())
}

/// Parses a run of digits as a SemVer number.
///
/// Returns `None` if `s` is not entirely digits (or is empty), so the caller can decide what a
/// non-numeric part means.
pub(crate) fn parse_numeric(s: &str) -> Option<Result<u64, ParseError>> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return Some(Err(ParseError::LeadingZero { part: s.to_owned() }));
    }
    Some(s.parse().map_err(|_| ParseError::InvalidNumber { part: s.to_owned() }))
}
