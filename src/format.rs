use crate::{identifier::Identifier, version::Version};
use core::fmt::{self, Display, Write};

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(value) => write!(f, "{value}"),
            Identifier::Alphanumeric(text) => f.write_str(text),
        }
    }
}

impl Display for Version {
    /// Display a version as its canonical SemVer string.
    ///
    /// # Example
    ///
    /// ```
    /// use nextsem::prelude::*;
    ///
    /// let version_str = "1.2.3-rc.1+exp.sha.5114f85";
    /// let version: Version = version_str.parse().unwrap();
    /// assert_eq!(version_str, version.to_string());
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            f.write_char('-')?;
            write_dotted(f, &self.prerelease)?;
        }
        if !self.build.is_empty() {
            f.write_char('+')?;
            write_dotted(f, &self.build)?;
        }
        Ok(())
    }
}

fn write_dotted<T: Display>(f: &mut fmt::Formatter<'_>, identifiers: &[T]) -> fmt::Result {
    for (idx, identifier) in identifiers.iter().enumerate() {
        if idx > 0 {
            f.write_char('.')?;
        }
        write!(f, "{identifier}")?;
    }
    Ok(())
}
