//! # nextsem
//!
//! A library for incrementing [SemVer 2.0.0](https://semver.org/) versions, prerelease identifiers
//! and build metadata included.
//!
//! Given a version and a *release type*, nextsem computes the next version. Versions are plain
//! values: incrementing one never modifies it.
//!
//! ## Examples
//!
//! Quickly get a next version:
//!
//! ```
//! use nextsem::prelude::*;
//!
//! let version: Version = "1.2.3".parse().unwrap();
//! let next = version.increment(ReleaseType::Minor, &IncrementOptions::new());
//! assert_eq!(next.to_string(), "1.3.0");
//! ```
//!
//! Work towards a release through prereleases:
//!
//! ```
//! use nextsem::prelude::*;
//!
//! let options = IncrementOptions::new().with_prerelease_base("beta");
//!
//! let version: Version = "1.2.3".parse().unwrap();
//! let beta0 = version.increment(ReleaseType::Premajor, &options);
//! assert_eq!(beta0.to_string(), "2.0.0-beta.0");
//!
//! let beta1 = beta0.increment(ReleaseType::Prerelease, &options);
//! assert_eq!(beta1.to_string(), "2.0.0-beta.1");
//!
//! // a prerelease of 2.0.0 becomes 2.0.0 itself
//! let release = beta1.increment(ReleaseType::Major, &options);
//! assert_eq!(release.to_string(), "2.0.0");
//! ```
//!
//! Release types can also be given as strings, such as from user input:
//!
//! ```
//! use nextsem::prelude::*;
//!
//! let version: Version = "1.2.3+build.5".parse().unwrap();
//! let options = IncrementOptions::from_parts(None, Some("")).unwrap();
//! assert_eq!(version.increment_str("patch", &options).unwrap().to_string(), "1.2.4");
//! assert!(version.increment_str("invalid", &options).is_err());
//! ```
//!
//! ## Release Types
//!
//! | Release type | `1.2.3` | `1.2.3-4` | `1.2.0-4` | `1.0.0-4` |
//! |---|---|---|---|---|
//! | `major` | `2.0.0` | `2.0.0` | `2.0.0` | `1.0.0` |
//! | `minor` | `1.3.0` | `1.3.0` | `1.2.0` | `1.0.0` |
//! | `patch` | `1.2.4` | `1.2.3` | `1.2.0` | `1.0.0` |
//! | `premajor` | `2.0.0-0` | `2.0.0-0` | `2.0.0-0` | `2.0.0-0` |
//! | `preminor` | `1.3.0-0` | `1.3.0-0` | `1.3.0-0` | `1.1.0-0` |
//! | `prepatch` | `1.2.4-0` | `1.2.4-0` | `1.2.1-0` | `1.0.1-0` |
//! | `prerelease` | `1.2.4-0` | `1.2.3-5` | `1.2.0-5` | `1.0.0-5` |
//! | `pre` | `1.2.3-0` | `1.2.3-5` | `1.2.0-5` | `1.0.0-5` |
//!
//! See [`increment`] for the details, including how prerelease identifier bases work.
//!
//! ## Build Metadata
//!
//! By default, build metadata is carried over unchanged. Use [`IncrementOptions::with_build`] (or
//! [`BuildMetadata`]) to strip it with `""` or replace it with a new identifier.
//!
//! ## Prelude
//!
//! nextsem provides a prelude module for convenience. It contains everything needed to interact
//! with the library.
//!
//! Use it with:
//!
//! ```
//! use nextsem::prelude::*;
//! ```
#![warn(missing_docs)]

mod engine;
mod error;
mod format;
mod identifier;
mod options;
mod release;
mod version;

pub use crate::engine::{increment, increment_str};
pub use crate::error::{IncrementError, ParseError};
pub use crate::identifier::Identifier;
pub use crate::options::{BuildIntent, BuildMetadata, IncrementOptions};
pub use crate::release::ReleaseType;
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use nextsem::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::increment;
    #[doc(no_inline)]
    pub use crate::increment_str;
    #[doc(no_inline)]
    pub use crate::BuildMetadata;
    #[doc(no_inline)]
    pub use crate::Identifier;
    #[doc(no_inline)]
    pub use crate::IncrementError;
    #[doc(no_inline)]
    pub use crate::IncrementOptions;
    #[doc(no_inline)]
    pub use crate::ParseError;
    #[doc(no_inline)]
    pub use crate::ReleaseType;
    #[doc(no_inline)]
    pub use crate::Version;
}
