use crate::{
    error::IncrementError,
    identifier::Identifier,
    options::IncrementOptions,
    release::ReleaseType,
    version::Version,
};
use tracing::{debug, trace};

/// The level a numeric bump applies to.
#[derive(Debug, Clone, Copy)]
enum Level {
    Major,
    Minor,
    Patch,
}

/// Returns the version after `version` for `release_type`. `version` is never modified.
///
/// Numeric release types:
///
/// - [`ReleaseType::Major`]: `1.2.3` → `2.0.0`. A prerelease of a major version (like
///   `2.0.0-rc.1`) is finalized instead: → `2.0.0`.
/// - [`ReleaseType::Minor`]: `1.2.3` → `1.3.0`. `1.3.0-rc.1` is finalized to `1.3.0`.
/// - [`ReleaseType::Patch`]: `1.2.3` → `1.2.4`. Any prerelease is finalized: `1.2.4-rc.1` →
///   `1.2.4`.
///
/// Prerelease release types:
///
/// - [`ReleaseType::Premajor`], [`ReleaseType::Preminor`], [`ReleaseType::Prepatch`]: always bump
///   that level, then start a fresh prerelease: `1.2.3` → `2.0.0-0`, `1.3.0-0`, `1.2.4-0`.
/// - [`ReleaseType::Prerelease`]: bumps the prerelease of a prerelease version (`1.2.3-4` →
///   `1.2.3-5`), or acts like `prepatch` on a release version (`1.2.3` → `1.2.4-0`).
/// - [`ReleaseType::Pre`]: bumps the prerelease and never touches the numbers (`1.2.3` → `1.2.3-0`).
///
/// When bumping an existing prerelease without an identifier base, the last numeric identifier is
/// incremented (`alpha.10.0.beta` → `alpha.10.1.beta`), or `0` is appended if there is none. With
/// a base, like `alpha`, a prerelease that starts with it has its second identifier incremented
/// (`alpha.9.beta` → `alpha.10.beta`); otherwise it is replaced with `alpha.0`.
///
/// Build metadata is then handled according to [`IncrementOptions::build`].
///
/// Numbers saturate at `u64::MAX`, so a bump that would overflow leaves that number as it is. For
/// example, `1.2.3-18446744073709551615` incremented with [`ReleaseType::Pre`] is returned
/// unchanged.
///
/// Options are used as given. Build them with [`IncrementOptions::from_parts`], or check them with
/// [`IncrementOptions::validate`], to guarantee that the result formats to a parseable version.
///
/// # Example
///
/// ```
/// use nextsem::prelude::*;
///
/// let version: Version = "1.2.3+sha.0a1b2c".parse().unwrap();
/// let options = IncrementOptions::new().with_prerelease_base("rc");
///
/// let next = increment(&version, ReleaseType::Preminor, &options);
/// assert_eq!("1.3.0-rc.0+sha.0a1b2c", next.to_string());
///
/// let next = increment(&next, ReleaseType::Prerelease, &options.with_build(""));
/// assert_eq!("1.3.0-rc.1", next.to_string());
/// ```
pub fn increment(
    version: &Version,
    release_type: ReleaseType,
    options: &IncrementOptions,
) -> Version {
    debug!(%version, %release_type, ?options, "incrementing version");

    let base = options.prerelease.as_deref();
    let mut next = match release_type {
        ReleaseType::Major => bump_level(version, Level::Major),
        ReleaseType::Minor => bump_level(version, Level::Minor),
        ReleaseType::Patch => bump_level(version, Level::Patch),
        ReleaseType::Premajor => start_prerelease(bump_level_always(version, Level::Major), base),
        ReleaseType::Preminor => start_prerelease(bump_level_always(version, Level::Minor), base),
        ReleaseType::Prepatch => start_prerelease(bump_level_always(version, Level::Patch), base),
        ReleaseType::Prerelease if version.is_prerelease() => bump_in_place(version, base),
        ReleaseType::Prerelease => start_prerelease(bump_level(version, Level::Patch), base),
        ReleaseType::Pre => bump_in_place(version, base),
    };
    next.build = options.build.resolve(&version.build);

    debug!(%next, "incremented version");
    next
}

/// [`increment`], but with the release type given as a string like `"prerelease"`.
///
/// # Errors
///
/// - Returns [`IncrementError::InvalidReleaseType`] if `release_type` is not a known release type.
///   Nothing is computed in that case.
pub fn increment_str(
    version: &Version,
    release_type: &str,
    options: &IncrementOptions,
) -> Result<Version, IncrementError> {
    let release_type = release_type.parse()?;
    Ok(increment(version, release_type, options))
}

/// Bumps `level`, unless `version` is already a prerelease of that level's next release, in which
/// case the prerelease is just dropped. Lesser levels are reset to zero.
fn bump_level(version: &Version, level: Level) -> Version {
    let pre = version.is_prerelease();
    let (major, minor, patch) = (version.major, version.minor, version.patch);
    let (major, minor, patch) = match level {
        Level::Major if pre && minor == 0 && patch == 0 => (major, 0, 0),
        Level::Major => (major.saturating_add(1), 0, 0),
        Level::Minor if pre && patch == 0 => (major, minor, 0),
        Level::Minor => (major, minor.saturating_add(1), 0),
        Level::Patch if pre => (major, minor, patch),
        Level::Patch => (major, minor, patch.saturating_add(1)),
    };
    Version::new(major, minor, patch)
}

/// Bumps `level` and resets lesser levels to zero, regardless of any prerelease.
fn bump_level_always(version: &Version, level: Level) -> Version {
    let (major, minor, patch) = (version.major, version.minor, version.patch);
    match level {
        Level::Major => Version::new(major.saturating_add(1), 0, 0),
        Level::Minor => Version::new(major, minor.saturating_add(1), 0),
        Level::Patch => Version::new(major, minor, patch.saturating_add(1)),
    }
}

fn start_prerelease(mut version: Version, base: Option<&str>) -> Version {
    version.prerelease = bump_prerelease(&[], base);
    version
}

fn bump_in_place(version: &Version, base: Option<&str>) -> Version {
    Version::new(version.major, version.minor, version.patch)
        .with_prerelease(bump_prerelease(&version.prerelease, base))
}

/// Returns the prerelease identifiers that come after `existing`.
fn bump_prerelease(existing: &[Identifier], base: Option<&str>) -> Vec<Identifier> {
    let mut next = existing.to_vec();

    let Some(base) = base else {
        match next.iter_mut().rev().find_map(|id| match id {
            Identifier::Numeric(value) => Some(value),
            Identifier::Alphanumeric(_) => None,
        }) {
            Some(value) => {
                trace!(from = *value, "incrementing last numeric identifier");
                *value = value.saturating_add(1);
            }
            None => {
                trace!("no numeric identifier, appending 0");
                next.push(Identifier::Numeric(0));
            }
        }
        return next;
    };

    let base = Identifier::from_text(base);
    if next.first() != Some(&base) {
        trace!(%base, "prerelease does not start with base, restarting");
        return vec![base, Identifier::Numeric(0)];
    }

    match next.get_mut(1) {
        Some(Identifier::Numeric(value)) => {
            trace!(%base, from = *value, "incrementing identifier after base");
            *value = value.saturating_add(1);
        }
        _ => {
            trace!(%base, "no numeric identifier after base, inserting 0");
            next.insert(1, Identifier::Numeric(0));
        }
    }
    next
}
