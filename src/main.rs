use clap::{Parser, Subcommand};
use nextsem::{IncrementError, IncrementOptions, ParseError, ReleaseType, Version};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Increment(#[from] IncrementError),

    #[error("Could not parse version `{version}`: {source}")]
    UnparseableVersion {
        version: String,
        #[source]
        source: ParseError,
    },

    #[error("Invalid --preid or --build: {0}")]
    InvalidOption(#[from] ParseError),
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Log what the increment engine does to stderr. `RUST_LOG` takes precedence when set.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validates that a version is a well-formed SemVer 2.0.0 version
    Valid {
        /// The version string to validate
        version: String,
    },

    /// Increments a version according to a release type and prints the result.
    ///
    /// Release types are `major`, `minor`, `patch`, `premajor`, `preminor`, `prepatch`,
    /// `prerelease` and `pre`.
    ///
    /// # Build Metadata
    ///
    /// Omit `--build` to keep existing build metadata, pass `--build ""` to remove it, or pass
    /// any other value to replace it.
    Bump {
        /// The version string to increment
        version: String,

        /// The release type to increment by
        release_type: String,

        /// The leading prerelease identifier to use, like `alpha` for `1.2.3-alpha.0`
        #[arg(short, long, value_name = "IDENTIFIER")]
        preid: Option<String>,

        /// The build metadata for the new version
        #[arg(short, long)]
        build: Option<String>,
    },
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // ignore the error if a subscriber was already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_version(version: &str) -> Result<Version, CliError> {
    version
        .parse()
        .map_err(|source| CliError::UnparseableVersion {
            version: version.to_owned(),
            source,
        })
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    match cli.command {
        Commands::Valid { version } => Ok(match version.parse::<Version>() {
            Ok(_) => ("true".to_string(), 0),
            Err(e) => {
                debug!(%version, error = %e, "invalid version");
                ("false".to_string(), 1)
            }
        }),
        Commands::Bump {
            version,
            release_type,
            preid,
            build,
        } => {
            // check the release type first so a bad one is reported even with a bad version
            let release_type: ReleaseType = release_type.parse()?;
            let version = parse_version(&version)?;
            let options = IncrementOptions::from_parts(preid.as_deref(), build.as_deref())?;
            let next = version.increment(release_type, &options);
            Ok((next.to_string(), 0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn run(args: &[&str]) -> Result<Output, CliError> {
        let cli = Cli::try_parse_from(iter_args(args)).unwrap();
        do_work(cli)
    }

    fn iter_args<'a>(args: &'a [&'a str]) -> impl Iterator<Item = &'a str> {
        std::iter::once("nextsem").chain(args.iter().copied())
    }

    #[rstest]
    #[case(&["bump", "1.2.3", "patch"], "1.2.4")]
    #[case(&["bump", "1.2.3", "prerelease", "--preid", "alpha"], "1.2.4-alpha.0")]
    #[case(&["bump", "1.2.3-alpha.9.beta", "prerelease", "-p", "alpha"], "1.2.3-alpha.10.beta")]
    #[case(&["bump", "1.2.3+1", "major", "--build", ""], "2.0.0")]
    #[case(&["bump", "1.2.3+1", "major"], "2.0.0+1")]
    #[case(&["bump", "1.2.3+1", "minor", "-b", "ci"], "1.3.0+ci")]
    #[case(&["-v", "bump", "1.2.3", "pre"], "1.2.3-0")]
    fn test_bump(#[case] args: &[&str], #[case] expected: &str) {
        assert_eq!((expected.to_string(), 0), run(args).unwrap());
    }

    #[test]
    fn test_bump_invalid_release_type() {
        let result = run(&["bump", "not-a-version", "invalid"]);
        assert!(matches!(
            result,
            Err(CliError::Increment(IncrementError::InvalidReleaseType { .. }))
        ));
    }

    #[test]
    fn test_bump_invalid_version() {
        let result = run(&["bump", "1.2", "major"]);
        assert!(matches!(
            result,
            Err(CliError::UnparseableVersion {
                source: ParseError::UnexpectedCoreParts { found: 2 },
                ..
            })
        ));
    }

    #[rstest]
    #[case(&["bump", "1.2.3", "patch", "--build", "x y"])]
    #[case(&["bump", "1.2.3", "patch", "--build", "x.y"])]
    #[case(&["bump", "1.2.3", "prerelease", "--preid", "007"])]
    #[case(&["bump", "1.2.3", "prerelease", "--preid", "a_b"])]
    fn test_bump_invalid_option(#[case] args: &[&str]) {
        assert!(matches!(run(args), Err(CliError::InvalidOption(_))));
    }

    /// whatever `bump` prints, `valid` accepts
    #[rstest]
    #[case(&["bump", "1.2.3", "patch", "--build", "ci-42"])]
    #[case(&["bump", "1.2.3", "prerelease", "--preid", "7"])]
    #[case(&["bump", "1.2.3-rc.1+old", "pre", "--preid", "rc"])]
    fn test_bump_output_is_valid(#[case] args: &[&str]) {
        let (bumped, _) = run(args).unwrap();
        assert_eq!(("true".to_string(), 0), run(&["valid", bumped.as_str()]).unwrap());
    }

    #[rstest]
    #[case("1.2.3-rc.1+sha.5114f85", ("true", 0))]
    #[case("1.2", ("false", 1))]
    #[case("v1.2.3", ("false", 1))]
    fn test_valid(#[case] version: &str, #[case] expected: (&str, i32)) {
        let (output, exit_code) = run(&["valid", version]).unwrap();
        assert_eq!(expected, (output.as_str(), exit_code));
    }

    #[test]
    fn test_no_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["nextsem"]).is_err());
        assert!(Cli::try_parse_from(["nextsem", "--verbose"]).is_err());
    }
}
