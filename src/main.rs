use asemver::{ops, Operation, Position, Version, VersionError};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive for log output, e.g. `debug`.
const LOG_ENV: &str = "ASEMVER_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    LibraryError(#[from] VersionError),

    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    CsvError(#[from] csv::Error),

    #[error("{0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum PositionArg {
    Major,
    Minor,
    Patch,
    Pre,
}

impl PositionArg {
    fn to_position(self) -> Position {
        match self {
            PositionArg::Major => Position::Major,
            PositionArg::Minor => Position::Minor,
            PositionArg::Patch => Position::Patch,
            PositionArg::Pre => Position::Pre,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum FormatArg {
    Json,
    Csv,
}

/// Components to leave out of `print` output.
#[derive(Args, Debug, Default)]
struct Exclusions {
    /// Leave out the major number
    #[arg(long)]
    no_major: bool,

    /// Leave out the minor number
    #[arg(long)]
    no_minor: bool,

    /// Leave out the patch number
    #[arg(long)]
    no_patch: bool,

    /// Leave out the pre-release label
    #[arg(long)]
    no_pre: bool,

    /// Leave out the pre-release digit
    #[arg(long)]
    no_pre_digit: bool,

    /// Leave out the build metadata
    #[arg(long)]
    no_build: bool,
}

/// The printable components of a version, in output order.
///
/// The outer `Option` is `None` when the component is excluded, so it is left out of JSON output.
/// The inner one is `None` when the version has no such component, which prints as `null`.
#[derive(Serialize, Debug, PartialEq)]
struct Components {
    #[serde(skip_serializing_if = "Option::is_none")]
    major: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minor: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    patch: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pre: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pre_digit: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    build: Option<Option<String>>,
}

impl Components {
    fn new(version: &Version, exclusions: &Exclusions) -> Self {
        fn keep<T>(excluded: bool, value: T) -> Option<T> {
            (!excluded).then_some(value)
        }

        Self {
            major: keep(exclusions.no_major, version.major()),
            minor: keep(exclusions.no_minor, version.minor()),
            patch: keep(exclusions.no_patch, version.patch()),
            pre: keep(exclusions.no_pre, version.pre().map(str::to_owned)),
            pre_digit: keep(exclusions.no_pre_digit, version.pre_digit()),
            build: keep(exclusions.no_build, version.build().map(str::to_owned)),
        }
    }

    fn to_json(&self) -> Result<String, CliError> {
        Ok(serde_json::to_string(self)?)
    }

    /// One CSV row. Excluded and absent components are blank.
    fn to_csv(&self) -> Result<String, CliError> {
        fn field<T: ToString>(value: &Option<T>) -> String {
            value.as_ref().map(T::to_string).unwrap_or_default()
        }

        let record = [
            field(&self.major),
            field(&self.minor),
            field(&self.patch),
            field(&self.pre.clone().flatten()),
            field(&self.pre_digit.flatten()),
            field(&self.build.clone().flatten()),
        ];
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record(&record)?;
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8_lossy(&bytes).trim_end().to_owned())
    }
}

/// Basic manipulation of semantic versions on the command line.
///
/// Unless using the `clean` or `valid` command, SEMVER should not start with `v`.
///
/// Semver 2.0.0: https://semver.org/
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The semantic version string to operate on
    semver: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Cleans the version string, removing surrounding whitespace and any leading `v` or `=`
    Clean,

    /// Compares SEMVER with RHS: prints `1` if SEMVER is greater, `-1` if it is less and `0` if
    /// they are equal. Build metadata is not taken into account.
    Compare {
        /// The version string to compare against
        rhs: String,
    },

    /// Prints the version's components as JSON or CSV.
    ///
    /// JSON keys are `major`, `minor`, `patch`, `pre`, `pre_digit` and `build`. Excluded
    /// components are left out and missing ones are `null`.
    ///
    /// CSV values are in the same order. Excluded and missing components are blank.
    Print {
        #[command(flatten)]
        exclusions: Exclusions,

        /// Format of output
        #[arg(short, long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,
    },

    /// Checks that SEMVER is a valid semantic version
    Valid,

    /// Bumps a position of the version.
    ///
    /// By default, positions to the right are reset: lesser numbers become `0` and the pre-release
    /// label is removed. Bumping `pre` increments the pre-release digit.
    Bump {
        /// The position to bump
        #[arg(value_enum)]
        position: PositionArg,

        /// How much to bump the position by
        #[arg(short, long, default_value_t = 1)]
        amount: u64,

        /// Keep the positions to the right of POSITION untouched
        #[arg(long)]
        no_carry: bool,
    },

    /// Applies operations to the version from left to right.
    ///
    /// `major`, `minor`, `patch` and `pre` increment a position. `-LABEL` adds a pre-release label
    /// and `+LABEL` adds build metadata. Prefix with `~` to remove instead: `~minor` decrements,
    /// `~-` removes the pre-release label and `~+` removes the build metadata.
    Update {
        /// The operations to apply
        #[arg(required = true, allow_hyphen_values = true)]
        ops: Vec<Operation>,
    },
}

type Output = (String, i32);

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let (output, exit_code) = report(do_work(cli));
    println!("{output}");
    std::process::exit(exit_code);
}

/// Turns a failed command into its message and exit code `1`. Both outcomes print to stdout.
fn report(result: Result<Output, CliError>) -> Output {
    result.unwrap_or_else(|e| (e.to_string(), 1))
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    let semver = cli.semver;
    match cli.command {
        Commands::Clean => Ok((ops::clean_and_parse(&semver)?.to_string(), 0)),
        Commands::Compare { rhs } => {
            let ordering = ops::compare(&semver, &rhs)?;
            Ok(((ordering as i8).to_string(), 0))
        }
        Commands::Print { exclusions, format } => {
            let version = ops::parse(&semver)?;
            let components = Components::new(&version, &exclusions);
            let output = match format {
                FormatArg::Json => components.to_json()?,
                FormatArg::Csv => components.to_csv()?,
            };
            Ok((output, 0))
        }
        Commands::Valid => Ok(if ops::valid(&semver) {
            ("Valid".to_string(), 0)
        } else {
            ("Invalid".to_string(), 1)
        }),
        Commands::Bump {
            position,
            amount,
            no_carry,
        } => Ok((
            ops::bump(&semver, position.to_position(), amount, !no_carry)?,
            0,
        )),
        Commands::Update { ops: operations } => Ok((ops::update(&semver, operations)?, 0)),
    }
}
