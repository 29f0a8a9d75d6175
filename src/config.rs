use argh::FromArgs;
use log::LevelFilter;
use std::env as stdenv;
use std::path::PathBuf;

/// File read when neither `--file` nor the environment names one.
pub const DEFAULT_DATA_FILE: &str = "courselist.csv";

/// Environment variable that overrides [`DEFAULT_DATA_FILE`].
pub const DATA_FILE_VAR: &str = "COURSE_PLANNER_FILE";

#[derive(FromArgs, Debug)]
/// Browse a course catalog loaded from a comma-separated file.
pub struct Args {
    #[argh(option, short = 'f')]
    /// course data file; overrides $COURSE_PLANNER_FILE and the default courselist.csv.
    pub file: Option<PathBuf>,

    #[argh(option, default = "String::from(\"warn\")")]
    /// log level written to stderr: off, error, warn, info, debug or trace.
    pub log_level: String,
}

/// Resolved runtime settings for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the catalog is loaded from.
    pub data_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Config {
    /// Resolve settings from parsed arguments and the process environment.
    pub fn from_env(args: Args) -> Self {
        Self::resolve(args, stdenv::var(DATA_FILE_VAR).ok())
    }

    /// Resolve settings with an explicit value for [`DATA_FILE_VAR`].
    ///
    /// Precedence for the data file: `--file`, then the variable, then the default.
    /// An empty variable counts as unset.
    pub fn resolve(args: Args, data_file_var: Option<String>) -> Self {
        let data_file = args
            .file
            .or_else(|| data_file_var.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        let log_level = args.log_level.parse().unwrap_or(LevelFilter::Warn);

        Self {
            data_file,
            log_level,
        }
    }
}
