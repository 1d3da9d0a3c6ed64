use std::env;
use std::path::Path;

use clap::ArgMatches;

/// Used when the executable name cannot be recovered from the arguments.
const DEFAULT_PROGRAM_NAME: &str = "timings";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub program_name: String,
    pub timings: Option<String>,
}


pub fn load_config_from_matches(matches: &ArgMatches, argv0: Option<String>) -> Config {
    Config {
        program_name: program_name_from(argv0),
        timings: matches.value_of("timings").map(|s| s.to_string()),
    }
}

/// The name of the running executable, as typed by the user.
pub fn current_argv0() -> Option<String> {
    env::args_os()
        .next()
        .map(|a| a.to_string_lossy().into_owned())
}

fn program_name_from(argv0: Option<String>) -> String {
    argv0
        .as_deref()
        .and_then(|a| Path::new(a).file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}
