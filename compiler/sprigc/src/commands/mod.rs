//! Command handlers for the `sprig` binary.
//!
//! Handlers print their own output and diagnostics and return the process
//! exit code.

mod debug;
mod run;

pub use debug::lex_file;
pub use run::{eval_source, host_runtime, run_files};

use std::time::Duration;

/// Options of `sprig run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub files: Vec<String>,
    pub parallel: bool,
    pub timeout: Option<Duration>,
}

/// Parse the arguments following `run`.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut options = RunOptions::default();
    for arg in args {
        if arg == "--parallel" || arg == "-p" {
            options.parallel = true;
        } else if let Some(ms) = arg.strip_prefix("--timeout=") {
            let ms: u64 = ms
                .parse()
                .map_err(|_| format!("invalid timeout '{ms}': expected milliseconds"))?;
            options.timeout = Some(Duration::from_millis(ms));
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else {
            options.files.push(arg.clone());
        }
    }
    if options.files.is_empty() {
        return Err("missing file path".to_string());
    }
    Ok(options)
}

/// Read a source file, reporting failures on stderr.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            eprintln!("error: cannot read '{path}': {err}");
            None
        }
    }
}
