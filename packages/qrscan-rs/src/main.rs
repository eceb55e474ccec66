mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use qrscan_rs::{write_wire_json, RqrrDetector, ScanError, ScanResult, Scanner};

const EXIT_MISSING_PATH: u8 = 1;
const EXIT_USAGE: u8 = 1;
const EXIT_STRICT_FAILURE: u8 = 2;

fn main() -> ExitCode {
  let args = match Args::try_parse() {
    Ok(args) => args,
    Err(e) => return usage_failure(e),
  };
  init_logging(args.verbose);

  match run(&args) {
    Ok(code) => code,
    Err(e) => {
      log::error!("{e:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(args: &Args) -> Result<ExitCode> {
  let Some(image_path) = args.image_path.as_ref() else {
    emit(&ScanResult::from(ScanError::MissingPath))?;
    return Ok(ExitCode::from(EXIT_MISSING_PATH));
  };

  if !args.ignored.is_empty() {
    log::debug!("ignoring {} extra argument(s)", args.ignored.len());
  }

  let detector = RqrrDetector::new().with_max_dimension(args.max_dimension);
  let result = Scanner::with_detector(detector).scan(image_path);
  emit(&result)?;

  if args.strict && !result.is_success() {
    return Ok(ExitCode::from(EXIT_STRICT_FAILURE));
  }
  Ok(ExitCode::SUCCESS)
}

/// Bad flags still produce a JSON record; `--help` and `--version` print as usual.
fn usage_failure(err: clap::Error) -> ExitCode {
  if !err.use_stderr() {
    err.exit();
  }
  init_logging(false);
  let record = ScanResult::from(ScanError::Usage(cli::usage_message(&err)));
  match emit(&record) {
    Ok(()) => ExitCode::from(EXIT_USAGE),
    Err(e) => {
      log::error!("{e:#}");
      ExitCode::FAILURE
    }
  }
}

/// Prints the record as one line on stdout.
fn emit(result: &ScanResult) -> Result<()> {
  let mut stdout = io::stdout().lock();
  write_wire_json(&mut stdout, result).context("Failed to serialize scan result")?;
  stdout
    .write_all(b"\n")
    .and_then(|_| stdout.flush())
    .context("Failed to write to stdout")
}

/// Logs go to stderr so stdout only ever carries the JSON record.
/// `QRSCAN_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let env = env_logger::Env::default().filter_or("QRSCAN_LOG", default_level);
  let _ = env_logger::Builder::from_env(env)
    .target(env_logger::Target::Stderr)
    .try_init();

  std::panic::set_hook(Box::new(|info| log::error!("{info}")));
}
