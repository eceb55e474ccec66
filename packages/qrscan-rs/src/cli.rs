//! Command line arguments backing the `qrscan` binary.
use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(
  name = "qrscan",
  about = "Scan an image for a QR code and print the result as a JSON object",
  version
)]
pub struct Args {
  /// Image file to scan. Empty and dash-leading values are scanned as given.
  #[arg(allow_hyphen_values = true)]
  pub image_path: Option<OsString>,

  /// Further positional arguments are accepted and ignored
  #[arg(hide = true, allow_hyphen_values = true)]
  pub ignored: Vec<OsString>,

  /// Exit with status 2 when the scan does not succeed
  #[arg(long)]
  pub strict: bool,

  /// Downsample images whose longer side exceeds this many pixels before detection (0 disables)
  #[arg(long, value_name = "PX", default_value_t = 0)]
  pub max_dimension: u32,

  /// Log progress to stderr
  #[arg(long, short = 'v')]
  pub verbose: bool,
}

/// First line of a clap error without the `error: ` prefix, for the JSON `error` field.
pub fn usage_message(err: &clap::Error) -> String {
  let rendered = err.to_string();
  let first = rendered.lines().next().unwrap_or_default().trim();
  first.strip_prefix("error:").unwrap_or(first).trim().to_string()
}
