//! Invoking gperf on the emitted file.

#[cfg(test)]
mod tests;

use std::path::Path;
use std::process::{Command, ExitStatus};

/// The emitted gperf input file name.
pub const INPUT_FILE: &str = "SelectorPseudoClassAndCompatibilityElementMap.gperf";

/// The generated source file name.
pub const OUTPUT_FILE: &str = "SelectorPseudoClassAndCompatibilityElementMap.cpp";

/// Returns the gperf executable to run, from the `GPERF` environment
/// variable if set.
#[must_use]
pub fn executable() -> String {
  std::env::var("GPERF").unwrap_or_else(|_| "gperf".to_owned())
}

/// Runs `exe` on [`INPUT_FILE`] in `dir` to generate [`OUTPUT_FILE`], and
/// waits for it to finish.
///
/// # Errors
///
/// If the subprocess couldn't be spawned or waited for. A non-zero exit is
/// not an error here; the caller inspects the returned status.
pub fn run(exe: &str, dir: &Path) -> std::io::Result<ExitStatus> {
  let output_flag = format!("--output-file={OUTPUT_FILE}");
  log::debug!("running {exe} on {INPUT_FILE}");
  Command::new(exe)
    .current_dir(dir)
    .args(["--key-positions=*", "-m", "10", "-s", "2", INPUT_FILE, output_flag.as_str()])
    .status()
}
