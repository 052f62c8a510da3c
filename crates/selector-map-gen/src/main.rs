//! A thin CLI that regenerates the CSS selector pseudo-keyword matcher.
//!
//! Reads a `SelectorPseudoTypeMap.in`-style definitions file, emits a gperf
//! input file into the current directory, and runs gperf on it to produce
//! the final lookup table source.

use anyhow::{Context as _, Result, bail};
use selector_map::condition::Defines;
use selector_map::{emit, gperf, process};
use std::path::{Path, PathBuf};

fn usage() {
  let current_exe_name = std::env::current_exe()
    .ok()
    .and_then(|x| Some(x.file_name()?.to_str()?.to_owned()))
    .unwrap_or_else(|| "<unknown>".to_owned());
  println!("usage:");
  println!("  {current_exe_name} [options] <definitions> <defines>");
  let rest_of_usage = r#"
options:
  -h, --help
    show this help

arguments:
  <definitions>
    path of the keyword definitions file, e.g. SelectorPseudoTypeMap.in
  <defines>
    space-separated active build defines, e.g. "ENABLE_FOO=1 ENABLE_BAR=1"

environment variables:
  GPERF
    the gperf executable to run (default: gperf)
"#;
  print!("{rest_of_usage}");
}

/// Returns gperf's exit code when it failed, else `None`.
fn run() -> Result<Option<i32>> {
  let mut args = pico_args::Arguments::from_env();
  if args.contains(["-h", "--help"]) {
    usage();
    return Ok(None);
  }
  let definitions: PathBuf = args.free_from_str().with_context(|| "couldn't get <definitions>")?;
  let defines: String = args.free_from_str().with_context(|| "couldn't get <defines>")?;
  let args = args.finish();
  if !args.is_empty() {
    bail!("unused arguments: {args:?}")
  }
  let input = std::fs::read_to_string(definitions.as_path())
    .with_context(|| format!("couldn't read {}", definitions.display()))?;
  let out = process::get(input.as_str(), &Defines::new(defines.as_str()))
    .with_context(|| format!("couldn't process {}", definitions.display()))?;
  log::info!("emitting {} keyword entries", out.entries.len());
  std::fs::write(gperf::INPUT_FILE, emit::file(&out))
    .with_context(|| format!("couldn't write {}", gperf::INPUT_FILE))?;
  let exe = gperf::executable();
  let status =
    gperf::run(exe.as_str(), Path::new(".")).with_context(|| format!("couldn't run {exe}"))?;
  if status.success() {
    Ok(None)
  } else {
    println!("Error when generating {} from {} :(", gperf::OUTPUT_FILE, gperf::INPUT_FILE);
    Ok(Some(status.code().unwrap_or(1)))
  }
}

fn main() {
  match env_logger::try_init_from_env(env_logger::Env::default().default_filter_or("error")) {
    Ok(()) => {}
    Err(e) => {
      println!("could not start env logger: {e}");
      std::process::exit(1);
    }
  }
  match run() {
    Ok(None) => {}
    Ok(Some(code)) => std::process::exit(code),
    Err(e) => {
      println!("error: {e:#}");
      std::process::exit(1);
    }
  }
}
