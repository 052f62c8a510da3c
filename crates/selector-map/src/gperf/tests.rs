use super::{INPUT_FILE, run};
use tempfile::TempDir;

#[test]
fn success_status() {
  let tmp = TempDir::new().unwrap();
  std::fs::write(tmp.path().join(INPUT_FILE), "%%\n%%\n").unwrap();
  // a stand-in that ignores its arguments and exits 0.
  let status = run("true", tmp.path()).unwrap();
  assert!(status.success());
}

#[test]
fn failure_status() {
  let tmp = TempDir::new().unwrap();
  let status = run("false", tmp.path()).unwrap();
  assert!(!status.success());
  assert_eq!(status.code(), Some(1));
}

#[test]
fn missing_executable() {
  let tmp = TempDir::new().unwrap();
  assert!(run("definitely-not-a-real-executable", tmp.path()).is_err());
}
