use super::{Defines, expand};

#[test]
fn simple() {
  assert_eq!(expand("ENABLE(X)"), "ENABLE_X=1");
}

#[test]
fn longer_flag() {
  assert_eq!(expand("ENABLE(FULLSCREEN_API)"), "ENABLE_FULLSCREEN_API=1");
}

#[test]
fn no_parens() {
  assert_eq!(expand("WTF_PLATFORM_MAC"), "WTF_PLATFORM_MAC");
}

#[test]
fn unbalanced() {
  assert_eq!(expand("ENABLE(X"), "ENABLE_X");
}

#[test]
fn defines_contains() {
  let defines = Defines::new("ENABLE_FOO=1 ENABLE_BAR=1");
  assert!(defines.contains("ENABLE_FOO=1"));
  assert!(defines.contains("ENABLE_BAR=1"));
  assert!(!defines.contains("ENABLE_QUZ=1"));
}

#[test]
fn defines_extra_spaces() {
  let defines = Defines::new(" ENABLE_FOO=1  ENABLE_BAR=1 ");
  assert!(defines.contains("ENABLE_FOO=1"));
  assert!(defines.contains("ENABLE_BAR=1"));
}
