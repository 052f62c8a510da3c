use super::file;
use crate::condition::Defines;
use crate::process;
use pretty_assertions::assert_eq;

fn render(input: &str) -> String {
  let defines = Defines::default();
  file(&process::get(input, &defines).unwrap())
}

#[test]
fn end_to_end_entries() {
  let got = render("foo-bar\nbaz, PseudoClassBaz, PseudoElementQux\n");
  let want = "\"foo-bar\", {CSSSelector::PseudoClassFooBar, CSSSelector::PseudoElementUnknown}\n\
              \"baz\", {CSSSelector::PseudoClassBaz, CSSSelector::PseudoElementQux}\n";
  let start = got.find("%%\n").unwrap() + 3;
  let end = got.find("%%\n\n").unwrap();
  assert_eq!(&got[start..end], want);
}

#[test]
fn longest_keyword_substituted() {
  let got = render("foo-bar\nbaz\n");
  assert!(got.contains("const unsigned maxKeywordLength = 7;"));
}

#[test]
fn header_and_trailer() {
  let got = render("foo\n");
  assert!(got.starts_with("\n%{\n/*\n * Copyright (C) 2014 Apple Inc. All rights reserved."));
  assert!(got.contains("%define class-name SelectorPseudoClassAndCompatibilityElementMapHash"));
  assert!(got.ends_with("#pragma clang diagnostic pop\n#endif\n\n"));
}

#[test]
fn wrapper_functions_present() {
  let got = render("foo\n");
  assert!(got.contains("in_word_set(reinterpret_cast<const char*>(characters), length)"));
  assert!(got.contains("if (pseudoTypeString.is8Bit())"));
  assert!(got.contains("if (character & ~0xff)"));
}

#[test]
fn no_entries() {
  let got = render("");
  assert!(got.contains("%%\n%%\n\n"));
  assert!(got.contains("const unsigned maxKeywordLength = 0;"));
}
