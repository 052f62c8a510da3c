//! Processing the definitions file into table entries.


use crate::condition::{self, Defines};
use crate::symbol;
use rustc_hash::FxHashSet;
use std::fmt;

#[derive(Debug)]
enum ErrorKind {
  Arity(usize),
  Duplicate(String),
}

/// An error when processing the definitions file.
#[derive(Debug)]
pub struct Error(ErrorKind);

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.0 {
      ErrorKind::Arity(n) => {
        write!(f, "malformed definition line: expected 1 or 3 comma-separated fields, found {n}")
      }
      ErrorKind::Duplicate(keyword) => write!(f, "duplicate keyword: {keyword}"),
    }
  }
}

impl std::error::Error for Error {}

/// A single entry of the keyword table.
#[derive(Debug, PartialEq, Eq)]
pub struct Entry {
  /// The keyword as it appears in a selector, e.g. `first-of-type`.
  pub keyword: String,
  /// The pseudo-class enum symbol.
  pub pseudo_class: String,
  /// The pseudo-element enum symbol.
  pub pseudo_element: String,
}

/// All table entries, plus the longest keyword's byte length for sizing the
/// conversion buffer in the generated code.
#[derive(Debug, Default)]
pub struct Output {
  /// The entries, in input order.
  pub entries: Vec<Entry>,
  /// The longest keyword's byte length.
  pub longest_keyword: usize,
}

#[derive(Debug, Clone, Copy)]
enum State {
  Including,
  Skipping,
}

/// Parses the definitions file `input`, keeping only the lines whose
/// enclosing `#if` condition (if any) is active in `defines`.
///
/// A definition line is either a bare keyword, from which the pseudo-class
/// symbol is derived, or a `keyword, PseudoClassFoo, PseudoElementBar`
/// triple naming both symbols explicitly.
///
/// `#if`/`#endif` blocks do not nest: the most recent `#if` alone decides
/// whether lines are kept, and `#endif` always reverts to keeping them.
///
/// # Errors
///
/// If a definition line has two or more than three fields, or if a keyword
/// appears twice.
pub fn get(input: &str, defines: &Defines) -> Result<Output, Error> {
  let mut state = State::Including;
  let mut ret = Output::default();
  let mut seen = FxHashSet::<String>::default();
  for line in input.lines() {
    let line = line.trim();
    if line.is_empty() {
      continue;
    }
    if let Some(cond) = line.strip_prefix("#if ") {
      let define = condition::expand(cond.trim());
      state = if defines.contains(define.as_str()) {
        State::Including
      } else {
        log::debug!("skipping lines under inactive condition {define}");
        State::Skipping
      };
      continue;
    }
    if line.starts_with("#endif") {
      state = State::Including;
      continue;
    }
    if matches!(state, State::Skipping) {
      continue;
    }
    let fields: Vec<_> = line.split(',').map(str::trim).collect();
    let entry = match fields[..] {
      [keyword] => Entry {
        keyword: keyword.to_owned(),
        pseudo_class: symbol::pseudo_class(keyword),
        pseudo_element: symbol::PSEUDO_ELEMENT_UNKNOWN.to_owned(),
      },
      [keyword, pseudo_class, pseudo_element] => Entry {
        keyword: keyword.to_owned(),
        pseudo_class: format!("CSSSelector::{pseudo_class}"),
        pseudo_element: format!("CSSSelector::{pseudo_element}"),
      },
      _ => return Err(Error(ErrorKind::Arity(fields.len()))),
    };
    if !seen.insert(entry.keyword.clone()) {
      return Err(Error(ErrorKind::Duplicate(entry.keyword)));
    }
    ret.longest_keyword = ret.longest_keyword.max(entry.keyword.len());
    ret.entries.push(entry);
  }
  Ok(ret)
}
