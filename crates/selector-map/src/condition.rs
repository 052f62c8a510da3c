//! Expanding `#if` conditions and matching them against build defines.

#[cfg(test)]
mod tests;

use rustc_hash::FxHashSet;

/// Rewrites a parenthesized condition into a flat define name, e.g.
/// `ENABLE(FOO)` becomes `ENABLE_FOO=1`.
///
/// Parentheses are not checked for balance; a malformed condition yields a
/// malformed define name that simply matches nothing.
#[must_use]
pub fn expand(condition: &str) -> String {
  condition.replace('(', "_").replace(')', "=1")
}

/// The set of defines active for this build configuration.
#[derive(Debug, Default)]
pub struct Defines(FxHashSet<String>);

impl Defines {
  /// Splits a space-separated list of defines, e.g.
  /// `"ENABLE_FOO=1 ENABLE_BAR=1"`.
  #[must_use]
  pub fn new(s: &str) -> Self {
    Self(s.split(' ').map(|x| x.trim().to_owned()).collect())
  }

  /// Returns whether `define` is active.
  #[must_use]
  pub fn contains(&self, define: &str) -> bool {
    self.0.contains(define)
  }
}
