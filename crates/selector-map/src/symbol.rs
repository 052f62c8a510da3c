//! Deriving `CSSSelector` enum symbol names from keyword strings.


/// The pseudo-element symbol used for entries that only name a pseudo-class.
pub const PSEUDO_ELEMENT_UNKNOWN: &str = "CSSSelector::PseudoElementUnknown";

const VENDOR_PREFIXES: [&str; 2] = ["-webkit-", "-khtml-"];

/// Derives the pseudo-class enum symbol for `keyword`.
///
/// A trailing `(` (marking a functional pseudo-class) and at most one vendor
/// prefix are stripped, then each dash-delimited segment is capitalized and
/// the segments are joined, e.g. `-webkit-foo-bar(` becomes
/// `CSSSelector::PseudoClassFooBar`.
///
/// # Panics
///
/// If the keyword contains an empty segment (leading, trailing, or doubled
/// dashes after prefix stripping). Non-empty segments are a precondition of
/// the definitions file format.
#[must_use]
pub fn pseudo_class(keyword: &str) -> String {
  let keyword = keyword.strip_suffix('(').unwrap_or(keyword);
  let keyword = VENDOR_PREFIXES
    .iter()
    .find_map(|prefix| keyword.strip_prefix(prefix))
    .unwrap_or(keyword);
  let mut ret = "CSSSelector::PseudoClass".to_owned();
  for segment in keyword.split('-') {
    let mut chars = segment.chars();
    let fst = chars.next().expect("no empty segments in a keyword");
    ret.extend(fst.to_uppercase());
    ret.push_str(chars.as_str());
  }
  ret
}
