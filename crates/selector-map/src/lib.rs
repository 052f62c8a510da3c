//! Turn a list of CSS pseudo-class and compatibility pseudo-element keyword
//! definitions into a gperf input file for the selector keyword matcher.
//!
//! The pipeline is linear: [`process`] filters and parses the definition
//! lines, [`symbol`] derives enum symbol names from keywords, [`emit`]
//! renders the gperf file text, and [`gperf`] runs the generator on it.

pub mod condition;
pub mod emit;
pub mod gperf;
pub mod process;
pub mod symbol;
