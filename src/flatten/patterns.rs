//! Directive patterns
//!
//! The four LaTeX commands the flattener recognizes, matched per line.
//! All patterns are anchored at the start of the line (leading whitespace
//! allowed) and checked once per line, so a command following other text
//! on the same line is deliberately not recognized.

use once_cell::sync::Lazy;
use regex::Regex;

/// `\input{path}` - the file to splice inline.
pub static INPUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\\input\{(.*)\}").expect("Invalid INPUT_RE regex"));

/// `\usepackage[...]{name}` - captures the final brace group. A comma list
/// of packages is captured as one name.
pub static USE_PACKAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\\usepackage.*\{(.*)\}").expect("Invalid USE_PACKAGE_RE regex"));

/// `\bibliography{name}` - the brace must follow the command name
/// immediately, so `\bibliographystyle{...}` does not match.
pub static BIBLIOGRAPHY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\\bibliography\{(.*)\}").expect("Invalid BIBLIOGRAPHY_RE regex"));

/// `\includegraphics[...]{path}` - captures the final brace group, so
/// bracketed options are skipped over.
pub static INCLUDE_GRAPHICS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\\includegraphics.*\{(.*)\}").expect("Invalid INCLUDE_GRAPHICS_RE regex")
});
