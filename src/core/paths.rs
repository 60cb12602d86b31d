//! Path normalization utilities
//!
//! Document references (`\input{...}`, `\includegraphics{...}`) are
//! normalized lexically and resolved against the root document's directory.

use std::path::{Component, Path, PathBuf};

/// Normalize a path lexically: drop `.` components, resolve `..` against
/// preceding components where possible, keep leading `..` chains.
///
/// Purely textual; the filesystem is never consulted, so symlinks are not
/// honored. An empty result becomes `.`.
pub fn lexical_normalize(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().copied() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `..` directly under the root collapses into the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(Component::ParentDir),
            },
            other => parts.push(other),
        }
    }

    let mut normalized = PathBuf::new();
    for part in &parts {
        normalized.push(part.as_os_str());
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// Resolve a document reference against the base directory.
///
/// The reference is normalized first, so `figures/../fig.png` and
/// `./fig.png` land on the same path. An absolute reference replaces the
/// base entirely.
pub fn resolve_reference(base_dir: &Path, reference: &str) -> PathBuf {
    base_dir.join(lexical_normalize(reference))
}

/// File name without its extension, lossily converted to a String.
pub fn file_stem_lossy(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_normalize_plain() {
        assert_eq!(
            lexical_normalize("sections/intro.tex"),
            PathBuf::from("sections/intro.tex")
        );
    }

    #[test]
    fn test_lexical_normalize_curdir() {
        assert_eq!(
            lexical_normalize("./figures/plot.png"),
            PathBuf::from("figures/plot.png")
        );
        assert_eq!(lexical_normalize("a/./b"), PathBuf::from("a/b"));
    }

    #[test]
    fn test_lexical_normalize_parent() {
        assert_eq!(lexical_normalize("a/../b"), PathBuf::from("b"));
        assert_eq!(lexical_normalize("a/b/../../c"), PathBuf::from("c"));
    }

    #[test]
    fn test_lexical_normalize_leading_parent_kept() {
        assert_eq!(
            lexical_normalize("../shared/fig.png"),
            PathBuf::from("../shared/fig.png")
        );
        assert_eq!(lexical_normalize("../.."), PathBuf::from("../.."));
    }

    #[test]
    fn test_lexical_normalize_root_parent_collapses() {
        assert_eq!(lexical_normalize("/.."), PathBuf::from("/"));
        assert_eq!(lexical_normalize("/../etc"), PathBuf::from("/etc"));
    }

    #[test]
    fn test_lexical_normalize_empty_becomes_dot() {
        assert_eq!(lexical_normalize(""), PathBuf::from("."));
        assert_eq!(lexical_normalize("a/.."), PathBuf::from("."));
    }

    #[test]
    fn test_resolve_reference_relative() {
        let base = Path::new("/paper");
        assert_eq!(
            resolve_reference(base, "sections/../figures/plot.png"),
            PathBuf::from("/paper/figures/plot.png")
        );
    }

    #[test]
    fn test_resolve_reference_absolute_wins() {
        let base = Path::new("/paper");
        assert_eq!(
            resolve_reference(base, "/tmp/fig.png"),
            PathBuf::from("/tmp/fig.png")
        );
    }

    #[test]
    fn test_file_stem_lossy() {
        assert_eq!(file_stem_lossy(Path::new("/paper/main.tex")), "main");
        assert_eq!(file_stem_lossy(Path::new("refs.bib")), "refs");
    }
}
