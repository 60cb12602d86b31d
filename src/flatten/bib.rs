//! Bibliography merge - concatenate referenced .bib sources

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Concatenate the referenced bibliography files in order.
///
/// Contents are passed through raw: no deduplication and no key-collision
/// detection, so a file referenced twice is included twice. Each file name
/// is printed as a progress line before it is read.
pub fn merge_bibliographies(base_dir: &Path, refs: &[String]) -> Result<String> {
    let mut merged = String::new();

    for name in refs {
        println!("{}", name);
        let path = base_dir.join(name);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read bibliography file {}", path.display()))?;
        merged.push_str(&content);
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_merge_concatenates_in_order() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.bib"), "@misc{a, title={A}}\n").unwrap();
        fs::write(temp.path().join("b.bib"), "@misc{b, title={B}}\n").unwrap();

        let merged = merge_bibliographies(
            temp.path(),
            &["a.bib".to_string(), "b.bib".to_string()],
        )
        .unwrap();
        assert_eq!(merged, "@misc{a, title={A}}\n@misc{b, title={B}}\n");
    }

    #[test]
    fn test_merge_keeps_duplicates() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.bib"), "@misc{a}\n").unwrap();

        let merged = merge_bibliographies(
            temp.path(),
            &["a.bib".to_string(), "a.bib".to_string()],
        )
        .unwrap();
        assert_eq!(merged, "@misc{a}\n@misc{a}\n");
    }

    #[test]
    fn test_merge_empty_list_is_empty() {
        let temp = tempdir().unwrap();
        assert_eq!(merge_bibliographies(temp.path(), &[]).unwrap(), "");
    }

    #[test]
    fn test_merge_missing_file_is_fatal() {
        let temp = tempdir().unwrap();
        let err = merge_bibliographies(temp.path(), &["gone.bib".to_string()]).unwrap_err();
        assert!(err.to_string().contains("gone.bib"));
    }
}
