//! Flatten engine - recursive include resolution and path rewriting
//!
//! Walks the `\input` graph depth-first from the main document, emitting the
//! transformed text and collecting side outputs (copied images, bibliography
//! references, the minted-usage flag) into a [`FlattenState`] threaded
//! through the recursion.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::paths::{file_stem_lossy, resolve_reference};
use crate::flatten::bib::merge_bibliographies;
use crate::flatten::patterns::{
    BIBLIOGRAPHY_RE, INCLUDE_GRAPHICS_RE, INPUT_RE, USE_PACKAGE_RE,
};

/// Mutable traversal state shared across the whole include tree.
#[derive(Debug, Default)]
pub struct FlattenState {
    /// Bibliography sources in document order, `.bib` extension included.
    /// Duplicates are kept; a file referenced twice is merged twice.
    pub bib_files: Vec<String>,

    /// Set once the first `\bibliography` directive has been rewritten.
    /// Every later directive in the tree is dropped from the output.
    pub bibliography_rewritten: bool,

    /// True if any processed file pulls in the minted package.
    pub uses_minted: bool,
}

/// Recursively flatten one file, returning its transformed text.
///
/// Every `\input` and `\includegraphics` path in the tree resolves against
/// `base_dir` (the main document's directory), never against the including
/// file's own directory. Lines matching no directive are copied verbatim,
/// terminator included. There is no cycle guard; a self-including document
/// recurses until the stack runs out.
pub fn flatten_file(
    tex_file: &Path,
    base_dir: &Path,
    output_dir: &Path,
    root_stem: &str,
    state: &mut FlattenState,
) -> Result<String> {
    let source = fs::read_to_string(tex_file)
        .with_context(|| format!("Failed to read tex file {}", tex_file.display()))?;

    let mut content = String::new();

    for line in source.split_inclusive('\n') {
        if let Some(caps) = INPUT_RE.captures(line) {
            if let Some(group) = caps.get(1) {
                let target = resolve_reference(base_dir, group.as_str());
                content.push_str(&format!("%include of {}\n", target.display()));
                let nested = flatten_file(&target, base_dir, output_dir, root_stem, state)?;
                content.push_str(&nested);
                content.push('\n');
                continue;
            }
        }

        if let Some(caps) = USE_PACKAGE_RE.captures(line) {
            if caps.get(1).map(|m| m.as_str()) == Some("minted") {
                state.uses_minted = true;
            }
            // the \usepackage line itself is copied through below
        }

        if let Some(caps) = BIBLIOGRAPHY_RE.captures(line) {
            if let Some(group) = caps.get(1) {
                state.bib_files.push(format!("{}.bib", group.as_str()));
                if state.bibliography_rewritten {
                    continue;
                }
                state.bibliography_rewritten = true;
                content.push_str(&format!("\\bibliography{{{}}}\n", root_stem));
                continue;
            }
        }

        if let Some(caps) = INCLUDE_GRAPHICS_RE.captures(line) {
            if let Some(group) = caps.get(1) {
                let image = resolve_reference(base_dir, group.as_str());
                let image_name = image
                    .file_name()
                    .with_context(|| {
                        format!("Image path has no file name: {}", image.display())
                    })?
                    .to_string_lossy()
                    .into_owned();

                let target = output_dir.join(&image_name);
                fs::copy(&image, &target).with_context(|| {
                    format!(
                        "Failed to copy image {} to {}",
                        image.display(),
                        target.display()
                    )
                })?;

                // Rewrite only the final brace group; options and the line
                // terminator stay untouched.
                content.push_str(&line[..group.start()]);
                content.push_str(&image_name);
                content.push_str(&line[group.end()..]);
                continue;
            }
        }

        content.push_str(line);
    }

    Ok(content)
}

/// Flatten the project rooted at `main_tex` into `output_dir`.
///
/// Writes the flattened document under the main file's own name and the
/// merged bibliography under `<stem>.bib`, then prints closing guidance.
pub fn run_flatten(main_tex: &Path, output_dir: &Path) -> Result<()> {
    let base_dir = main_tex.parent().with_context(|| {
        format!("Main tex file has no parent directory: {}", main_tex.display())
    })?;
    let root_name = main_tex
        .file_name()
        .with_context(|| format!("Main tex file has no file name: {}", main_tex.display()))?;
    let root_stem = file_stem_lossy(main_tex);

    // Created before traversal: image copies land here while flattening.
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let mut state = FlattenState::default();
    let flattened = flatten_file(main_tex, base_dir, output_dir, &root_stem, &mut state)?;

    let merged_bib = merge_bibliographies(base_dir, &state.bib_files)?;

    let out_tex = output_dir.join(root_name);
    fs::write(&out_tex, &flattened)
        .with_context(|| format!("Failed to write flattened document {}", out_tex.display()))?;

    let out_bib = output_dir.join(format!("{}.bib", root_stem));
    println!("{}", out_bib.display());
    fs::write(&out_bib, &merged_bib)
        .with_context(|| format!("Failed to write merged bibliography {}", out_bib.display()))?;

    print_closing_guidance(output_dir, state.uses_minted);

    Ok(())
}

fn print_closing_guidance(output_dir: &Path, uses_minted: bool) {
    println!(
        "Almost done! Copy any custom cls or bst style files into {} and generate your bbl file",
        output_dir.display()
    );
    if uses_minted {
        println!("For minted:");
        println!(
            "  build the code highlighting cache with \\usepackage[finalizecache=true,cachedir=./]{{minted}}"
        );
        println!(
            "  then switch to \\usepackage[frozencache=true,cachedir=./]{{minted}} before uploading"
        );
    }
}
