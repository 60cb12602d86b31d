//! CLI module - Command-line interface definition and entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::paths::lexical_normalize;
use crate::flatten;

/// texflat - flatten a multi-file LaTeX project for submission.
#[derive(Parser, Debug)]
#[command(name = "texflat")]
#[command(
    author,
    version,
    about,
    long_about = r#"texflat rewrites a LaTeX project rooted at one main file into a flat,
self-contained bundle suitable for single-directory submission systems
such as arXiv.

It inlines every \input file, copies every \includegraphics image into
the output directory (rewriting the reference to its bare file name),
and concatenates every \bibliography source into one .bib file next to
the flattened document.

All \input and \includegraphics paths are resolved relative to the main
file's directory, including paths written inside included files.

Example:
    texflat paper/main.tex submission/
"#
)]
pub struct Cli {
    /// Main .tex file of the project (may \input other files).
    #[arg(
        value_name = "MAIN_TEX",
        long_help = "The top-level .tex file of the project.\n\n\
Every \\input and \\includegraphics path in the whole tree is resolved\n\
relative to this file's directory."
    )]
    pub main_tex: PathBuf,

    /// Directory to write the flattened bundle into (created if absent).
    #[arg(
        value_name = "OUTPUT_DIR",
        long_help = "Output directory for the flattened document, merged bibliography and\n\
copied images. Created if it does not exist; existing contents are kept\n\
(images sharing a file name are overwritten)."
    )]
    pub output_dir: PathBuf,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let main_tex = std::path::absolute(&cli.main_tex)
        .map(lexical_normalize)
        .with_context(|| format!("Failed to resolve main tex file: {:?}", cli.main_tex))?;
    let output_dir = std::path::absolute(&cli.output_dir)
        .map(lexical_normalize)
        .with_context(|| format!("Failed to resolve output directory: {:?}", cli.output_dir))?;

    flatten::run_flatten(&main_tex, &output_dir)
}
