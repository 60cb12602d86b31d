//! texflat - flatten a multi-file LaTeX project into a single submission bundle
//!
//! texflat:
//! - Inlines `\input` files recursively into one document
//! - Copies referenced images into a flat output directory and rewrites
//!   `\includegraphics` paths to match
//! - Merges all `\bibliography` sources into one `.bib` file

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

mod cli;
mod core;
mod flatten;

fn main() -> Result<()> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            // Usage errors go to stdout with status 1.
            println!("{}", cli::Cli::command().render_help());
            std::process::exit(1);
        }
    };

    cli::run(cli)
}
