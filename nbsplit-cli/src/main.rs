//! nbsplit - split a Jupyter notebook into code and markdown sources
//!
//! Reads one notebook, partitions its cells by `cell_type` and writes
//! `{"code": [...], "markdown": [...]}` to stdout. Cells of any other kind are
//! dropped. Diagnostics and logs go to stderr; nothing is written to stdout
//! unless the whole notebook was processed.

mod cli;
mod util;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use nbsplit_core::{extract, render_json, render_text, Config, Notebook, SourceLayout};
use tracing::{debug, info};

use cli::{Cli, OutputFormat};
use util::{init_tracing, AppError};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("nbsplit: {err}");
            err.exit_code()
        }
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).map_err(AppError::config)?;
    init_tracing(cli.verbose, config.log_level.as_deref());
    if let Some(path) = &config.config_path {
        debug!(path = %path.display(), "using config file");
    }

    let layout = if cli.lines {
        SourceLayout::Lines
    } else {
        config.layout
    };
    let indent = cli.pretty.unwrap_or(config.pretty_indent);

    let notebook = Notebook::from_path(&cli.input).map_err(AppError::from_notebook)?;
    let extraction = extract(&notebook, layout);
    info!(
        path = %cli.input.display(),
        code = extraction.code.len(),
        markdown = extraction.markdown.len(),
        "split notebook"
    );

    let payload = match cli.format {
        OutputFormat::Json => render_json(&extraction, indent).map_err(AppError::format)?,
        OutputFormat::Text => render_text(&extraction).into_bytes(),
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&payload)
        .and_then(|()| stdout.flush())
        .context("failed to write to stdout")
        .map_err(AppError::io)?;

    Ok(())
}
