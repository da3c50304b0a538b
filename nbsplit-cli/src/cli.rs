use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// `{"code": [...], "markdown": [...]}`
    Json,
    /// Markdown sources followed by code sources, newline separated
    Text,
}

#[derive(Parser, Debug)]
#[command(
    name = "nbsplit",
    author,
    version,
    about = "Split a Jupyter notebook into its code and markdown cell sources, printed as JSON."
)]
pub struct Cli {
    /// Path to the notebook (.ipynb) file.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    /// Emit each cell source as an array of lines instead of one string.
    #[arg(long, action = ArgAction::SetTrue)]
    pub lines: bool,

    /// Pretty-print the JSON output (`--pretty` or `--pretty=N` for an N-space indent).
    #[arg(
        long,
        value_name = "N",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "2"
    )]
    pub pretty: Option<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Path to the TOML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
