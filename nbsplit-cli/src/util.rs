use std::fmt;
use std::process::ExitCode;

use nbsplit_core::NotebookError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Io,
    Format,
    Config,
}

#[derive(Debug)]
pub struct AppError {
    pub(crate) kind: ErrorKind,
    pub(crate) source: anyhow::Error,
}

impl AppError {
    pub fn new(kind: ErrorKind, source: anyhow::Error) -> Self {
        Self { kind, source }
    }

    pub fn input<E: Into<anyhow::Error>>(err: E) -> Self {
        Self::new(ErrorKind::Input, err.into())
    }

    pub fn io<E: Into<anyhow::Error>>(err: E) -> Self {
        Self::new(ErrorKind::Io, err.into())
    }

    pub fn format<E: Into<anyhow::Error>>(err: E) -> Self {
        Self::new(ErrorKind::Format, err.into())
    }

    pub fn config<E: Into<anyhow::Error>>(err: E) -> Self {
        Self::new(ErrorKind::Config, err.into())
    }

    /// Classify a notebook read failure: a file we could not open or read is
    /// an input error, anything else is a format error.
    pub fn from_notebook(err: NotebookError) -> Self {
        if err.is_io() {
            Self::input(err)
        } else {
            Self::format(err)
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self.kind {
            ErrorKind::Input => ExitCode::from(1),
            ErrorKind::Io => ExitCode::from(2),
            ErrorKind::Format | ErrorKind::Config => ExitCode::from(3),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.source)
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins, then `-v` flags, then
/// the configured level, then `warn`.
pub fn init_tracing(verbose: u8, configured: Option<&str>) {
    let fallback = match verbose {
        0 => configured.unwrap_or("warn").to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_maps_to_input_error() {
        let err = nbsplit_core::Notebook::from_path("/definitely/not/here.ipynb").unwrap_err();
        let app = AppError::from_notebook(err);
        assert_eq!(app.kind, ErrorKind::Input);
        assert_eq!(app.exit_code(), ExitCode::from(1));
    }

    #[test]
    fn parse_failure_maps_to_format_error() {
        let err = nbsplit_core::Notebook::from_json_str("not json").unwrap_err();
        let app = AppError::from_notebook(err);
        assert_eq!(app.kind, ErrorKind::Format);
        assert_eq!(app.exit_code(), ExitCode::from(3));
    }
}
