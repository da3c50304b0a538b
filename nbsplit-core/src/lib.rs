//! # nbsplit-core
//!
//! Reads Jupyter notebooks (nbformat 3 and 4) and partitions their cells into
//! code and markdown sources.
//!
//! ```no_run
//! use nbsplit_core::{extract, render_json, Notebook, SourceLayout};
//!
//! let notebook = Notebook::from_path("analysis.ipynb")?;
//! let extraction = extract(&notebook, SourceLayout::Joined);
//! let json = render_json(&extraction, 0)?;
//! print!("{}", String::from_utf8_lossy(&json));
//! # Ok::<(), nbsplit_core::NotebookError>(())
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod notebook;
pub mod render;

pub use config::Config;
pub use error::{NotebookError, Result};
pub use extract::{extract, Extraction, SourceLayout};
pub use notebook::{Cell, CellKind, CellSource, Notebook};
pub use render::{render_json, render_text};
