//! Minimal Jupyter notebook reader.
//!
//! Only the parts of the schema needed to partition a notebook are modelled:
//! the format version and, for each cell, its `cell_type` and source text.
//! Everything else (metadata, outputs, attachments) is ignored rather than
//! validated. nbformat 3 documents are upgraded to the v4 cell shape on load.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{NotebookError, Result};

/// Kind of notebook cell, taken from its `cell_type` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum CellKind {
    Code,
    Markdown,
    Raw,
    /// nbformat 3 heading cell; upgraded to markdown when read from a v3 document
    Heading,
    /// Any `cell_type` we do not recognise
    Other,
}

impl From<String> for CellKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "code" => CellKind::Code,
            "markdown" => CellKind::Markdown,
            "raw" => CellKind::Raw,
            "heading" => CellKind::Heading,
            _ => CellKind::Other,
        }
    }
}

impl CellKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Code => "code",
            CellKind::Markdown => "markdown",
            CellKind::Raw => "raw",
            CellKind::Heading => "heading",
            CellKind::Other => "other",
        }
    }
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cell text as stored on disk: one string, or a list of lines that
/// concatenate to the full text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellSource {
    Text(String),
    Lines(Vec<String>),
}

impl Default for CellSource {
    fn default() -> Self {
        CellSource::Text(String::new())
    }
}

impl CellSource {
    /// Full text of the cell.
    pub fn joined(&self) -> String {
        match self {
            CellSource::Text(text) => text.clone(),
            CellSource::Lines(lines) => lines.concat(),
        }
    }

    /// Text split into lines, each keeping its terminator. An empty source
    /// has no lines.
    pub fn lines(&self) -> Vec<String> {
        self.joined()
            .split_inclusive('\n')
            .map(str::to_owned)
            .collect()
    }
}

impl From<&str> for CellSource {
    fn from(text: &str) -> Self {
        CellSource::Text(text.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    pub source: CellSource,
}

impl Cell {
    pub fn new(kind: CellKind, source: impl Into<CellSource>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }
}

/// A parsed notebook: format version plus cells in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notebook {
    pub nbformat: u32,
    pub nbformat_minor: u32,
    pub cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct RawNotebook {
    nbformat: Option<u32>,
    #[serde(default)]
    nbformat_minor: u32,
    #[serde(default)]
    cells: Vec<RawCell>,
    #[serde(default)]
    worksheets: Vec<RawWorksheet>,
}

#[derive(Deserialize)]
struct RawWorksheet {
    #[serde(default)]
    cells: Vec<RawCell>,
}

#[derive(Deserialize)]
struct RawCell {
    cell_type: CellKind,
    #[serde(default)]
    source: Option<CellSource>,
    // v3 code cells keep their text here
    #[serde(default)]
    input: Option<CellSource>,
    // v3 heading cells
    #[serde(default)]
    level: Option<u32>,
}

impl RawCell {
    fn into_v4(self) -> Cell {
        Cell {
            kind: self.cell_type,
            source: self.source.unwrap_or_default(),
        }
    }

    fn upgrade_v3(self) -> Cell {
        match self.cell_type {
            CellKind::Code => Cell {
                kind: CellKind::Code,
                source: self.input.or(self.source).unwrap_or_default(),
            },
            CellKind::Heading => {
                let text = self.source.unwrap_or_default().joined();
                let single_line = text.lines().collect::<Vec<_>>().join(" ");
                let hashes = "#".repeat(self.level.unwrap_or(1) as usize);
                Cell {
                    kind: CellKind::Markdown,
                    source: CellSource::Text(format!("{hashes} {single_line}")),
                }
            }
            kind => Cell {
                kind,
                source: self.source.unwrap_or_default(),
            },
        }
    }
}

impl Notebook {
    /// Read and parse the notebook at `path`. The file is read in full and
    /// closed before parsing results are returned.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| NotebookError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading notebook");
        Self::from_reader(BufReader::new(file)).map_err(|err| match err {
            NotebookError::Json(inner) if inner.is_io() => NotebookError::Io {
                path: path.to_path_buf(),
                source: inner.into(),
            },
            other => other,
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(NotebookError::InvalidFormat(
                "top-level value is not a JSON object".to_string(),
            ));
        }

        let raw: RawNotebook = serde_json::from_value(value)?;
        let major = raw.nbformat.ok_or_else(|| {
            NotebookError::InvalidFormat("missing `nbformat` version field".to_string())
        })?;
        let minor = raw.nbformat_minor;

        let cells: Vec<Cell> = match major {
            4 => raw.cells.into_iter().map(RawCell::into_v4).collect(),
            3 => {
                trace!(worksheets = raw.worksheets.len(), "upgrading nbformat 3 notebook");
                raw.worksheets
                    .into_iter()
                    .flat_map(|sheet| sheet.cells)
                    .map(RawCell::upgrade_v3)
                    .collect()
            }
            _ => return Err(NotebookError::UnsupportedVersion { major, minor }),
        };

        debug!(
            nbformat = major,
            nbformat_minor = minor,
            cells = cells.len(),
            "parsed notebook"
        );

        Ok(Self {
            nbformat: major,
            nbformat_minor: minor,
            cells,
        })
    }
}
