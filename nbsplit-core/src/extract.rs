use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::notebook::{CellKind, CellSource, Notebook};

/// How each cell source is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLayout {
    /// One string per cell
    #[default]
    Joined,
    /// An array of lines per cell, terminators kept
    Lines,
}

impl SourceLayout {
    fn apply(self, source: &CellSource) -> CellSource {
        match self {
            SourceLayout::Joined => CellSource::Text(source.joined()),
            SourceLayout::Lines => CellSource::Lines(source.lines()),
        }
    }
}

/// Code and markdown sources of a notebook, each in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub code: Vec<CellSource>,
    pub markdown: Vec<CellSource>,
}

/// Partition the notebook's cells into code and markdown groups. Cells of
/// any other kind are dropped.
pub fn extract(notebook: &Notebook, layout: SourceLayout) -> Extraction {
    let mut extraction = Extraction::default();
    let mut dropped = 0usize;

    for cell in &notebook.cells {
        match cell.kind {
            CellKind::Code => extraction.code.push(layout.apply(&cell.source)),
            CellKind::Markdown => extraction.markdown.push(layout.apply(&cell.source)),
            _ => dropped += 1,
        }
    }

    debug!(
        code = extraction.code.len(),
        markdown = extraction.markdown.len(),
        dropped,
        "extracted cells"
    );

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notebook::Cell;

    fn notebook(cells: Vec<Cell>) -> Notebook {
        Notebook {
            nbformat: 4,
            nbformat_minor: 5,
            cells,
        }
    }

    #[test]
    fn partitions_in_document_order() {
        let nb = notebook(vec![
            Cell::new(CellKind::Code, "a=1"),
            Cell::new(CellKind::Markdown, "# Title"),
            Cell::new(CellKind::Code, "print(a)"),
        ]);

        let out = extract(&nb, SourceLayout::Joined);
        assert_eq!(
            out.code,
            vec![CellSource::from("a=1"), CellSource::from("print(a)")]
        );
        assert_eq!(out.markdown, vec![CellSource::from("# Title")]);
    }

    #[test]
    fn drops_other_kinds() {
        let nb = notebook(vec![
            Cell::new(CellKind::Raw, "raw text"),
            Cell::new(CellKind::Other, "?"),
            Cell::new(CellKind::Heading, "## h"),
            Cell::new(CellKind::Markdown, "kept"),
        ]);

        let out = extract(&nb, SourceLayout::Joined);
        assert!(out.code.is_empty());
        assert_eq!(out.markdown, vec![CellSource::from("kept")]);
    }

    #[test]
    fn empty_notebook_yields_empty_groups() {
        let out = extract(&notebook(Vec::new()), SourceLayout::Joined);
        assert_eq!(out, Extraction::default());
    }

    #[test]
    fn layout_normalises_both_representations() {
        let nb = notebook(vec![
            Cell::new(
                CellKind::Code,
                CellSource::Lines(vec!["x = 1\n".into(), "y = 2".into()]),
            ),
            Cell::new(CellKind::Markdown, "one\ntwo\n"),
        ]);

        let joined = extract(&nb, SourceLayout::Joined);
        assert_eq!(joined.code, vec![CellSource::from("x = 1\ny = 2")]);
        assert_eq!(joined.markdown, vec![CellSource::from("one\ntwo\n")]);

        let lines = extract(&nb, SourceLayout::Lines);
        assert_eq!(
            lines.code,
            vec![CellSource::Lines(vec!["x = 1\n".into(), "y = 2".into()])]
        );
        assert_eq!(
            lines.markdown,
            vec![CellSource::Lines(vec!["one\n".into(), "two\n".into()])]
        );
    }
}
