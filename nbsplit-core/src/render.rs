use serde::Serialize;

use crate::error::Result;
use crate::extract::Extraction;

/// Serialize the extraction into a buffer terminated by a newline. An
/// `indent` of zero gives compact output.
pub fn render_json(extraction: &Extraction, indent: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();

    if indent > 0 {
        let indent = vec![b' '; indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_slice());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        extraction.serialize(&mut serializer)?;
    } else {
        serde_json::to_writer(&mut buffer, extraction)?;
    }

    buffer.push(b'\n');
    Ok(buffer)
}

/// Combined text of the notebook: markdown sources first, then code sources,
/// joined by newlines.
pub fn render_text(extraction: &Extraction) -> String {
    let mut text = extraction
        .markdown
        .iter()
        .chain(extraction.code.iter())
        .map(|source| source.joined())
        .collect::<Vec<_>>()
        .join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notebook::CellSource;
    use serde_json::{json, Value};

    fn sample() -> Extraction {
        Extraction {
            code: vec![CellSource::from("a=1"), CellSource::from("print(a)")],
            markdown: vec![CellSource::from("# Title")],
        }
    }

    #[test]
    fn compact_output_is_one_line() {
        let bytes = render_json(&sample(), 0).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "{\"code\":[\"a=1\",\"print(a)\"],\"markdown\":[\"# Title\"]}\n"
        );
    }

    #[test]
    fn pretty_output_round_trips() {
        let bytes = render_json(&sample(), 4).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains("\n    \"code\": ["));

        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            json!({"code": ["a=1", "print(a)"], "markdown": ["# Title"]})
        );
    }

    #[test]
    fn empty_extraction_has_both_keys() {
        let bytes = render_json(&Extraction::default(), 0).unwrap();
        assert_eq!(bytes, b"{\"code\":[],\"markdown\":[]}\n");
    }

    #[test]
    fn text_puts_markdown_before_code() {
        assert_eq!(render_text(&sample()), "# Title\na=1\nprint(a)\n");
    }
}
