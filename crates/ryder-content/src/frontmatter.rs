//! Splitting a markdown document into its YAML frontmatter and body.
//!
//! The frontmatter block must open on the first line with `---` and close
//! with a line containing only `---`. A document without an opening
//! delimiter has no metadata; its entire text is the body.

use serde_yaml::{Mapping, Value};

const DELIMITER: &str = "---";

/// A document split into metadata and trimmed body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub metadata: Mapping,
    pub body: String,
}

/// Split `raw` into its frontmatter mapping and trimmed body.
///
/// An empty frontmatter block yields an empty mapping.
///
/// # Errors
///
/// Returns a description of the problem when the block is unterminated, is
/// not valid YAML, or is YAML but not a mapping.
pub fn split_frontmatter(raw: &str) -> Result<Document, String> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let Some((first, rest)) = split_line(raw) else {
        return Ok(without_metadata(raw));
    };
    if first.trim_end() != DELIMITER {
        return Ok(without_metadata(raw));
    }

    let mut yaml_len = 0;
    let mut remaining = rest;
    loop {
        let Some((line, after)) = split_line(remaining) else {
            return Err(String::from("frontmatter block is not closed with '---'"));
        };
        if line.trim_end() == DELIMITER {
            let yaml = &rest[..yaml_len];
            return Ok(Document {
                metadata: parse_metadata(yaml)?,
                body: after.trim().to_string(),
            });
        }
        yaml_len += remaining.len() - after.len();
        remaining = after;
    }
}

/// Next line (without its terminator) and the text after it.
fn split_line(text: &str) -> Option<(&str, &str)> {
    if text.is_empty() {
        return None;
    }
    Some(match text.find('\n') {
        Some(idx) => (text[..idx].trim_end_matches('\r'), &text[idx + 1..]),
        None => (text.trim_end_matches('\r'), ""),
    })
}

fn without_metadata(raw: &str) -> Document {
    Document {
        metadata: Mapping::new(),
        body: raw.trim().to_string(),
    }
}

fn parse_metadata(yaml: &str) -> Result<Mapping, String> {
    if yaml.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(yaml).map_err(|e| e.to_string())? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => Err(format!(
            "frontmatter must be a mapping, found {}",
            kind_name(&other)
        )),
    }
}

pub(crate) const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_metadata_and_trims_body() {
        let doc = split_frontmatter("---\ntitle: Cursor\ntags:\n  - IDE\n---\n\n# Cursor\n\nBody.\n\n")
            .unwrap();
        assert_eq!(doc.metadata.get("title").and_then(Value::as_str), Some("Cursor"));
        assert!(doc.metadata.get("tags").is_some_and(Value::is_sequence));
        assert_eq!(doc.body, "# Cursor\n\nBody.");
    }

    #[test]
    fn handles_crlf_and_bom() {
        let doc = split_frontmatter("\u{feff}---\r\ntitle: Win\r\n---\r\nBody\r\n").unwrap();
        assert_eq!(doc.metadata.get("title").and_then(Value::as_str), Some("Win"));
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn document_without_frontmatter() {
        let doc = split_frontmatter("# Just markdown\n").unwrap();
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "# Just markdown");
    }

    #[test]
    fn empty_block_is_empty_mapping() {
        let doc = split_frontmatter("---\n---\nbody").unwrap();
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn horizontal_rule_in_body_is_kept() {
        let doc = split_frontmatter("---\ntitle: x\n---\nabove\n\n---\n\nbelow").unwrap();
        assert_eq!(doc.body, "above\n\n---\n\nbelow");
    }

    #[test]
    fn unterminated_block_is_an_error() {
        let err = split_frontmatter("---\ntitle: x\nbody").unwrap_err();
        assert!(err.contains("not closed"));
    }

    #[test]
    fn non_mapping_block_is_an_error() {
        let err = split_frontmatter("---\n- a\n- b\n---\nbody").unwrap_err();
        assert!(err.contains("sequence"));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(split_frontmatter("---\ntitle: [unclosed\n---\nbody").is_err());
    }
}
