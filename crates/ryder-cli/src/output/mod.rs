use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table::TableOptions::from_env()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Like [`output`], but tables are built from a condensed view of `value`.
pub fn output_with_rows<T, R>(
    value: &T,
    rows: impl FnOnce() -> R,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    T: Serialize,
    R: Serialize,
{
    match format {
        OutputFormat::Table => output(&rows(), format),
        OutputFormat::Json | OutputFormat::Raw => output(value, format),
    }
}

fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_array(&items, options)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, options))
        }
        scalar => Ok(table::render_table(&["value"], &[vec![cell(&scalar)]], options)),
    }
}

fn render_array(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options);
    }

    // columns in first-seen order across all rows
    let mut headers = Vec::<String>::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(|m| m.keys()) {
        if !headers.contains(key) {
            headers.push(key.clone());
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_table(&header_refs, &rows, options)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{render, render_table, table::TableOptions};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        slug: &'static str,
        tags: Vec<&'static str>,
        rank: Option<u32>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Row {
            slug: "cursor",
            tags: vec!["ide"],
            rank: Some(1),
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["slug"], "cursor");
        assert_eq!(parsed["rank"], 1);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&vec![1, 2, 3], OutputFormat::Raw).expect("raw render should work");
        assert_eq!(out, "[1,2,3]");
    }

    #[test]
    fn array_of_objects_becomes_columns() {
        let rows = vec![
            Row {
                slug: "cursor",
                tags: vec!["ide", "ai-coding"],
                rank: Some(1),
            },
            Row {
                slug: "aider",
                tags: vec![],
                rank: None,
            },
        ];
        let out = render_table(&rows, TableOptions::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("rank"));
        assert!(lines[2].contains("ide, ai-coding"));
        assert!(lines[3].starts_with("-     "));
    }

    #[test]
    fn empty_array_has_placeholder() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(
            render_table(&rows, TableOptions::default()).unwrap(),
            "(no rows)"
        );
    }

    #[test]
    fn object_becomes_key_value_table() {
        let out = render_table(
            &serde_json::json!({"success": true, "total": 4}),
            TableOptions::default(),
        )
        .unwrap();
        assert!(out.lines().next().is_some_and(|l| l.starts_with("key")));
        assert!(out.contains("success"));
    }
}
