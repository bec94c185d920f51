/// Narrowest a column is squeezed to when fitting the terminal.
const MIN_COLUMN: usize = 6;

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
}

impl TableOptions {
    /// Width from `COLUMNS` when it is set to something usable.
    #[must_use]
    pub fn from_env() -> Self {
        let max_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);
        Self { max_width }
    }
}

/// Render rows as space-aligned columns under a dashed header rule.
///
/// Numeric cells are right-aligned; cells wider than their column are cut
/// with an ellipsis.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();
    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = join_cells(headers.iter().map(|h| (*h).to_string()), &widths, false);
    let rule = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, rule];
    lines.extend(rows.iter().map(|row| {
        let cells = (0..widths.len()).map(|i| row.get(i).cloned().unwrap_or_else(|| "-".into()));
        join_cells(cells, &widths, true)
    }));
    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>, widths: &[usize], align_numbers: bool) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| {
            let cell = truncate(&cell, width);
            if align_numbers && is_numeric(&cell) {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Take one character at a time off the widest shrinkable column until the
/// table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(i, w)| **w > headers[*i].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, w)| **w)
            .map(|(i, _)| i);
        let Some(i) = widest else {
            break;
        };
        widths[i] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    let single_line = value.replace('\n', " ");
    if single_line.chars().count() <= width {
        return single_line;
    }
    let mut out: String = single_line.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn no_limit() -> TableOptions {
        TableOptions { max_width: None }
    }

    #[test]
    fn columns_align_and_numbers_right_justify() {
        let rows = vec![
            vec!["tools".to_string(), "3".to_string()],
            vec!["projects".to_string(), "12".to_string()],
        ];
        let table = render_table(&["name", "count"], &rows, no_limit());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "name      count ");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "tools          3");
        assert_eq!(lines[3], "projects      12");
    }

    #[test]
    fn wide_tables_are_squeezed_with_ellipsis() {
        let rows = vec![vec!["x".repeat(80), "short".to_string()]];
        let table = render_table(
            &["content", "slug"],
            &rows,
            TableOptions { max_width: Some(40) },
        );
        let row = table.lines().nth(2).unwrap();
        assert_eq!(row.chars().count(), 40);
        assert!(row.contains('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec!["only".to_string()]];
        let table = render_table(&["a", "b"], &rows, no_limit());
        assert!(table.lines().nth(2).unwrap().contains('-'));
    }

    #[test]
    fn newlines_do_not_break_rows() {
        let rows = vec![vec!["line one\nline two".to_string()]];
        let table = render_table(&["content"], &rows, no_limit());
        assert_eq!(table.lines().count(), 3);
    }
}
