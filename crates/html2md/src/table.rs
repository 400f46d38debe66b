//! Table rendering: a row/cell grid to a pipe table.

use crate::inline::render_inlines;
use crate::node::Element;

/// Render `table` as header row, `---` separator row and body rows.
///
/// Rows are every `tr` below the table at any depth, cells every `td`/`th`
/// below the row. Rows without cells are dropped and the rest are padded to
/// the widest row. The first kept row is the header whatever its cell tags.
/// Nothing is appended when no row has cells.
pub(crate) fn render_table(table: &Element, out: &mut Vec<String>) {
    let mut rows: Vec<Vec<String>> = table
        .find_all(&["tr"])
        .into_iter()
        .map(|tr| {
            tr.find_all(&["td", "th"])
                .into_iter()
                .map(|cell| render_inlines(cell.children()).trim().to_string())
                .collect::<Vec<_>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect();

    let Some(col_count) = rows.iter().map(Vec::len).max() else {
        return;
    };
    for row in &mut rows {
        row.resize(col_count, String::new());
    }

    let mut rows = rows.into_iter();
    if let Some(header) = rows.next() {
        out.push(format_row(&header));
    }
    out.push(format_row(&vec!["---".to_string(); col_count]));
    out.extend(rows.map(|row| format_row(&row)));
}

fn format_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}
