use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A table column: header text and how its cells are padded.
pub type Column<'a> = (&'a str, Align);

pub fn print_table(columns: &[Column<'_>], rows: &[Vec<String>]) {
    print!("{}", render_table(columns, rows));
}

/// Lay out `rows` under `columns`, two spaces between columns. Trailing
/// padding is trimmed from every line.
pub fn render_table(columns: &[Column<'_>], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|(h, _)| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    let mut out = render_line(columns.iter().map(|(h, _)| *h), columns, &widths);
    out.push_str(&render_line(sep.iter().map(String::as_str), columns, &widths));
    for row in rows {
        out.push_str(&render_line(row.iter().map(String::as_str), columns, &widths));
    }
    out
}

fn render_line<'a>(
    cells: impl Iterator<Item = &'a str>,
    columns: &[Column<'_>],
    widths: &[usize],
) -> String {
    let padded: Vec<String> = cells
        .zip(columns.iter().zip(widths))
        .map(|(cell, ((_, align), &width))| match align {
            Align::Left => format!("{cell:<width$}"),
            Align::Right => format!("{cell:>width$}"),
        })
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}
