//! Plain-text table rendering for list output.

/// Render `rows` under `headers` as left-aligned, space-padded columns.
///
/// Widths are measured in characters. Rows shorter than the header are padded
/// with empty cells.
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut out = String::new();
    push_line(&mut out, &widths, headers.iter().copied());
    push_line(&mut out, &widths, rule.iter().map(String::as_str));
    for row in rows {
        push_line(
            &mut out,
            &widths,
            (0..widths.len()).map(|i| row.get(i).map_or("", String::as_str)),
        );
    }
    out
}

fn push_line<'a>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width - cell.chars().count();
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
