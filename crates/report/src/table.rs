//! GitHub-flavoured table of raw and normalized signal values.

use rae_signals::SignalSet;

const HEADERS: [&str; 3] = ["Signal", "Raw Value", "Normalized"];

fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.4}")
    }
}

/// Renders one row per signal with values to four decimals.
#[must_use]
pub fn format_table(raw: &SignalSet, norm: &SignalSet) -> String {
    let rows: Vec<[String; 3]> = raw
        .iter()
        .map(|(name, value)| {
            [
                name.key().to_string(),
                format_value(value),
                format_value(norm[name]),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_row = |cells: [&str; 3]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        format!("| {} |", padded.join(" | "))
    };

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(HEADERS));
    lines.push(format!("|{}|", separator.join("|")));
    for row in &rows {
        lines.push(render_row([&row[0], &row[1], &row[2]]));
    }

    lines.join("\n")
}
