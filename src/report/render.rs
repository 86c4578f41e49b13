//! Validation report rendering.
//!
//! Renders the classified report as a fixed-width table. Column widths are
//! measured ANSI-aware so colored cells line up with plain ones.

use console::{measure_text_width, pad_str, Alignment};

use crate::report::builder::{Report, ReportRow};
use crate::ui::theme::GlossaTheme;

const COLUMNS: usize = 5;

/// Render the report rows as fixed-width table lines, header first.
pub fn render_table(report: &Report, theme: &GlossaTheme) -> Vec<String> {
    let mut rows: Vec<[String; COLUMNS]> = Vec::with_capacity(report.rows.len() + 1);
    rows.push([
        "TYPE".to_string(),
        "NAME".to_string(),
        "MODEL".to_string(),
        "VERSION".to_string(),
        String::new(),
    ]);
    for row in &report.rows {
        rows.push(render_row(row, theme));
    }

    let mut widths = [0usize; COLUMNS];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(measure_text_width(cell));
        }
    }

    rows.iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| pad_str(cell, widths[i], Alignment::Left, None).to_string())
                .collect();
            format!("    {}", cells.join("  ")).trim_end().to_string()
        })
        .collect()
}

fn render_row(row: &ReportRow, theme: &GlossaTheme) -> [String; COLUMNS] {
    let (version, marker) = if row.compatible {
        (
            theme.pass.apply_to(&row.version).to_string(),
            theme.pass.apply_to("✔").to_string(),
        )
    } else {
        (
            theme.fail.apply_to(&row.version).to_string(),
            format!("--> {}", row.hint.as_deref().unwrap_or("n/a")),
        )
    };
    [
        row.origin.label().to_string(),
        row.registered_name.clone(),
        row.model_name.clone(),
        version,
        marker,
    ]
}
