//! Text rendering of simulation results.

use owo_colors::Style;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style as TableStyle};
use tabled::{Table, Tabled};

use super::output;
use crate::domain::{CellBand, CompositionBreakdown, SensitivityGrid};

/// Display style of a band: red loss, yellow low, light green medium, green high.
#[must_use]
pub fn band_style(band: CellBand) -> Style {
    match band {
        CellBand::Loss => Style::new().on_red().white(),
        CellBand::Low => Style::new().on_yellow().black(),
        CellBand::Medium => Style::new().on_bright_green().black(),
        CellBand::High => Style::new().on_green().white().bold(),
    }
}

#[derive(Tabled)]
struct CompositionRow {
    #[tabled(rename = "Concepto")]
    concept: &'static str,
    #[tabled(rename = "Valor (USD)")]
    value: i64,
}

/// The four composition lines as a table.
#[must_use]
pub fn composition_table(composition: &CompositionBreakdown) -> String {
    let rows = composition.lines().map(|line| CompositionRow {
        concept: line.label,
        value: line.value,
    });

    Table::new(rows)
        .with(TableStyle::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string()
}

/// A sensitivity grid with row and column labels, each cell styled by band.
///
/// Cells are padded before styling so escape codes never affect alignment.
#[must_use]
pub fn grid_table(grid: &SensitivityGrid) -> String {
    let row_labels = grid.rows().labels();
    let column_labels = grid.columns().labels();

    let label_width = row_labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let cell_width = column_labels
        .iter()
        .map(|l| l.chars().count())
        .chain(
            grid.cells()
                .iter()
                .flatten()
                .map(|cell| cell.value.to_string().len()),
        )
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(row_labels.len() + 2);

    let header: Vec<String> = column_labels
        .iter()
        .map(|label| format!("{label:>cell_width$}"))
        .collect();
    lines.push(format!("{:label_width$} {}", "", header.join(" ")));
    lines.push(format!(
        "{:─<label_width$} {}",
        "",
        vec!["─".repeat(cell_width); column_labels.len()].join(" ")
    ));

    for (label, row) in row_labels.iter().zip(grid.cells()) {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| {
                output::styled(
                    format!("{:>cell_width$}", cell.value),
                    band_style(cell.band),
                )
            })
            .collect();
        lines.push(format!("{label:<label_width$} {}", cells.join(" ")));
    }

    lines.join("\n")
}

/// One-line key of the four bands.
#[must_use]
pub fn band_legend() -> String {
    [
        (CellBand::Loss, " < 0 "),
        (CellBand::Low, " 0-50 "),
        (CellBand::Medium, " 51-89 "),
        (CellBand::High, " >= 90 "),
    ]
    .iter()
    .map(|(band, range)| output::styled(range, band_style(*band)))
    .collect::<Vec<_>>()
    .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute, decompose, GridKind, GridSteps, ScenarioInputs};

    #[test]
    fn composition_table_lists_labels_in_order() {
        owo_colors::set_override(false);
        let inputs = ScenarioInputs::default();
        let composition = decompose(&inputs, &compute(&inputs)).unwrap();
        let table = composition_table(&composition);

        let purchase = table.find("Margen de compra venta").unwrap();
        let feed = table.find("Margen de alimentación").unwrap();
        let expenses = table.find("Gastos de compra venta").unwrap();
        let total = table.find("Resultado Total").unwrap();
        assert!(purchase < feed && feed < expenses && expenses < total);
        assert!(table.contains("-16"));
    }

    #[test]
    fn grid_table_has_header_rule_and_rows() {
        owo_colors::set_override(false);
        let grid = GridKind::Price.build(&ScenarioInputs::default(), &GridSteps::default());
        let table = grid_table(&grid);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 13);
        assert!(lines[0].contains("Venta: 3.75"));
        assert!(lines[2].starts_with("Compra: 1.95"));
        assert!(lines[12].starts_with("Compra: 2.45"));
        assert!(lines[7].contains("31"));
    }

    #[test]
    fn band_styles_differ() {
        let rendered: Vec<String> = [
            CellBand::Loss,
            CellBand::Low,
            CellBand::Medium,
            CellBand::High,
        ]
        .iter()
        .map(|band| band_style(*band).style("0").to_string())
        .collect();

        for (i, a) in rendered.iter().enumerate() {
            for b in &rendered[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
