//! Handlers for `simulate` and `grid`.

use tracing::info;

use super::render::{band_legend, composition_table, grid_table};
use super::{output, prompt, GridArgs, SimulateArgs};
use crate::config::Config;
use crate::domain::{compute, simulate, GridKind, SensitivityGrid, SimulationReport};
use crate::error::Result;

/// Execute `simulate`.
pub fn execute_simulate(args: &SimulateArgs, config: &Config) -> Result<()> {
    let mut inputs = args.scenario.apply(config.scenario);
    if args.interactive {
        inputs = prompt::scenario(inputs)?;
    }

    info!(?inputs, "running simulation");
    let report = simulate(&inputs, &config.sensitivity)?;

    if output::is_json() {
        return output::document("simulation", &report);
    }

    print_report(&report, !args.no_grids);
    Ok(())
}

/// Execute `grid`.
pub fn execute_grid(args: &GridArgs, config: &Config) -> Result<()> {
    let inputs = args.scenario.apply(config.scenario);
    inputs.validate()?;

    let kind = GridKind::from(args.kind);
    info!(%kind, "building sensitivity grid");
    let grid = kind.build(&inputs, &config.sensitivity);

    if output::is_json() {
        return output::document("grid", &grid);
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field(
        "Resultado base",
        output::amount(compute(&inputs).net_result),
    );
    print_grid(kind, &grid);
    Ok(())
}

fn print_report(report: &SimulationReport, with_grids: bool) {
    let result = &report.result;
    if output::is_quiet() {
        println!("{}", result.net_result);
        return;
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Resultado");
    output::success(&format!("Resultado: {}", output::amount(result.net_result)));
    output::field("Kg de salida", format!("{:.1}", result.exit_weight_kg));
    output::field("Kg ganados", format!("{:.1}", result.weight_gained_kg));
    output::field(
        "Consumo MS diario (kg)",
        format!("{:.2}", result.daily_drymatter_intake_kg),
    );
    output::field("Ingreso", format!("{:.2}", result.gross_revenue));
    output::field("Compra", format!("{:.2}", result.total_purchase_cost));
    output::field("Alimentación", format!("{:.2}", result.total_feed_cost));
    output::field("Estructura", format!("{:.2}", result.fixed_stay_expense));
    output::field("Impuesto venta", format!("{:.2}", result.sales_tax_expense));

    output::section("Composición del Resultado");
    output::block(&composition_table(&report.composition));

    if with_grids {
        for kind in GridKind::ALL {
            print_grid(kind, report.grid(kind));
        }
    }
}

fn print_grid(kind: GridKind, grid: &SensitivityGrid) {
    output::section(kind.title());
    output::block(&grid_table(grid));
    if !output::is_quiet() {
        println!();
        output::note(&band_legend());
    }
}
