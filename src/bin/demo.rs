//! Production Cost - Demo CLI
//!
//! Walks through the one-shot calculator and the cost ledger with a
//! long-sleeve shirt example.

use anyhow::Result;

use production_cost_lib::calculator::compute_cost;
use production_cost_lib::core::FormatConfig;
use production_cost_lib::i18n::I18n;
use production_cost_lib::ledger::CostLedger;
use production_cost_lib::report::ReportRenderer;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   Production Cost - Demo CLI");
    println!("==============================================\n");

    let format = FormatConfig::default();
    let renderer = ReportRenderer::new(&format, I18n::new("id"));

    // 1. One-shot breakdown
    println!("[1/3] Simple calculator\n");
    let breakdown = compute_cost("Kemeja", 50000.0, 30000.0, 20000.0)?;
    println!("{}\n", renderer.render_breakdown(&breakdown));

    // 2. Ledger
    println!("[2/3] Cost ledger\n");
    let mut kemeja = CostLedger::new("Kemeja Lengan Panjang");

    kemeja.add_material("Kain", 2.0, 25000.0);
    kemeja.add_material("Kancing", 10.0, 500.0);
    kemeja.add_material("Benang", 1.0, 5000.0);

    kemeja.add_labor("Penjahit", 3.0, 15000.0);
    kemeja.add_labor("QC", 0.5, 20000.0);

    kemeja.add_overhead("Listrik", 5000.0);
    kemeja.add_overhead("Perawatan Mesin", 3000.0);
    kemeja.add_overhead("Sewa Tempat", 10000.0);

    kemeja.set_selling_price(150000.0);
    kemeja.commit_snapshot(100)?;

    println!("{}\n", renderer.render_report(&kemeja));

    // 3. History
    println!("[3/3] Snapshot history\n");
    println!("{}", renderer.render_history(kemeja.history()));

    println!("\n==============================================\n");

    Ok(())
}
