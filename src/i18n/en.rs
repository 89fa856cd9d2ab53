//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Breakdown table
    t.insert("breakdown.title".into(), "Cost breakdown for".into());
    t.insert("component.material".into(), "Material Cost".into());
    t.insert("component.production".into(), "Production Cost".into());
    t.insert("component.other".into(), "Other Costs".into());

    // Ledger report
    t.insert("report.title".into(), "COST CALCULATION REPORT".into());
    t.insert("report.materials".into(), "DIRECT MATERIALS".into());
    t.insert("report.labor".into(), "DIRECT LABOR".into());
    t.insert("report.overhead".into(), "OVERHEAD".into());
    t.insert("report.total_materials".into(), "Total Materials".into());
    t.insert("report.total_labor".into(), "Total Labor".into());
    t.insert("report.total_overhead".into(), "Total Overhead".into());
    t.insert("report.manufacturing".into(), "TOTAL MANUFACTURING COST".into());
    t.insert("report.total_cost".into(), "Total Cost".into());

    // Profit analysis
    t.insert("profit.title".into(), "PROFIT ANALYSIS".into());
    t.insert("profit.selling_price".into(), "Selling Price".into());
    t.insert("profit.profit".into(), "Profit".into());
    t.insert("profit.margin".into(), "Margin".into());

    // History
    t.insert("history.title".into(), "HISTORY".into());
    t.insert("history.units".into(), "units".into());
    t.insert("history.unit_cost".into(), "Unit Cost".into());

    t
}
