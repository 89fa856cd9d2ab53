//! Indonesian translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Breakdown table
    t.insert("breakdown.title".into(), "Hasil Perhitungan Cost untuk".into());
    t.insert("component.material".into(), "Biaya Bahan".into());
    t.insert("component.production".into(), "Biaya Produksi".into());
    t.insert("component.other".into(), "Biaya Lainnya".into());

    // Ledger report
    t.insert("report.title".into(), "LAPORAN PERHITUNGAN COST".into());
    t.insert("report.materials".into(), "DIRECT MATERIALS".into());
    t.insert("report.labor".into(), "DIRECT LABOR".into());
    t.insert("report.overhead".into(), "OVERHEAD".into());
    t.insert("report.total_materials".into(), "Total Materials".into());
    t.insert("report.total_labor".into(), "Total Labor".into());
    t.insert("report.total_overhead".into(), "Total Overhead".into());
    t.insert("report.manufacturing".into(), "TOTAL MANUFACTURING COST".into());
    t.insert("report.total_cost".into(), "Total Cost".into());

    // Profit analysis
    t.insert("profit.title".into(), "ANALISIS PROFIT".into());
    t.insert("profit.selling_price".into(), "Harga Jual".into());
    t.insert("profit.profit".into(), "Profit".into());
    t.insert("profit.margin".into(), "Margin".into());

    // History
    t.insert("history.title".into(), "RIWAYAT".into());
    t.insert("history.units".into(), "unit".into());
    t.insert("history.unit_cost".into(), "Biaya per Unit".into());

    t
}
