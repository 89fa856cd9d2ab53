//! Cost ledger for a single product
//!
//! Tracks direct materials, direct labor and overhead entries, derives
//! totals, per-unit cost and profit margin on demand, and keeps an
//! append-only history of snapshots.

use crate::core::{CostCategory, CostEntries, Error, ProfitAnalysis, Result, Snapshot};
use chrono::{DateTime, Local};

/// Stateful cost accumulator for one product
#[derive(Debug, Clone)]
pub struct CostLedger {
    product_name: String,
    materials: CostEntries,
    labor: CostEntries,
    overhead: CostEntries,
    selling_price: Option<f64>,
    history: Vec<Snapshot>,
}

impl CostLedger {
    /// Create an empty ledger with no selling price
    pub fn new(product_name: &str) -> Self {
        Self {
            product_name: product_name.to_string(),
            materials: CostEntries::new(),
            labor: CostEntries::new(),
            overhead: CostEntries::new(),
            selling_price: None,
            history: Vec::new(),
        }
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Record a direct material as `quantity * unit_price`
    pub fn add_material(&mut self, name: &str, quantity: f64, unit_price: f64) {
        self.add_entry(CostCategory::Material, name, quantity * unit_price);
    }

    /// Record direct labor for a position as `hours * rate_per_hour`
    pub fn add_labor(&mut self, position: &str, hours: f64, rate_per_hour: f64) {
        self.add_entry(CostCategory::Labor, position, hours * rate_per_hour);
    }

    /// Record an overhead cost as-is
    pub fn add_overhead(&mut self, name: &str, cost: f64) {
        self.add_entry(CostCategory::Overhead, name, cost);
    }

    /// Store an amount under `name` in the given category.
    ///
    /// An existing entry with the same name is replaced, not added to.
    /// Callers relying on repeated additions summing up must total the
    /// amounts themselves.
    pub fn add_entry(&mut self, category: CostCategory, name: &str, amount: f64) {
        if amount < 0.0 {
            log::warn!("Negative {} amount for '{}': {}", category, name, amount);
        }

        match self.entries_mut(category).set(name, amount) {
            Some(previous) => log::debug!(
                "Replaced {} '{}' ({} -> {})",
                category, name, previous, amount
            ),
            None => log::debug!("Added {} '{}': {}", category, name, amount),
        }
    }

    /// Overwrite the selling price. Non-positive prices count as unset.
    pub fn set_selling_price(&mut self, price: f64) {
        self.selling_price = Some(price);
    }

    /// The selling price, if one has been set and is positive
    pub fn selling_price(&self) -> Option<f64> {
        self.selling_price.filter(|p| *p > 0.0)
    }

    pub fn entries(&self, category: CostCategory) -> &CostEntries {
        match category {
            CostCategory::Material => &self.materials,
            CostCategory::Labor => &self.labor,
            CostCategory::Overhead => &self.overhead,
        }
    }

    fn entries_mut(&mut self, category: CostCategory) -> &mut CostEntries {
        match category {
            CostCategory::Material => &mut self.materials,
            CostCategory::Labor => &mut self.labor,
            CostCategory::Overhead => &mut self.overhead,
        }
    }

    pub fn category_total(&self, category: CostCategory) -> f64 {
        self.entries(category).total()
    }

    pub fn total_material(&self) -> f64 {
        self.category_total(CostCategory::Material)
    }

    pub fn total_labor(&self) -> f64 {
        self.category_total(CostCategory::Labor)
    }

    pub fn total_overhead(&self) -> f64 {
        self.category_total(CostCategory::Overhead)
    }

    /// Total manufacturing cost across all categories
    pub fn total_cost(&self) -> f64 {
        self.total_material() + self.total_labor() + self.total_overhead()
    }

    /// Total cost spread over `unit_count` units
    pub fn unit_cost(&self, unit_count: i64) -> Result<f64> {
        if unit_count <= 0 {
            return Err(Error::InvalidArgument(format!(
                "unit count must be greater than 0, got {}",
                unit_count
            )));
        }
        Ok(self.total_cost() / unit_count as f64)
    }

    /// Profit and margin at the current selling price
    pub fn profit_analysis(&self) -> Result<ProfitAnalysis> {
        let selling_price = self.selling_price().ok_or_else(|| {
            Error::PreconditionNotMet(format!(
                "selling price for '{}' has not been set",
                self.product_name
            ))
        })?;

        let total_cost = self.total_cost();
        let profit = selling_price - total_cost;

        Ok(ProfitAnalysis {
            total_cost,
            selling_price,
            profit,
            margin_percentage: profit / selling_price * 100.0,
        })
    }

    /// Append a snapshot of the current state, timestamped now
    pub fn commit_snapshot(&mut self, unit_count: i64) -> Result<()> {
        self.commit_snapshot_at(unit_count, Local::now())
    }

    /// Append a snapshot of the current state with the given timestamp
    pub fn commit_snapshot_at(&mut self, unit_count: i64, timestamp: DateTime<Local>) -> Result<()> {
        let unit_cost = self.unit_cost(unit_count)?;
        let profit = match self.selling_price() {
            Some(_) => Some(self.profit_analysis()?),
            None => None,
        };

        let snapshot = Snapshot {
            timestamp,
            materials: self.materials.clone(),
            labor: self.labor.clone(),
            overhead: self.overhead.clone(),
            total_cost: self.total_cost(),
            unit_cost,
            units: unit_count,
            profit,
        };

        log::info!(
            "Snapshot #{} for {}: total {}, unit cost {} over {} units",
            self.history.len() + 1,
            self.product_name,
            snapshot.total_cost,
            snapshot.unit_cost,
            unit_count
        );

        self.history.push(snapshot);
        Ok(())
    }

    /// All committed snapshots, oldest first
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn latest_snapshot(&self) -> Option<&Snapshot> {
        self.history.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const EPSILON: f64 = 1e-9;

    fn kemeja() -> CostLedger {
        let mut ledger = CostLedger::new("Kemeja Lengan Panjang");
        ledger.add_material("Kain", 2.0, 25000.0);
        ledger.add_material("Kancing", 10.0, 500.0);
        ledger.add_material("Benang", 1.0, 5000.0);
        ledger.add_labor("Penjahit", 3.0, 15000.0);
        ledger.add_labor("QC", 0.5, 20000.0);
        ledger.add_overhead("Listrik", 5000.0);
        ledger.add_overhead("Perawatan Mesin", 3000.0);
        ledger.add_overhead("Sewa Tempat", 10000.0);
        ledger
    }

    #[test]
    fn test_empty_ledger_totals() {
        let ledger = CostLedger::new("Empty");
        assert_eq!(ledger.total_material(), 0.0);
        assert_eq!(ledger.total_labor(), 0.0);
        assert_eq!(ledger.total_overhead(), 0.0);
        assert_eq!(ledger.total_cost(), 0.0);
        assert_eq!(ledger.selling_price(), None);
        assert!(ledger.history().is_empty());
    }

    #[test]
    fn test_full_scenario() {
        let mut ledger = kemeja();
        assert_eq!(ledger.total_material(), 60000.0);
        assert_eq!(ledger.total_labor(), 55000.0);
        assert_eq!(ledger.total_overhead(), 18000.0);
        assert_eq!(ledger.total_cost(), 133000.0);
        assert_eq!(ledger.unit_cost(100).unwrap(), 1330.0);

        ledger.set_selling_price(150000.0);
        let analysis = ledger.profit_analysis().unwrap();
        assert_eq!(analysis.total_cost, 133000.0);
        assert_eq!(analysis.selling_price, 150000.0);
        assert_eq!(analysis.profit, 17000.0);
        assert!((analysis.margin_percentage - 11.3333).abs() < 0.001);
    }

    #[test]
    fn test_duplicate_name_replaces() {
        let mut ledger = CostLedger::new("Kemeja");
        ledger.add_material("Kain", 2.0, 25000.0);
        ledger.add_material("Kain", 1.0, 30000.0);

        assert_eq!(ledger.total_material(), 30000.0);
        assert_eq!(ledger.entries(CostCategory::Material).len(), 1);
        assert_eq!(ledger.entries(CostCategory::Material).get("Kain"), Some(30000.0));
    }

    #[test]
    fn test_same_name_in_different_categories() {
        let mut ledger = CostLedger::new("Kemeja");
        ledger.add_material("Setup", 1.0, 100.0);
        ledger.add_labor("Setup", 2.0, 100.0);
        ledger.add_overhead("Setup", 300.0);

        assert_eq!(ledger.total_material(), 100.0);
        assert_eq!(ledger.total_labor(), 200.0);
        assert_eq!(ledger.total_overhead(), 300.0);
    }

    #[test]
    fn test_total_equals_sum_of_categories() {
        let mut ledger = kemeja();
        ledger.add_overhead("Listrik", 7000.0);
        ledger.add_labor("Packing", 1.5, 12000.0);
        ledger.add_entry(CostCategory::Material, "Label", 250.0);

        let sum = ledger.total_material() + ledger.total_labor() + ledger.total_overhead();
        assert!((ledger.total_cost() - sum).abs() < EPSILON);
    }

    #[test]
    fn test_unit_cost_rejects_non_positive() {
        let ledger = kemeja();
        assert!(matches!(ledger.unit_cost(0), Err(Error::InvalidArgument(_))));
        assert!(matches!(ledger.unit_cost(-5), Err(Error::InvalidArgument(_))));
        assert_eq!(ledger.unit_cost(100).unwrap(), ledger.total_cost() / 100.0);
    }

    #[test]
    fn test_profit_requires_positive_price() {
        let mut ledger = kemeja();
        assert!(matches!(ledger.profit_analysis(), Err(Error::PreconditionNotMet(_))));

        ledger.set_selling_price(0.0);
        assert!(matches!(ledger.profit_analysis(), Err(Error::PreconditionNotMet(_))));

        ledger.set_selling_price(-10.0);
        assert!(matches!(ledger.profit_analysis(), Err(Error::PreconditionNotMet(_))));
    }

    #[test]
    fn test_profit_with_overhead_only() {
        let mut ledger = CostLedger::new("Kemeja");
        ledger.add_material("Kain", 2.0, 25000.0);
        ledger.add_material("Kancing", 10.0, 500.0);
        ledger.add_material("Benang", 1.0, 5000.0);
        ledger.add_labor("Penjahit", 3.0, 15000.0);
        ledger.add_overhead("Listrik", 5000.0);
        ledger.add_overhead("Sewa Tempat", 3000.0);
        assert_eq!(ledger.total_cost(), 113000.0);

        ledger.set_selling_price(150000.0);
        let analysis = ledger.profit_analysis().unwrap();
        assert_eq!(analysis.profit, 37000.0);
        assert!((analysis.margin_percentage - 24.67).abs() < 0.01);
    }

    #[test]
    fn test_loss_is_not_an_error() {
        let mut ledger = kemeja();
        ledger.set_selling_price(100000.0);
        let analysis = ledger.profit_analysis().unwrap();
        assert_eq!(analysis.profit, -33000.0);
        assert!((analysis.margin_percentage + 33.0).abs() < EPSILON);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let mut ledger = kemeja();
        let t1 = Local.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let t2 = Local.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap();

        ledger.commit_snapshot_at(100, t1).unwrap();
        ledger.add_material("Kain", 2.0, 30000.0);
        ledger.set_selling_price(150000.0);
        ledger.commit_snapshot_at(50, t2).unwrap();

        let history = ledger.history();
        assert_eq!(history.len(), 2);

        assert_eq!(history[0].timestamp, t1);
        assert_eq!(history[0].total_cost, 133000.0);
        assert_eq!(history[0].unit_cost, 1330.0);
        assert_eq!(history[0].units, 100);
        assert_eq!(history[0].materials.get("Kain"), Some(50000.0));
        assert!(history[0].profit.is_none());

        assert_eq!(history[1].timestamp, t2);
        assert_eq!(history[1].total_cost, 143000.0);
        assert_eq!(history[1].total_cost, ledger.total_cost());
        assert_eq!(history[1].unit_cost, 2860.0);
        assert_eq!(history[1].materials.get("Kain"), Some(60000.0));
        let profit = history[1].profit.as_ref().unwrap();
        assert_eq!(profit.profit, 7000.0);
        assert_eq!(profit.selling_price, 150000.0);
    }

    #[test]
    fn test_snapshot_count_matches_commits() {
        let mut ledger = kemeja();
        for n in 1..=5 {
            ledger.commit_snapshot(n).unwrap();
        }
        assert_eq!(ledger.history().len(), 5);
        assert_eq!(ledger.latest_snapshot().unwrap().units, 5);
    }

    #[test]
    fn test_failed_snapshot_leaves_history_unchanged() {
        let mut ledger = kemeja();
        ledger.commit_snapshot(10).unwrap();

        assert!(matches!(ledger.commit_snapshot(0), Err(Error::InvalidArgument(_))));
        assert_eq!(ledger.history().len(), 1);
    }
}
