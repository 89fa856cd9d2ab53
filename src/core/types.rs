//! Common types used across the application

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The three components of the one-shot cost calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostComponent {
    Material,
    Production,
    Other,
}

impl CostComponent {
    pub const ALL: [CostComponent; 3] = [Self::Material, Self::Production, Self::Other];

    /// Translation key for the component label
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Material => "component.material",
            Self::Production => "component.production",
            Self::Other => "component.other",
        }
    }
}

/// One component's nominal amount and its share of the total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentShare {
    pub component: CostComponent,
    pub nominal: f64,
    /// Percentage of the total, rounded to 2 decimal places
    pub percentage: f64,
}

/// Result of the one-shot cost calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Breakdown {
    pub product_name: String,
    /// Always material, production, other in that order
    pub components: Vec<ComponentShare>,
    pub total_cost: f64,
}

impl Breakdown {
    /// Look up a single component's share
    pub fn share(&self, component: CostComponent) -> Option<&ComponentShare> {
        self.components.iter().find(|s| s.component == component)
    }

    /// Sum of the rounded percentages
    pub fn percentage_sum(&self) -> f64 {
        self.components.iter().map(|s| s.percentage).sum()
    }
}

/// Ledger cost categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Material,
    Labor,
    Overhead,
}

impl CostCategory {
    pub const ALL: [CostCategory; 3] = [Self::Material, Self::Labor, Self::Overhead];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Labor => "labor",
            Self::Overhead => "overhead",
        }
    }
}

impl std::fmt::Display for CostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named amount inside one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    pub name: String,
    pub amount: f64,
}

/// Named cost entries of one category, in first-insertion order
///
/// Setting a name that is already present replaces its amount in place.
/// Amounts are never accumulated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostEntries {
    entries: Vec<CostEntry>,
}

impl CostEntries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. Returns the previous amount when replaced.
    pub fn set(&mut self, name: &str, amount: f64) -> Option<f64> {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => Some(std::mem::replace(&mut entry.amount, amount)),
            None => {
                self.entries.push(CostEntry {
                    name: name.to_string(),
                    amount,
                });
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CostEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all amounts; zero when empty
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.amount).sum()
    }
}

/// Profit and margin against the selling price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitAnalysis {
    pub total_cost: f64,
    pub selling_price: f64,
    /// Negative when selling below cost
    pub profit: f64,
    pub margin_percentage: f64,
}

/// Immutable record of a ledger's state at commit time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: DateTime<Local>,
    pub materials: CostEntries,
    pub labor: CostEntries,
    pub overhead: CostEntries,
    pub total_cost: f64,
    pub unit_cost: f64,
    pub units: i64,
    /// Present only when a positive selling price was set at commit time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit: Option<ProfitAnalysis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_replace_keeps_position() {
        let mut entries = CostEntries::new();
        assert_eq!(entries.set("Kain", 50000.0), None);
        assert_eq!(entries.set("Kancing", 5000.0), None);
        assert_eq!(entries.set("Kain", 30000.0), Some(50000.0));

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Kain", "Kancing"]);
        assert_eq!(entries.get("Kain"), Some(30000.0));
        assert_eq!(entries.total(), 35000.0);
    }

    #[test]
    fn test_empty_entries_total_zero() {
        let entries = CostEntries::new();
        assert!(entries.is_empty());
        assert_eq!(entries.total(), 0.0);
    }

    #[test]
    fn test_entries_serialize_as_list() {
        let mut entries = CostEntries::new();
        entries.set("Listrik", 5000.0);
        let json = serde_json::to_value(&entries).unwrap();
        assert_eq!(json, serde_json::json!([{ "name": "Listrik", "amount": 5000.0 }]));
    }
}
