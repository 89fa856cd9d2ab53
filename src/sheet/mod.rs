//! Product cost sheets
//!
//! A cost sheet is a TOML description of one product's materials, labor
//! and overhead, loaded into a [`CostLedger`]:
//!
//! ```toml
//! product = "Kemeja Lengan Panjang"
//! selling_price = 150000
//!
//! [[materials]]
//! name = "Kain"
//! quantity = 2
//! unit_price = 25000
//!
//! [[labor]]
//! position = "Penjahit"
//! hours = 3
//! rate_per_hour = 15000
//!
//! [[overhead]]
//! name = "Listrik"
//! cost = 5000
//! ```

use crate::core::{Error, Result};
use crate::ledger::CostLedger;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostSheet {
    pub product: String,
    #[serde(default)]
    pub selling_price: Option<f64>,
    #[serde(default)]
    pub materials: Vec<MaterialLine>,
    #[serde(default)]
    pub labor: Vec<LaborLine>,
    #[serde(default)]
    pub overhead: Vec<OverheadLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialLine {
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaborLine {
    pub position: String,
    pub hours: f64,
    pub rate_per_hour: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverheadLine {
    pub name: String,
    pub cost: f64,
}

impl CostSheet {
    /// Load a cost sheet from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let sheet = Self::parse(&content)?;
        log::debug!("Loaded cost sheet for {} from {}", sheet.product, path.display());
        Ok(sheet)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Serialization(format!("Failed to parse cost sheet: {}", e)))
    }

    /// Build a ledger, applying lines in file order.
    ///
    /// Repeated names follow the ledger's replace semantics, so the last
    /// line for a name wins.
    pub fn into_ledger(self) -> CostLedger {
        let mut ledger = CostLedger::new(&self.product);

        for line in &self.materials {
            ledger.add_material(&line.name, line.quantity, line.unit_price);
        }
        for line in &self.labor {
            ledger.add_labor(&line.position, line.hours, line.rate_per_hour);
        }
        for line in &self.overhead {
            ledger.add_overhead(&line.name, line.cost);
        }
        if let Some(price) = self.selling_price {
            ledger.set_selling_price(price);
        }

        ledger
    }
}
