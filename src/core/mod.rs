//! Core module - Shared types, configuration, and errors

mod config;
mod error;
mod types;

pub use config::{Config, FormatConfig, GeneralConfig, LedgerConfig};
pub use error::{Error, Result};
pub use types::{Breakdown, ComponentShare, CostCategory, CostComponent, CostEntries, CostEntry, ProfitAnalysis, Snapshot};
