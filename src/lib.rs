//! Production Cost library
//!
//! This module exposes the core functionality for use in tests
//! and as a library.

pub mod calculator;
pub mod core;
pub mod i18n;
pub mod ledger;
pub mod report;
pub mod sheet;
