//! One-shot cost calculator
//!
//! Splits a product's cost into material, production and other components
//! and reports each component's share of the total.

use crate::core::{Breakdown, ComponentShare, CostComponent, Error, Result};

/// Compute the cost breakdown for a product.
///
/// Fails with [`Error::DegenerateInput`] when the components sum to zero,
/// since no share of a zero total exists.
pub fn compute_cost(
    product_name: &str,
    material_cost: f64,
    production_cost: f64,
    other_cost: f64,
) -> Result<Breakdown> {
    let total_cost = material_cost + production_cost + other_cost;

    if total_cost == 0.0 {
        return Err(Error::DegenerateInput(format!(
            "total cost of '{}' is zero, percentages are undefined",
            product_name
        )));
    }

    let components = CostComponent::ALL
        .iter()
        .zip([material_cost, production_cost, other_cost])
        .map(|(&component, nominal)| ComponentShare {
            component,
            nominal,
            percentage: round2(nominal / total_cost * 100.0),
        })
        .collect();

    log::debug!("Computed breakdown for {}: total {}", product_name, total_cost);

    Ok(Breakdown {
        product_name: product_name.to_string(),
        components,
        total_cost,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
