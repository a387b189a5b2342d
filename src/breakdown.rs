//! Per-unit price tables for display
//!
//! A breakdown is derived data for tables and labels. Costing always
//! recomputes from the raw purchase price and an explicit usage unit,
//! never from these rows.

use std::fmt;

use serde::Serialize;

use crate::{
    convert::{price_per_unit, PurchaseUnit, UsageUnit},
    model::InventoryItem,
};

/// One row of a price breakdown table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakdownEntry {
    /// Usage unit priced by this row
    pub unit: UsageUnit,
    /// Price of one `unit`
    pub price_per_unit: f64,
}

impl fmt::Display for BreakdownEntry {
    /// Formats as `$0.0300/oz`, with four decimals for per-unit prices
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.4}/{}", self.price_per_unit, self.unit)
    }
}

/// Price per compatible usage unit, in the taxonomy's order
///
/// One entry per unit in
/// [`compatible_units`](PurchaseUnit::compatible_units); the first row is
/// the purchase unit's default display unit.
///
/// ```
/// # use foodcost::{price_breakdown, PurchaseUnit, UsageUnit};
/// let rows = price_breakdown(3.84, PurchaseUnit::Gallon);
/// assert_eq!(rows[0].unit, UsageUnit::Oz);
/// assert_eq!(rows[0].to_string(), "$0.0300/oz");
/// ```
pub fn price_breakdown(purchase_price: f64, purchase_unit: PurchaseUnit) -> Vec<BreakdownEntry> {
    purchase_unit
        .compatible_units()
        .iter()
        .map(|&unit| BreakdownEntry {
            unit,
            price_per_unit: price_per_unit(purchase_price, purchase_unit, unit),
        })
        .collect()
}

/// `$x.xxxx/unit` label for a single usage unit
pub fn format_price_per_unit(
    purchase_price: f64,
    purchase_unit: PurchaseUnit,
    display_unit: UsageUnit,
) -> String {
    BreakdownEntry {
        unit: display_unit,
        price_per_unit: price_per_unit(purchase_price, purchase_unit, display_unit),
    }
    .to_string()
}

impl InventoryItem {
    /// Breakdown of this item's derived unit price
    pub fn price_breakdown(&self) -> Vec<BreakdownEntry> {
        price_breakdown(self.unit_price(), self.purchase_unit)
    }
}
