//! Conversion between purchase and usage units
//!
//! Inventory is bought in a [`PurchaseUnit`] (a gallon of milk, a pound of
//! beans) and recipes consume it in a [`UsageUnit`] (ounces, milliliters,
//! grams). A fixed compatibility table says which usage units are valid
//! for each purchase unit and provides the conversion factors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// The only numeric ground truths. Every derived conversion is a product
// or quotient of these.
const GALLON_TO_OZ: f64 = 128.0;
const GALLON_TO_ML: f64 = 3785.0;
const OZ_TO_ML: f64 = 29.5735;
const LB_TO_OZ: f64 = 16.0;
const LB_TO_G: f64 = 453.0;
const OZ_TO_G: f64 = 28.35;

/// The unit an inventory item is bought in
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PurchaseUnit {
    Gallon,
    Lb,
    Oz,
    Each,
    Case,
    Bag,
    Box,
    Pack,
}

/// The unit a recipe consumes an ingredient in
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UsageUnit {
    Oz,
    Ml,
    G,
    Each,
}

impl PurchaseUnit {
    /// Human label used in tables and pickers
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseUnit::Gallon => "Gallon",
            PurchaseUnit::Lb => "LB",
            PurchaseUnit::Oz => "OZ",
            PurchaseUnit::Each => "Each",
            PurchaseUnit::Case => "Case",
            PurchaseUnit::Bag => "Bag",
            PurchaseUnit::Box => "Box",
            PurchaseUnit::Pack => "Pack",
        }
    }

    /// Usage units this purchase unit may be consumed in
    ///
    /// Never empty. The first entry is the default display unit.
    ///
    /// ```
    /// # use foodcost::convert::{PurchaseUnit, UsageUnit};
    /// assert_eq!(
    ///     PurchaseUnit::Gallon.compatible_units(),
    ///     &[UsageUnit::Oz, UsageUnit::Ml]
    /// );
    /// ```
    pub fn compatible_units(&self) -> &'static [UsageUnit] {
        match self {
            PurchaseUnit::Gallon => &[UsageUnit::Oz, UsageUnit::Ml],
            PurchaseUnit::Lb => &[UsageUnit::Oz, UsageUnit::G],
            // oz participates in both volume and weight contexts
            PurchaseUnit::Oz => &[UsageUnit::Oz, UsageUnit::Ml, UsageUnit::G],
            PurchaseUnit::Each
            | PurchaseUnit::Case
            | PurchaseUnit::Bag
            | PurchaseUnit::Box
            | PurchaseUnit::Pack => &[UsageUnit::Each],
        }
    }

    /// Default (smallest display) usage unit
    pub fn default_usage_unit(&self) -> UsageUnit {
        self.compatible_units()[0]
    }

    /// Check if `usage` is in the compatible list
    pub fn is_compatible(&self, usage: UsageUnit) -> bool {
        self.compatible_units().contains(&usage)
    }
}

/// Error for a usage unit outside a purchase unit's compatible list
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("'{usage}' is not a valid usage unit for items bought per '{purchase}'")]
pub struct IncompatibleUnits {
    pub purchase: PurchaseUnit,
    pub usage: UsageUnit,
}

/// Convert a quantity from a purchase unit to a usage unit
///
/// Pairs outside the compatibility table return the quantity unchanged,
/// including the discrete units (`each`, `case`, ...) for which no numeric
/// conversion exists. Use [`try_convert`] to reject such pairs instead.
pub fn convert(quantity: f64, from: PurchaseUnit, to: UsageUnit) -> f64 {
    match (from, to) {
        (PurchaseUnit::Oz, UsageUnit::Oz) => quantity,
        (PurchaseUnit::Gallon, UsageUnit::Oz) => quantity * GALLON_TO_OZ,
        (PurchaseUnit::Gallon, UsageUnit::Ml) => quantity * GALLON_TO_ML,
        (PurchaseUnit::Lb, UsageUnit::Oz) => quantity * LB_TO_OZ,
        (PurchaseUnit::Lb, UsageUnit::G) => quantity * LB_TO_G,
        (PurchaseUnit::Oz, UsageUnit::Ml) => quantity * OZ_TO_ML,
        (PurchaseUnit::Oz, UsageUnit::G) => quantity * OZ_TO_G,
        // discrete units and unmapped pairs pass through unchanged
        _ => quantity,
    }
}

/// Strict [`convert`]: unit pairs outside the compatibility table error
///
/// ```
/// # use foodcost::convert::{try_convert, PurchaseUnit, UsageUnit};
/// assert!(try_convert(1.0, PurchaseUnit::Case, UsageUnit::Oz).is_err());
/// ```
pub fn try_convert(
    quantity: f64,
    from: PurchaseUnit,
    to: UsageUnit,
) -> Result<f64, IncompatibleUnits> {
    if !from.is_compatible(to) {
        return Err(IncompatibleUnits {
            purchase: from,
            usage: to,
        });
    }
    Ok(convert(quantity, from, to))
}

/// Price of one `usage_unit` given the price of one `purchase_unit`
///
/// Returns 0 when the conversion factor is 0, never NaN or infinity.
///
/// ```
/// # use foodcost::convert::{price_per_unit, PurchaseUnit, UsageUnit};
/// // $3.84/gallon of milk
/// let per_oz = price_per_unit(3.84, PurchaseUnit::Gallon, UsageUnit::Oz);
/// assert!((per_oz - 0.03).abs() < 1e-9);
/// ```
pub fn price_per_unit(
    purchase_price: f64,
    purchase_unit: PurchaseUnit,
    usage_unit: UsageUnit,
) -> f64 {
    let units_per_purchase = convert(1.0, purchase_unit, usage_unit);
    if units_per_purchase == 0.0 {
        return 0.0;
    }
    purchase_price / units_per_purchase
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn compatible_units_total_and_non_empty() {
        for unit in PurchaseUnit::iter() {
            let compatible = unit.compatible_units();
            assert!(!compatible.is_empty());
            assert_eq!(unit.default_usage_unit(), compatible[0]);
        }
    }

    #[test]
    fn symbols_round_trip() {
        for unit in PurchaseUnit::iter() {
            let parsed: PurchaseUnit = unit.to_string().parse().unwrap();
            assert_eq!(parsed, unit);
        }
        for unit in UsageUnit::iter() {
            let parsed: UsageUnit = unit.to_string().parse().unwrap();
            assert_eq!(parsed, unit);
        }
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(PurchaseUnit::Gallon.label(), "Gallon");
        assert_eq!(PurchaseUnit::Lb.label(), "LB");
        assert_eq!(PurchaseUnit::Oz.to_string(), "oz");
        assert_eq!(UsageUnit::Ml.to_string(), "ml");
    }
}
