//! Unit conversion and recipe costing for food-service inventory.
//!
//! Inventory is bought in coarse [`PurchaseUnit`]s (gallons, pounds,
//! cases) and consumed by recipes in fine [`UsageUnit`]s (ounces,
//! milliliters, grams). This crate computes what that consumption costs:
//!
//! - [`convert`](convert::convert) quantities between purchase and usage
//!   units using a fixed compatibility table.
//! - [`ingredient_cost`] prices a usage-unit quantity from package pricing.
//! - [`cost_recipe`] aggregates a recipe, tolerating broken inventory
//!   references.
//! - [`modifier_cost`] prices add/replace/size deltas on top of a base
//!   recipe.
//! - [`profitability`] derives profit and the food-cost percentage band.
//! - [`price_breakdown`] produces the per-unit price table for display.
//!
//! Everything is a synchronous pure function over plain value types; the
//! host owns persistence and I/O and resolves ingredient references
//! through the [`Inventory`] trait.
//!
//! # Basic usage
//!
//! ```rust
//! use foodcost::{
//!     cost_recipe, profitability, CostBand, IngredientLine, InventoryItem, PurchaseUnit,
//!     UsageUnit,
//! };
//!
//! // A gallon of milk for $3.84 and 3 lb of beans for $45.00
//! let inventory = vec![
//!     InventoryItem {
//!         id: "milk".into(),
//!         name: "Whole Milk".into(),
//!         purchase_unit: PurchaseUnit::Gallon,
//!         package_size: 1.0,
//!         package_price: 3.84,
//!     },
//!     InventoryItem {
//!         id: "beans".into(),
//!         name: "Espresso Beans".into(),
//!         purchase_unit: PurchaseUnit::Lb,
//!         package_size: 3.0,
//!         package_price: 45.0,
//!     },
//! ];
//!
//! // A latte: 2 oz espresso, 10 oz milk
//! let lines = vec![
//!     IngredientLine::new(&inventory[1], 2.0, UsageUnit::Oz)?,
//!     IngredientLine::new(&inventory[0], 10.0, UsageUnit::Oz)?,
//! ];
//!
//! let cost = cost_recipe(&lines, &inventory);
//! assert!(cost.is_complete());
//! assert!((cost.total - 2.175).abs() < 1e-9);
//!
//! let p = profitability(5.50, cost.total);
//! assert_eq!(p.band, CostBand::High);
//! # Ok::<(), foodcost::IncompatibleUnits>(())
//! ```
//!
//! With the `bundled_templates` feature (enabled by default) the
//! [`templates`] module ships a starter recipe catalog that can be linked
//! to an existing inventory by name matching.

#![warn(rustdoc::broken_intra_doc_links, clippy::doc_markdown)]

pub mod breakdown;
pub mod convert;
pub mod cost;
pub mod model;
#[cfg(feature = "bundled_templates")]
pub mod templates;

pub use breakdown::{format_price_per_unit, price_breakdown, BreakdownEntry};
pub use convert::{price_per_unit, try_convert, IncompatibleUnits, PurchaseUnit, UsageUnit};
pub use cost::{
    cost_recipe, ingredient_cost, line_cost, modifier_cost, profitability, recipe_cost,
    recipe_profitability, CostBand, Profitability, RecipeCost,
};
pub use model::{
    IngredientAction, IngredientLine, Inventory, InventoryItem, Modifier, ModifierKind, Recipe,
};
