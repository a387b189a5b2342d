//! Ingredient costing, recipe aggregation and profitability
//!
//! Everything here is a pure function over an immutable snapshot of the
//! model types. Costs are computed at full `f64` precision; rounding
//! happens only at display boundaries (see [`breakdown`](crate::breakdown)).

use serde::{Deserialize, Serialize};

use crate::{
    convert::{price_per_unit, PurchaseUnit, UsageUnit},
    model::{IngredientAction, IngredientLine, Inventory, Modifier, Recipe},
};

// Food-cost percentage limits of the classification bands
const HEALTHY_MAX: f64 = 30.0;
const BORDERLINE_MAX: f64 = 35.0;

/// Cost of consuming `quantity` in `usage_unit` of an item priced
/// `purchase_price` per `purchase_unit`
///
/// ```
/// # use foodcost::{ingredient_cost, PurchaseUnit, UsageUnit};
/// // 10 oz of milk from a $3.84 gallon
/// let cost = ingredient_cost(10.0, UsageUnit::Oz, 3.84, PurchaseUnit::Gallon);
/// assert!((cost - 0.30).abs() < 1e-9);
/// ```
pub fn ingredient_cost(
    quantity: f64,
    usage_unit: UsageUnit,
    purchase_price: f64,
    purchase_unit: PurchaseUnit,
) -> f64 {
    quantity * price_per_unit(purchase_price, purchase_unit, usage_unit)
}

/// Cost of a single recipe line
///
/// `None` when the line's inventory reference does not resolve. That is
/// a recoverable condition, not an error: the caller decides whether to
/// skip the line or warn.
pub fn line_cost<I>(line: &IngredientLine, inventory: &I) -> Option<f64>
where
    I: Inventory + ?Sized,
{
    let item = inventory.item(&line.inventory_item_id)?;
    Some(ingredient_cost(
        line.quantity,
        line.usage_unit,
        item.unit_price(),
        item.purchase_unit,
    ))
}

/// Sum of the resolvable ingredient lines
///
/// Lines with a broken reference contribute nothing. Use [`cost_recipe`]
/// to also learn which ones they were.
pub fn recipe_cost<I>(lines: &[IngredientLine], inventory: &I) -> f64
where
    I: Inventory + ?Sized,
{
    lines.iter().filter_map(|l| line_cost(l, inventory)).sum()
}

/// Recipe cost together with the references that did not resolve
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipeCost {
    /// Sum of all resolvable lines
    pub total: f64,
    /// Ids of lines whose inventory item is missing
    pub unresolved: Vec<String>,
}

impl RecipeCost {
    /// True when every line resolved
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Cost a recipe's ingredient lines, reporting broken references
///
/// A missing inventory item never fails the whole recipe: the line is
/// skipped and its id reported, so the caller can surface a partial,
/// understated cost with a warning.
#[tracing::instrument(level = "trace", skip_all, fields(lines = lines.len()))]
pub fn cost_recipe<I>(lines: &[IngredientLine], inventory: &I) -> RecipeCost
where
    I: Inventory + ?Sized,
{
    let mut cost = RecipeCost::default();
    for line in lines {
        match line_cost(line, inventory) {
            Some(c) => cost.total += c,
            None => {
                tracing::warn!(
                    "unresolved inventory reference: {}",
                    line.inventory_item_id
                );
                cost.unresolved.push(line.inventory_item_id.clone());
            }
        }
    }
    cost
}

/// Cost delta a modifier adds on top of the base recipe
///
/// Add and replace actions cost like regular ingredient lines, skipping
/// unresolved references. A multiply action scales the *total* base
/// cost: a 1.15 factor contributes `base cost * 0.15`.
pub fn modifier_cost<I>(
    modifier: &Modifier,
    base_lines: &[IngredientLine],
    inventory: &I,
) -> f64
where
    I: Inventory + ?Sized,
{
    let mut total = 0.0;
    for action in &modifier.actions {
        match action {
            IngredientAction::Add {
                inventory_item_id,
                quantity,
                usage_unit,
            }
            | IngredientAction::Replace {
                inventory_item_id,
                quantity,
                usage_unit,
            } => {
                if let Some(item) = inventory.item(inventory_item_id) {
                    total += ingredient_cost(
                        *quantity,
                        *usage_unit,
                        item.unit_price(),
                        item.purchase_unit,
                    );
                } else {
                    tracing::warn!("unresolved inventory reference: {inventory_item_id}");
                }
            }
            IngredientAction::Multiply { factor } => {
                total += recipe_cost(base_lines, inventory) * (factor - 1.0);
            }
        }
    }
    total
}

/// Classification of a food-cost percentage
///
/// The limits drive UI coloring and are part of the contract: at most
/// 30% is healthy, at most 35% borderline, anything above is high.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CostBand {
    Healthy,
    Borderline,
    High,
}

impl CostBand {
    /// Band for a food-cost percentage
    pub fn from_food_cost_percent(percent: f64) -> Self {
        if percent <= HEALTHY_MAX {
            CostBand::Healthy
        } else if percent <= BORDERLINE_MAX {
            CostBand::Borderline
        } else {
            CostBand::High
        }
    }
}

/// Profitability of a recipe at a retail price
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Profitability {
    /// Ingredient cost
    pub cost: f64,
    /// `retail price - cost`
    pub profit: f64,
    /// Cost as a percentage of the retail price, 0 when unpriced
    pub food_cost_percent: f64,
    /// Profit as a percentage of the retail price, 0 when unpriced
    pub margin_percent: f64,
    /// Classification of `food_cost_percent`
    pub band: CostBand,
}

/// Derive profit and the food-cost band from a retail price and cost
///
/// A retail price of 0 yields 0 percentages rather than NaN.
///
/// ```
/// # use foodcost::{profitability, CostBand};
/// let p = profitability(5.50, 1.50);
/// assert_eq!(p.profit, 4.0);
/// assert_eq!(p.band, CostBand::Healthy);
/// ```
pub fn profitability(retail_price: f64, cost: f64) -> Profitability {
    let profit = retail_price - cost;
    let (food_cost_percent, margin_percent) = if retail_price > 0.0 {
        ((cost / retail_price) * 100.0, (profit / retail_price) * 100.0)
    } else {
        (0.0, 0.0)
    };
    Profitability {
        cost,
        profit,
        food_cost_percent,
        margin_percent,
        band: CostBand::from_food_cost_percent(food_cost_percent),
    }
}

/// [`profitability`] of a recipe from its own lines and retail price
pub fn recipe_profitability<I>(recipe: &Recipe, inventory: &I) -> Profitability
where
    I: Inventory + ?Sized,
{
    profitability(
        recipe.retail_price,
        recipe_cost(&recipe.ingredients, inventory),
    )
}
