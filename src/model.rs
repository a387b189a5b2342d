//! Inventory and recipe model
//!
//! Plain value types consumed by the costing functions. The crate never
//! owns persistence: hosts load these from whatever storage they use and
//! resolve references through the [`Inventory`] trait.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::convert::{IncompatibleUnits, PurchaseUnit, UsageUnit};

/// An item bought for stock, priced per package
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    /// Identifier the host uses to reference this item
    pub id: String,
    /// Name, unique per owner
    pub name: String,
    /// Unit the item is bought in
    pub purchase_unit: PurchaseUnit,
    /// Number of purchase units in one package
    pub package_size: f64,
    /// Price paid for one package
    pub package_price: f64,
}

impl InventoryItem {
    /// Price of a single purchase unit
    ///
    /// `package_price / package_size`, or 0 when the package size is 0.
    ///
    /// ```
    /// # use foodcost::{InventoryItem, PurchaseUnit};
    /// let beans = InventoryItem {
    ///     id: "beans".into(),
    ///     name: "Espresso Beans".into(),
    ///     purchase_unit: PurchaseUnit::Lb,
    ///     package_size: 3.0,
    ///     package_price: 45.0,
    /// };
    /// assert_eq!(beans.unit_price(), 15.0);
    /// ```
    pub fn unit_price(&self) -> f64 {
        if self.package_size == 0.0 {
            return 0.0;
        }
        self.package_price / self.package_size
    }
}

/// One ingredient of a recipe: a quantity of an inventory item
///
/// The inventory item is referenced by id, never owned. A line whose
/// reference no longer resolves contributes zero cost, see
/// [`cost_recipe`](crate::cost::cost_recipe).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientLine {
    /// Id of the referenced [`InventoryItem`]
    pub inventory_item_id: String,
    /// Amount consumed, in `usage_unit`
    pub quantity: f64,
    /// Unit the quantity is expressed in
    ///
    /// Must be in the compatible list of the referenced item's purchase
    /// unit. [`IngredientLine::new`] enforces this.
    pub usage_unit: UsageUnit,
}

impl IngredientLine {
    /// Creates a line for `item`, validating the unit pairing
    pub fn new(
        item: &InventoryItem,
        quantity: f64,
        usage_unit: UsageUnit,
    ) -> Result<Self, IncompatibleUnits> {
        if !item.purchase_unit.is_compatible(usage_unit) {
            return Err(IncompatibleUnits {
                purchase: item.purchase_unit,
                usage: usage_unit,
            });
        }
        Ok(Self {
            inventory_item_id: item.id.clone(),
            quantity,
            usage_unit,
        })
    }
}

/// A sellable menu item built from ingredient lines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    /// Menu category, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Price the item sells for
    pub retail_price: f64,
    pub ingredients: Vec<IngredientLine>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
}

/// A named cost/price delta attached to a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Modifier {
    pub name: String,
    pub kind: ModifierKind,
    /// Signed adjustment to the retail price when applied
    pub price_adjustment: f64,
    #[serde(default)]
    pub actions: Vec<IngredientAction>,
}

/// What a modifier does to the base recipe
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
pub enum ModifierKind {
    /// Extra ingredients layered on top of the base
    Add,
    /// One base ingredient swapped for another
    Replace,
    /// Base ingredient quantities scaled by a factor ("small", "large")
    Size,
}

/// A single ingredient change inside a [`Modifier`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum IngredientAction {
    /// Consume an extra quantity of an item
    Add {
        inventory_item_id: String,
        quantity: f64,
        usage_unit: UsageUnit,
    },
    /// Consume this instead of a base line
    Replace {
        inventory_item_id: String,
        quantity: f64,
        usage_unit: UsageUnit,
    },
    /// Scale the total base ingredient cost
    ///
    /// The factor applies to the whole base cost, not per ingredient:
    /// a factor of 1.15 contributes 15% of the base cost on top.
    Multiply { factor: f64 },
}

/// Resolves ingredient references to inventory items
///
/// Injected by the host. The costing functions only ever read through
/// this trait, never from ambient state.
pub trait Inventory {
    /// Look up an item by id
    fn item(&self, id: &str) -> Option<&InventoryItem>;
}

impl Inventory for HashMap<String, InventoryItem> {
    fn item(&self, id: &str) -> Option<&InventoryItem> {
        self.get(id)
    }
}

impl Inventory for [InventoryItem] {
    fn item(&self, id: &str) -> Option<&InventoryItem> {
        self.iter().find(|i| i.id == id)
    }
}

impl Inventory for Vec<InventoryItem> {
    fn item(&self, id: &str) -> Option<&InventoryItem> {
        self.as_slice().item(id)
    }
}
