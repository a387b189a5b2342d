//! Bundled recipe templates
//!
//! Starter recipes with industry-standard ratios, shipped as TOML and
//! linked to a host's inventory by name matching. A template becomes a
//! regular [`Recipe`] through [`RecipeTemplate::instantiate`].
//!
//! This module is only available with the `bundled_templates` feature.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::{
    convert::UsageUnit,
    model::{IngredientLine, InventoryItem, Recipe},
};

/// A starter recipe with ingredient ratios and inventory match terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeTemplate {
    /// Menu item name
    pub name: String,
    /// Menu category
    pub category: String,
    /// Suggested retail price
    pub retail_price: f64,
    pub ingredients: Vec<TemplateIngredient>,
}

/// One ingredient of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateIngredient {
    /// Name the ingredient is expected to have in inventory
    pub inventory_name: String,
    /// Amount consumed, in `usage_unit`
    pub quantity: f64,
    pub usage_unit: UsageUnit,
    /// Terms matched against inventory item names when auto-linking
    pub match_terms: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TemplatesFile {
    template: Vec<RecipeTemplate>,
}

/// How much of a template the current inventory can satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchInfo {
    /// Ingredients with a matching inventory item
    pub matched: usize,
    /// Total ingredients in the template
    pub total: usize,
}

impl MatchInfo {
    /// True when every ingredient matched
    pub fn is_complete(&self) -> bool {
        self.matched == self.total
    }
}

impl RecipeTemplate {
    /// The bundled coffee-shop catalog
    ///
    /// Parsed once from the TOML file shipped with the crate.
    pub fn bundled() -> &'static [RecipeTemplate] {
        static BUNDLED: OnceCell<Vec<RecipeTemplate>> = OnceCell::new();
        BUNDLED.get_or_init(|| {
            let file: TemplatesFile = toml::from_str(include_str!("../templates.toml"))
                .expect("invalid bundled templates file");
            file.template
        })
    }

    /// Count how many ingredients have a matching inventory item
    pub fn match_info(&self, items: &[InventoryItem]) -> MatchInfo {
        let matched = self
            .ingredients
            .iter()
            .filter(|i| i.find_match(items).is_some())
            .count();
        MatchInfo {
            matched,
            total: self.ingredients.len(),
        }
    }

    /// Build a [`Recipe`] linking matched ingredients to inventory
    ///
    /// Ingredients without a match are left out, so the resulting recipe
    /// may be partial; check [`match_info`](Self::match_info) first to
    /// warn about incomplete links.
    pub fn instantiate(&self, id: impl Into<String>, items: &[InventoryItem]) -> Recipe {
        let ingredients = self
            .ingredients
            .iter()
            .filter_map(|ing| {
                ing.find_match(items).map(|item| IngredientLine {
                    inventory_item_id: item.id.clone(),
                    quantity: ing.quantity,
                    usage_unit: ing.usage_unit,
                })
            })
            .collect();
        Recipe {
            id: id.into(),
            name: self.name.clone(),
            category: Some(self.category.clone()),
            retail_price: self.retail_price,
            ingredients,
            modifiers: Vec::new(),
        }
    }
}

impl TemplateIngredient {
    /// First inventory item whose name contains one of the match terms
    pub fn find_match<'a>(&self, items: &'a [InventoryItem]) -> Option<&'a InventoryItem> {
        items.iter().find(|item| self.matches(item))
    }

    /// Case-insensitive substring match against the item name
    pub fn matches(&self, item: &InventoryItem) -> bool {
        let name = item.name.to_lowercase();
        self.match_terms
            .iter()
            .any(|term| name.contains(&term.to_lowercase()))
    }
}

/// Template ingredient names whose match terms hit `inventory_name`
///
/// Reverse lookup for the import flow: a freshly scanned inventory item
/// gets a list of template ingredients it could link to.
pub fn match_inventory_to_templates<'a>(
    inventory_name: &str,
    templates: &'a [RecipeTemplate],
) -> Vec<&'a str> {
    let name = inventory_name.to_lowercase();
    let mut matches: Vec<&str> = Vec::new();
    for template in templates {
        for ing in &template.ingredients {
            if ing
                .match_terms
                .iter()
                .any(|term| name.contains(&term.to_lowercase()))
                && !matches.contains(&ing.inventory_name.as_str())
            {
                matches.push(&ing.inventory_name);
            }
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::PurchaseUnit;

    fn milk() -> InventoryItem {
        InventoryItem {
            id: "milk-1".into(),
            name: "Whole Milk".into(),
            purchase_unit: PurchaseUnit::Gallon,
            package_size: 1.0,
            package_price: 3.84,
        }
    }

    #[test]
    fn bundled_catalog_parses() {
        let templates = RecipeTemplate::bundled();
        assert_eq!(templates.len(), 14);
        assert!(templates.iter().any(|t| t.name == "Latte 12oz"));
        for t in templates {
            assert!(!t.ingredients.is_empty(), "{} has no ingredients", t.name);
        }
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let latte = &RecipeTemplate::bundled()[0];
        let milk_ing = latte
            .ingredients
            .iter()
            .find(|i| i.inventory_name == "Whole Milk")
            .unwrap();
        assert!(milk_ing.matches(&milk()));

        let unrelated = InventoryItem {
            name: "Cane Sugar".into(),
            ..milk()
        };
        assert!(!milk_ing.matches(&unrelated));
    }

    #[test]
    fn reverse_lookup_dedups() {
        let matches = match_inventory_to_templates("Organic Whole MILK", RecipeTemplate::bundled());
        assert_eq!(matches, vec!["Whole Milk"]);
    }
}
