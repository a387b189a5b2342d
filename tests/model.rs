use std::collections::HashMap;

use foodcost::{
    IngredientAction, IngredientLine, Inventory, InventoryItem, Modifier, ModifierKind,
    PurchaseUnit, Recipe, UsageUnit,
};
use serde_json::json;

fn milk() -> InventoryItem {
    InventoryItem {
        id: "milk".into(),
        name: "Whole Milk".into(),
        purchase_unit: PurchaseUnit::Gallon,
        package_size: 1.0,
        package_price: 3.84,
    }
}

#[test]
fn line_construction_validates_the_unit_pairing() {
    let item = milk();
    let line = IngredientLine::new(&item, 10.0, UsageUnit::Oz).unwrap();
    assert_eq!(line.inventory_item_id, "milk");

    // a gallon cannot be consumed in grams
    let err = IngredientLine::new(&item, 10.0, UsageUnit::G).unwrap_err();
    assert_eq!(err.purchase, PurchaseUnit::Gallon);
    assert_eq!(err.usage, UsageUnit::G);
}

#[test]
fn unit_price_guards_zero_package_size() {
    let mut item = milk();
    item.package_size = 0.0;
    assert_eq!(item.unit_price(), 0.0);
}

#[test]
fn inventory_lookup_through_map_and_slice() {
    let items = vec![milk()];
    assert!(items.item("milk").is_some());
    assert!(items.item("beans").is_none());
    assert!(items.as_slice().item("milk").is_some());

    let map: HashMap<String, InventoryItem> =
        items.into_iter().map(|i| (i.id.clone(), i)).collect();
    assert!(map.item("milk").is_some());
    assert!(map.item("beans").is_none());
}

#[test]
fn units_serialize_as_lowercase_symbols() {
    assert_eq!(serde_json::to_value(PurchaseUnit::Gallon).unwrap(), json!("gallon"));
    assert_eq!(serde_json::to_value(PurchaseUnit::Lb).unwrap(), json!("lb"));
    assert_eq!(serde_json::to_value(UsageUnit::Ml).unwrap(), json!("ml"));

    let parsed: PurchaseUnit = serde_json::from_value(json!("case")).unwrap();
    assert_eq!(parsed, PurchaseUnit::Case);
    assert!(serde_json::from_value::<PurchaseUnit>(json!("liter")).is_err());
}

#[test]
fn ingredient_actions_tag_with_action() {
    let multiply = IngredientAction::Multiply { factor: 1.15 };
    assert_eq!(
        serde_json::to_value(&multiply).unwrap(),
        json!({"action": "multiply", "factor": 1.15})
    );

    let add: IngredientAction = serde_json::from_value(json!({
        "action": "add",
        "inventory_item_id": "milk",
        "quantity": 2.0,
        "usage_unit": "oz",
    }))
    .unwrap();
    assert_eq!(
        add,
        IngredientAction::Add {
            inventory_item_id: "milk".into(),
            quantity: 2.0,
            usage_unit: UsageUnit::Oz,
        }
    );
}

#[test]
fn recipe_round_trips_through_serde() {
    let recipe = Recipe {
        id: "latte-12".into(),
        name: "Latte 12oz".into(),
        category: Some("Espresso Drinks".into()),
        retail_price: 5.50,
        ingredients: vec![IngredientLine {
            inventory_item_id: "milk".into(),
            quantity: 10.0,
            usage_unit: UsageUnit::Oz,
        }],
        modifiers: vec![Modifier {
            name: "Large".into(),
            kind: ModifierKind::Size,
            price_adjustment: 1.0,
            actions: vec![IngredientAction::Multiply { factor: 1.15 }],
        }],
    };

    let value = serde_json::to_value(&recipe).unwrap();
    assert_eq!(value["modifiers"][0]["kind"], json!("size"));
    let back: Recipe = serde_json::from_value(value).unwrap();
    assert_eq!(back, recipe);
}

#[test]
fn optional_recipe_fields_default_when_absent() {
    let recipe: Recipe = serde_json::from_value(json!({
        "id": "espresso",
        "name": "Espresso Shot",
        "retail_price": 3.0,
        "ingredients": [],
    }))
    .unwrap();
    assert_eq!(recipe.category, None);
    assert!(recipe.modifiers.is_empty());
}
