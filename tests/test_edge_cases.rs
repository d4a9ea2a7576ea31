use serde_json::json;
use tandoor_import::{extract_recipe, import_from_text, normalize, LinkedDataRecipe, Recipe};

fn wrap(json: &str) -> String {
    format!("```json\n{json}\n```")
}

#[test]
fn test_recipe_with_no_optional_fields() {
    let recipe = import_from_text(&wrap("{}")).unwrap();

    assert_eq!(recipe.name, "Unbenanntes Rezept");
    assert_eq!(recipe.servings, 4);
    assert_eq!(recipe.working_time, 0);
    assert_eq!(recipe.waiting_time, 0);
    assert!(recipe.keywords.is_empty());
    assert!(recipe.steps.is_none());

    let value = serde_json::to_value(&recipe).unwrap();
    assert!(value.get("steps").is_none());
}

#[test]
fn test_ingredients_only_single_step() {
    let lines: Vec<String> = (1..=7).map(|i| format!("{i} Stück Zutat{i}")).collect();
    let json = json!({ "recipeIngredient": lines }).to_string();

    let recipe = import_from_text(&wrap(&json)).unwrap();
    let steps = recipe.steps.unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].ingredients.len(), 7);
    assert_eq!(steps[0].instruction, "");
    assert!(steps[0].ingredients.iter().all(|i| i.unit == "Stück"));
}

#[test]
fn test_ingredient_count_is_preserved() {
    let json = json!({
        "recipeIngredient": ["", "7", "(nur) Deko", "1 EL", {"text": "Zitrone"}],
        "recipeInstructions": ["A", "B", "C", "D", "E", "F"]
    })
    .to_string();

    let recipe = import_from_text(&wrap(&json)).unwrap();
    assert_eq!(recipe.ingredient_count(), 5);
    let steps = recipe.steps.unwrap();
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[0].ingredients.len(), 5);

    let ingredients = &steps[0].ingredients;
    assert_eq!(ingredients[0].food_name, "");
    assert_eq!(ingredients[1].amount, 7.0);
    assert_eq!(ingredients[1].food_name, "7");
    assert_eq!(ingredients[2].note, "nur");
    assert_eq!(ingredients[3].unit, "EL");
    assert_eq!(ingredients[3].food_name, "1 EL");
}

#[test]
fn test_bad_durations_do_not_abort() {
    let json = json!({
        "name": "Eintopf",
        "prepTime": "PTviertelH20M",
        "cookTime": 90,
        "recipeYield": "reicht für viele"
    })
    .to_string();

    let recipe = import_from_text(&wrap(&json)).unwrap();
    assert_eq!(recipe.name, "Eintopf");
    assert_eq!(recipe.working_time, 20);
    assert_eq!(recipe.waiting_time, 0);
    assert_eq!(recipe.servings, 4);
}

#[test]
fn test_html_entities_are_decoded() {
    let json = json!({
        "name": "Mac &amp; Cheese",
        "keywords": "Pasta, K&auml;se",
        "recipeInstructions": "Nudeln &amp; K&auml;se mischen."
    })
    .to_string();

    let recipe = import_from_text(&wrap(&json)).unwrap();
    assert_eq!(recipe.name, "Mac & Cheese");
    assert_eq!(recipe.keywords[1].name, "Käse");
    assert_eq!(recipe.steps.unwrap()[0].instruction, "Nudeln & Käse mischen.");
}

#[test]
fn test_normalized_recipe_round_trips() {
    let source = json!({
        "name": "Linsensuppe",
        "recipeYield": 6,
        "keywords": "Suppe, vegan, Winter",
        "recipeIngredient": ["250 g Linsen"]
    });
    let first = normalize(&LinkedDataRecipe::try_from(source).unwrap());

    let serialized = serde_json::to_string_pretty(&first).unwrap();
    let again: Recipe = import_from_text(&wrap(&serialized)).unwrap();

    assert_eq!(again.name, first.name);
    assert_eq!(again.servings, first.servings);
    assert_eq!(again.keywords, first.keywords);
}

#[test]
fn test_only_first_block_is_used() {
    let text = format!(
        "Variante 1:\n{}\nVariante 2:\n{}",
        wrap(r#"{"name": "Erste"}"#),
        wrap(r#"{"name": "Zweite"}"#)
    );
    let recipe = extract_recipe(&text).unwrap();
    assert_eq!(recipe.name(), Some("Erste".to_string()));
}
