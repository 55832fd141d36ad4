use models::{minutes, Recipe, RecipeRequest, RecipeResponse, ServingSize};
use serde_json::json;

#[test]
fn request_body_is_a_single_recipe_field() {
    let body = serde_json::to_value(RecipeRequest::new("pancakes")).unwrap();

    assert_eq!(body, json!({ "recipe": "pancakes" }));
}

#[test]
fn pancakes_response_decodes() {
    let raw = r#"{"result":{"title":"Pancakes","serving_size":"4","prep_time":10,"cook_time":15,"ingredients":"Flour\nEggs\nMilk","instructions":"Mix.\nCook.","url":["https://example.com/pancakes"]}}"#;

    let response: RecipeResponse = serde_json::from_str(raw).unwrap();
    let recipe = response.result;

    assert_eq!(recipe.title, "Pancakes");
    assert_eq!(recipe.serving_size, ServingSize::Text("4".to_string()));
    assert_eq!(minutes(recipe.prep_time), "10 min");
    assert_eq!(minutes(recipe.cook_time), "15 min");
    assert_eq!(
        recipe.ingredient_lines().collect::<Vec<_>>(),
        vec!["Flour", "Eggs", "Milk"]
    );
    assert_eq!(recipe.instruction_lines().count(), 2);
    assert_eq!(
        recipe.sources(),
        ["https://example.com/pancakes".to_string()]
    );
}

#[test]
fn numeric_serving_size_is_shown_as_is() {
    let recipe: Recipe = serde_json::from_value(json!({
        "title": "Toast",
        "serving_size": 2,
        "prep_time": 1,
        "cook_time": 3,
        "ingredients": "Bread",
        "instructions": "Toast it.",
        "url": []
    }))
    .unwrap();

    assert_eq!(recipe.serving_size, ServingSize::Count(2));
    assert_eq!(recipe.serving_size.to_string(), "2");
    assert!(recipe.sources().is_empty());
}

#[test]
fn missing_or_null_sources_mean_none() {
    let base = json!({
        "title": "Soup",
        "serving_size": "a crowd",
        "prep_time": 5,
        "cook_time": 40,
        "ingredients": "Water",
        "instructions": "Boil."
    });

    let missing: Recipe = serde_json::from_value(base.clone()).unwrap();
    assert!(missing.sources().is_empty());

    let mut with_null = base;
    with_null["url"] = serde_json::Value::Null;
    let null: Recipe = serde_json::from_value(with_null).unwrap();
    assert!(null.sources().is_empty());
    assert_eq!(null.serving_size.to_string(), "a crowd");
}

#[test]
fn source_order_is_kept() {
    let recipe = Recipe {
        url: Some(vec![
            "https://b.example.com".to_string(),
            "https://a.example.com".to_string(),
        ]),
        ..Recipe::default()
    };

    assert_eq!(
        recipe.sources(),
        [
            "https://b.example.com".to_string(),
            "https://a.example.com".to_string()
        ]
    );
}

fn decode_with(serving_size: serde_json::Value, prep_time: serde_json::Value) -> Recipe {
    let raw = json!({
        "result": {
            "title": "Flatbread",
            "serving_size": serving_size,
            "prep_time": prep_time,
            "cook_time": 12,
            "ingredients": "Flour\nWater",
            "instructions": "Knead.\nBake.",
            "url": []
        }
    })
    .to_string();

    serde_json::from_str::<RecipeResponse>(&raw).unwrap().result
}

#[test]
fn fractional_serving_size_decodes() {
    let recipe = decode_with(json!(2.5), json!(10));

    assert_eq!(recipe.serving_size, ServingSize::Amount(2.5));
    assert_eq!(recipe.serving_size.to_string(), "2.5");
}

#[test]
fn integer_serving_size_stays_a_count() {
    let recipe = decode_with(json!(4), json!(10));

    assert_eq!(recipe.serving_size, ServingSize::Count(4));
}

#[test]
fn fractional_prep_time_decodes() {
    let recipe = decode_with(json!("4"), json!(7.5));

    assert_eq!(minutes(recipe.prep_time), "7.5 min");
}

#[test]
fn float_formatted_whole_minutes_print_without_decimals() {
    let raw = r#"{"result":{"title":"Flatbread","serving_size":4.0,"prep_time":10.0,"cook_time":12,"ingredients":"","instructions":"","url":[]}}"#;

    let recipe = serde_json::from_str::<RecipeResponse>(raw).unwrap().result;

    assert_eq!(minutes(recipe.prep_time), "10 min");
    assert_eq!(minutes(recipe.cook_time), "12 min");
    assert_eq!(recipe.serving_size.to_string(), "4");
}
