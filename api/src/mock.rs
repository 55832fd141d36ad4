//! Canned recipes standing in for the real generator.

use models::{Recipe, ServingSize};

/// Capitalize every word and collapse runs of whitespace.
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();

            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn slug(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Build a recipe for `name`. The same name always yields the same recipe.
pub fn recipe(name: &str) -> Recipe {
    let title = title_case(name);
    let words = title.split_whitespace().count() as u32;

    Recipe {
        serving_size: ServingSize::Count(2 + words % 3 * 2),
        prep_time: f64::from(5 * (1 + words % 4)),
        cook_time: f64::from(10 + 5 * words),
        ingredients: format!(
            "500 g {}\n2 tbsp olive oil\n1 onion, finely chopped\nSalt and pepper",
            name.trim().to_lowercase()
        ),
        instructions: [
            "1. Wash and prepare all ingredients.",
            "2. Heat the olive oil in a large pan over medium heat.",
            "3. Cook the onion until soft, about 5 minutes.",
            "4. Add the remaining ingredients and cook through on low heat.",
            "5. Season to taste and serve.",
        ]
        .join("\n"),
        url: Some(vec![format!("https://example.com/recipes/{}", slug(&title))]),
        title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_cleaned_up() {
        assert_eq!(title_case("  beef   WELLINGTON "), "Beef Wellington");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn recipe_is_deterministic() {
        assert_eq!(recipe("pancakes"), recipe("pancakes"));
    }

    #[test]
    fn recipe_has_one_source_and_multiline_text() {
        let recipe = recipe("banana bread");

        assert_eq!(recipe.title, "Banana Bread");
        assert_eq!(
            recipe.sources(),
            ["https://example.com/recipes/banana-bread".to_string()]
        );
        assert_eq!(recipe.instruction_lines().count(), 5);
        assert!(recipe.ingredients.starts_with("500 g banana bread\n"));
    }
}
