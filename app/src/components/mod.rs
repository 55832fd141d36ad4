mod create_recipe_form;
mod navbar;
mod recipe_card;
mod spinner;
mod text_input;

pub use create_recipe_form::CreateRecipeForm;
pub use navbar::Navbar;
pub use recipe_card::{CardStyle, RecipeCard};
pub use spinner::{Spinner, SpinnerVariant};
pub use text_input::TextInput;
