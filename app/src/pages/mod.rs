mod recipe;

pub use recipe::{RecipeView, ViewOptions};
