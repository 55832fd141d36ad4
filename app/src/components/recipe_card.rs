use models::{minutes, Recipe};
use std::str::FromStr;
use yew::prelude::*;

/// Links open in a new browsing context without access to this page.
const LINK_TARGET: &str = "_blank";
const LINK_REL: &str = "noopener noreferrer";

/// Frame around the rendered recipe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardStyle {
    Plain,
    #[default]
    Boxed,
}

impl CardStyle {
    fn class(self) -> &'static str {
        match self {
            Self::Plain => "recipe",
            Self::Boxed => "recipe card",
        }
    }
}

impl FromStr for CardStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "boxed" => Ok(Self::Boxed),
            other => Err(format!("unknown card style {other:?}")),
        }
    }
}

/// Attributes of one rendered source link.
#[derive(Debug, PartialEq, Eq)]
struct SourceLink<'a> {
    href: &'a str,
    target: &'static str,
    rel: &'static str,
}

/// Links for the sources section, `None` when there is nothing to list.
fn source_links(recipe: &Recipe) -> Option<Vec<SourceLink<'_>>> {
    let sources = recipe.sources();

    if sources.is_empty() {
        return None;
    }

    Some(
        sources
            .iter()
            .map(|url| SourceLink {
                href: url,
                target: LINK_TARGET,
                rel: LINK_REL,
            })
            .collect(),
    )
}

/// Rows of a free text block, one per line break sent by the service.
fn rows(text: &str) -> Vec<&str> {
    text.lines().collect()
}

fn lines(text: &str) -> Html {
    rows(text)
        .into_iter()
        .map(|line| html! { <>{ line }<br/></> })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub recipe: Recipe,
    #[prop_or_default]
    pub style: CardStyle,
}

#[function_component(RecipeCard)]
pub fn recipe_card(Props { recipe, style }: &Props) -> Html {
    let sources = match source_links(recipe) {
        None => html! {},
        Some(links) => html! {
            <div class="sources">
                <strong>{ "Sources:" }</strong>
                <ul>
                    { for links.into_iter().map(|link| html! {
                        <li>
                            <a href={link.href.to_string()} target={link.target} rel={link.rel}>
                                { link.href }
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
        },
    };

    html! {
        <div class={style.class()}>
            <h3>{ &recipe.title }</h3>
            <p><strong>{ "Serving Size: " }</strong>{ recipe.serving_size.to_string() }</p>
            <p><strong>{ "Prep Time: " }</strong>{ minutes(recipe.prep_time) }</p>
            <p><strong>{ "Cook Time: " }</strong>{ minutes(recipe.cook_time) }</p>
            <p><strong>{ "Ingredients:" }</strong><br/>{ lines(&recipe.ingredients) }</p>
            <p><strong>{ "Instructions:" }</strong><br/>{ lines(&recipe.instructions) }</p>
            { sources }
        </div>
    }
}
