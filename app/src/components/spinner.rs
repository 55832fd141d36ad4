use std::str::FromStr;
use yew::{classes, function_component, html, Html, Properties};

/// How the loading indicator looks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerVariant {
    /// A line of text.
    Text,
    /// An animated ring.
    #[default]
    Ring,
}

impl FromStr for SpinnerVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "ring" => Ok(Self::Ring),
            other => Err(format!("unknown spinner variant {other:?}")),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub variant: SpinnerVariant,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    match props.variant {
        SpinnerVariant::Text => html! {
            <p class={classes!("loading")} role="status">{ "Cooking up your recipe..." }</p>
        },
        SpinnerVariant::Ring => html! {
            <div class={classes!("loading", "spinner")} role="status" aria-label="Loading"></div>
        },
    }
}
