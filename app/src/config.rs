use crate::pages::ViewOptions;

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// App configuration, fixed at build time.
pub struct Config {
    /// Address of the recipe service. Taken from `COOKED_API_URL` when building, by default
    /// http://localhost:8000.
    pub api_url: String,
    /// Look of the recipe view, from `COOKED_SPINNER` (`text` or `ring`) and `COOKED_CARD`
    /// (`plain` or `boxed`).
    pub options: ViewOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            options: ViewOptions::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::from_values(
            option_env!("COOKED_API_URL"),
            option_env!("COOKED_SPINNER"),
            option_env!("COOKED_CARD"),
        )
    }

    /// Build from raw values, anything missing or unparsable falls back to the default.
    fn from_values(api_url: Option<&str>, spinner: Option<&str>, card: Option<&str>) -> Self {
        let defaults = Self::default();

        let api_url = match api_url.map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => defaults.api_url,
        };

        let spinner = spinner
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.options.spinner);

        let card = card
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.options.card);

        Self {
            api_url,
            options: ViewOptions { spinner, card },
        }
    }
}
