//! Client for the recipe service.

use gloo_net::http::Request;
use models::{Recipe, RecipeRequest, RecipeResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Anything that made a request fail. The view treats them all the same and only logs them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("Service answered with status {0}")]
    Status(u16),
}

pub type Result<T> = std::result::Result<T, Error>;

/// HTTP client bound to the base URL of the recipe service.
#[derive(Clone, Debug, PartialEq)]
pub struct Client {
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// POST `body` as JSON to `path` and decode the JSON answer.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = Request::post(&self.url(path)).json(body)?.send().await?;

        if !response.ok() {
            return Err(Error::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Ask the service to come up with a recipe called `name`.
    pub async fn create_recipe(&self, name: String) -> Result<Recipe> {
        let response: RecipeResponse = self.post("/", &RecipeRequest::new(name)).await?;
        Ok(response.result)
    }
}
