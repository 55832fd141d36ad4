use crate::{mock, AppError, Result};
use axum::extract::State as AxumState;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, instrument, warn};

/// Internal server state.
#[derive(Clone, Debug)]
pub struct State {
    /// Artificial latency added to every generated recipe.
    delay: Duration,
}

impl State {
    /// Create a new `State` object.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::EmptyRecipeName => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, format!("Error: {}", self)).into_response()
    }
}

#[instrument]
async fn greet() -> Json<models::Greeting> {
    Json(models::Greeting {
        message: "Hello".to_string(),
    })
}

#[instrument(skip(state))]
async fn create_recipe(
    AxumState(state): AxumState<State>,
    Json(payload): Json<models::RecipeRequest>,
) -> Result<Json<models::RecipeResponse>> {
    if payload.recipe.trim().is_empty() {
        warn!("Rejecting empty recipe name");
        return Err(AppError::EmptyRecipeName);
    }

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    debug!("Generating {:?}", payload.recipe);

    Ok(Json(models::RecipeResponse {
        result: mock::recipe(&payload.recipe),
    }))
}

fn cors(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(vec![Method::GET, Method::POST])
        .allow_headers(vec![CONTENT_TYPE]))
}

/// Build the router serving `/`.
pub fn router(state: State, origins: &[String]) -> Result<Router> {
    let app = Router::new()
        .route("/", get(greet).post(create_recipe))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors(origins)?),
        )
        .with_state(state);

    Ok(app)
}

/// Start the web server.
#[instrument(skip(app))]
pub async fn run(app: Router, address: std::net::SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
