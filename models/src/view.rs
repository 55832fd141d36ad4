//! State behind the recipe view.
//!
//! Every submission gets a [`RequestId`]. Only the outcome of the most recently issued request is
//! applied, anything older that resolves later is dropped, so a slow early request can never
//! overwrite the answer to a newer one.

use crate::Recipe;

/// Identifies one request issued by [`RecipeView::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl From<RequestId> for u64 {
    fn from(id: RequestId) -> Self {
        id.0
    }
}

/// What the view currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RecipeState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Waiting for the latest request, `last` stays on screen meanwhile.
    Loading { last: Option<Recipe> },
    Loaded(Recipe),
    /// The latest request failed, the previous recipe (if any) is kept.
    Failed { last: Option<Recipe> },
}

impl RecipeState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Recipe to render, if there is one.
    pub fn current(&self) -> Option<&Recipe> {
        match self {
            Self::Idle => None,
            Self::Loaded(recipe) => Some(recipe),
            Self::Loading { last } | Self::Failed { last } => last.as_ref(),
        }
    }

    fn into_current(self) -> Option<Recipe> {
        match self {
            Self::Idle => None,
            Self::Loaded(recipe) => Some(recipe),
            Self::Loading { last } | Self::Failed { last } => last,
        }
    }
}

/// Whether [`RecipeView::resolve`] changed anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request was issued in the meantime, or this one was already resolved.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeView {
    state: RecipeState,
    latest: u64,
}

impl RecipeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RecipeState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn current(&self) -> Option<&Recipe> {
        self.state.current()
    }

    /// Start a new request and switch to loading.
    pub fn begin(&mut self) -> RequestId {
        self.latest += 1;
        let last = std::mem::take(&mut self.state).into_current();
        self.state = RecipeState::Loading { last };
        RequestId(self.latest)
    }

    /// Apply the outcome of request `id`.
    pub fn resolve<E>(&mut self, id: RequestId, outcome: Result<Recipe, E>) -> Resolution {
        if id.0 != self.latest || !self.is_loading() {
            return Resolution::Stale;
        }

        let last = std::mem::take(&mut self.state).into_current();

        self.state = match outcome {
            Ok(recipe) => RecipeState::Loaded(recipe),
            Err(_) => RecipeState::Failed { last },
        };

        Resolution::Applied
    }
}
