use crate::api;
use crate::components::{CardStyle, CreateRecipeForm, RecipeCard, Spinner, SpinnerVariant};
use models::view::{self, RequestId, Resolution};
use models::Recipe;
use yew::prelude::*;

/// Presentation knobs of [`RecipeView`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub spinner: SpinnerVariant,
    pub card: CardStyle,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub client: api::Client,
    #[prop_or_default]
    pub options: ViewOptions,
}

pub enum Message {
    Create(String),
    Resolved(RequestId, api::Result<Recipe>),
}

pub struct RecipeView {
    view: view::RecipeView,
}

/// Apply the outcome of request `id`. The failure is only handed back for reporting when it was
/// the latest request, answers to superseded requests are dropped silently.
fn settle<E: ToString>(
    view: &mut view::RecipeView,
    id: RequestId,
    outcome: Result<Recipe, E>,
) -> (Resolution, Option<String>) {
    let failure = outcome.as_ref().err().map(ToString::to_string);

    match view.resolve(id, outcome) {
        Resolution::Applied => (Resolution::Applied, failure),
        Resolution::Stale => (Resolution::Stale, None),
    }
}

impl Component for RecipeView {
    type Message = Message;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            view: view::RecipeView::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Create(name) => {
                let id = self.view.begin();
                let client = ctx.props().client.clone();

                log::debug!("Requesting recipe {:?} ({})", name, u64::from(id));

                ctx.link().send_future(async move {
                    Message::Resolved(id, client.create_recipe(name).await)
                });

                true
            }
            Message::Resolved(id, outcome) => match settle(&mut self.view, id, outcome) {
                (Resolution::Applied, failure) => {
                    if let Some(err) = failure {
                        log::error!("Error getting recipe: {}", err);
                    }
                    true
                }
                (Resolution::Stale, _) => {
                    log::debug!("Dropping answer to superseded request {}", u64::from(id));
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let options = ctx.props().options;
        let on_create = ctx.link().callback(Message::Create);

        let spinner = if self.view.is_loading() {
            html! { <Spinner variant={options.spinner}/> }
        } else {
            html! {}
        };

        let card = match self.view.current() {
            Some(recipe) => html! { <RecipeCard recipe={recipe.clone()} style={options.card}/> },
            None => html! {},
        };

        html! {
            <div class="recipe-view">
                <h2>{ "Create a recipe!" }</h2>
                <CreateRecipeForm on_create={on_create}/>
                { spinner }
                { card }
            </div>
        }
    }
}
