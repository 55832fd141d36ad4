use crate::components::TextInput;
use models::draft::Draft;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Receives the recipe name once the form is submitted with something in it.
    pub on_create: Callback<String>,
}

#[function_component(CreateRecipeForm)]
pub fn create_recipe_form(Props { on_create }: &Props) -> Html {
    let draft = use_state(Draft::new);

    let on_change = {
        let draft = draft.clone();

        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            next.set(value);
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let on_create = on_create.clone();

        Callback::from(move |e: FocusEvent| {
            e.prevent_default();

            let mut next = (*draft).clone();

            if let Some(name) = next.submit() {
                on_create.emit(name);
                draft.set(next);
            }
        })
    };

    html! {
        <form class="create-recipe" onsubmit={onsubmit}>
            <TextInput
                value={draft.text().to_string()}
                placeholder="Enter recipe name"
                on_change={on_change}
            />
            <button class="button" type="submit">{ "Create" }</button>
        </form>
    }
}
