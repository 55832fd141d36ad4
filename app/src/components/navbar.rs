use yew::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <header class="header">
            <div class="center">
                <h1 class="brand">{ "Cooked" }</h1>
            </div>
        </header>
    }
}
