use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub value: String,
    #[prop_or_default]
    pub placeholder: String,
    pub on_change: Callback<String>,
}

/// Controlled text field, displays `value` and reports every edit.
#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();

        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <input
            class="text-input"
            type="text"
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            oninput={oninput}
        />
    }
}
