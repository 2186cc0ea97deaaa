use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InputProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <label class="field">
            {if let Some(label) = &props.label {
                html! { <div class="field-label">{label.clone()}</div> }
            } else { html! {} }}
            <input
                type={props.input_type.clone()}
                class={classes!("field-input", props.class.clone())}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                disabled={props.disabled}
                {oninput}
            />
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextareaProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or(4)]
    pub rows: u32,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Textarea)]
pub fn textarea(props: &TextareaProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit(textarea.value());
        })
    };

    html! {
        <label class="field">
            {if let Some(label) = &props.label {
                html! { <div class="field-label">{label.clone()}</div> }
            } else { html! {} }}
            <textarea
                rows={props.rows.to_string()}
                class={classes!("field-input", "field-textarea", props.class.clone())}
                value={props.value.clone()}
                disabled={props.disabled}
                {oninput}
            />
        </label>
    }
}
