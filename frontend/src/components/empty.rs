use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmptyProps {
    #[prop_or(AttrValue::Static("Nothing here yet"))]
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

/// Placeholder for a list with nothing to show
#[function_component(Empty)]
pub fn empty(props: &EmptyProps) -> Html {
    html! {
        <div class="empty">
            <div class="empty-title">{props.title.clone()}</div>
            {if let Some(subtitle) = &props.subtitle {
                html! { <div class="empty-subtitle">{subtitle.clone()}</div> }
            } else { html! {} }}
        </div>
    }
}
