use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    /// Makes the whole card a tap target
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Marks content that is being re-fetched, for assistive tech only
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let clickable = props.onclick.is_some().then_some("card-clickable");

    html! {
        <div
            class={classes!("card", clickable, props.class.clone())}
            onclick={props.onclick.clone()}
            aria-busy={props.busy.then_some("true")}
        >
            {props.children.clone()}
        </div>
    }
}
