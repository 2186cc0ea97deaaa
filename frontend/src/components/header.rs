use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    /// Renders a back chevron when set
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
    #[prop_or_default]
    pub right: Option<Html>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container header-row">
                {if let Some(on_back) = &props.on_back {
                    let on_back = on_back.clone();
                    html! {
                        <button
                            type="button"
                            class="header-back"
                            aria-label="Back"
                            onclick={Callback::from(move |_: MouseEvent| on_back.emit(()))}
                        >
                            {"‹"}
                        </button>
                    }
                } else { html! {} }}
                <h1>{props.title.clone()}</h1>
                <div class="header-right">
                    {props.right.clone().unwrap_or_default()}
                </div>
            </div>
        </header>
    }
}
