use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub title: AttrValue,
    #[prop_or_default]
    pub footer: Option<Html>,
    #[prop_or_default]
    pub children: Html,
}

/// Bottom sheet dialog; tapping the backdrop closes it
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_sheet_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    if !props.open {
        return html! {};
    }

    html! {
        <div class="modal-root">
            <div class="modal-backdrop" onclick={on_backdrop_click}></div>
            <div class="modal-sheet" role="dialog" onclick={on_sheet_click}>
                <div class="modal-title">{props.title.clone()}</div>
                <div class="modal-body">{props.children.clone()}</div>
                {if let Some(footer) = &props.footer {
                    html! { <div class="modal-footer">{footer.clone()}</div> }
                } else { html! {} }}
            </div>
        </div>
    }
}
