use shared::qr_image_url;
use yew::prelude::*;

use super::button::{Button, ButtonVariant};
use super::modal::Modal;

#[derive(Properties, PartialEq)]
pub struct PickupQrModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Static pick-up code shown at the school gate
#[function_component(PickupQrModal)]
pub fn pickup_qr_modal(props: &PickupQrModalProps) -> Html {
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let footer = html! {
        <Button variant={ButtonVariant::Secondary} class="btn-block" onclick={on_close_click}>
            {"Close"}
        </Button>
    };

    html! {
        <Modal open={props.open} on_close={props.on_close.clone()} title="Pick-Up QR" {footer}>
            <div class="qr">
                <div class="qr-frame">
                    <img src={qr_image_url()} alt="QR" />
                </div>
                <div class="qr-hint">{"Increase screen brightness for easier scanning"}</div>
            </div>
        </Modal>
    }
}
