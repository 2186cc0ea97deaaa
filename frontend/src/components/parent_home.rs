use shared::ParentTab;
use yew::prelude::*;

use super::button::{Button, ButtonVariant};
use super::card::Card;

#[derive(Properties, PartialEq)]
pub struct ParentHomeProps {
    pub on_navigate: Callback<ParentTab>,
    pub on_open_qr: Callback<()>,
}

fn nav_card(on_navigate: &Callback<ParentTab>, tab: ParentTab, icon: &str, subtitle: &str) -> Html {
    let on_navigate = on_navigate.clone();
    html! {
        <Card onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(tab))}>
            <div class="nav-card-title">{format!("{} {}", icon, tab.label())}</div>
            <div class="nav-card-subtitle">{subtitle.to_string()}</div>
        </Card>
    }
}

#[function_component(ParentHome)]
pub fn parent_home(props: &ParentHomeProps) -> Html {
    let on_view_log = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(ParentTab::Notifications))
    };

    let on_qr_card = {
        let on_open_qr = props.on_open_qr.clone();
        Callback::from(move |_: MouseEvent| on_open_qr.emit(()))
    };

    html! {
        <div class="stack">
            <Card class="today-log">
                <div class="today-log-title">{"Today's Log"}</div>
                <div class="nav-card-subtitle">{"Meals, activities, notes at a glance"}</div>
                <Button variant={ButtonVariant::Secondary} class="today-log-view" onclick={on_view_log}>
                    {"View"}
                </Button>
            </Card>
            <div class="card-grid">
                {nav_card(&props.on_navigate, ParentTab::Messages, "💬", "Chat with teachers")}
                <Card onclick={on_qr_card}>
                    <div class="nav-card-title">{"🔳 Pick-Up QR"}</div>
                    <div class="nav-card-subtitle">{"Scan at school gate"}</div>
                </Card>
                {nav_card(&props.on_navigate, ParentTab::Album, "🖼️", "Photos & videos")}
                <Card onclick={
                    let on_navigate = props.on_navigate.clone();
                    Callback::from(move |_: MouseEvent| on_navigate.emit(ParentTab::Notifications))
                }>
                    <div class="nav-card-title">{"🔔 Notifications"}</div>
                    <div class="nav-card-subtitle">{"Pick-up and notices"}</div>
                </Card>
            </div>
            <div class="card-grid">
                {nav_card(&props.on_navigate, ParentTab::Leave, "📅", "Submit a date & reason")}
                {nav_card(&props.on_navigate, ParentTab::Medicine, "💊", "Provide dosage & photo")}
            </div>
        </div>
    }
}
