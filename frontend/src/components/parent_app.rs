use shared::{ParentTab, SenderRole};
use yew::prelude::*;

use super::album_grid::AlbumGrid;
use super::button::{Button, ButtonVariant};
use super::header::Header;
use super::leave_request_form::LeaveRequestForm;
use super::medicine_request_form::MedicineRequestForm;
use super::messages_panel::MessagesPanel;
use super::notification_list::NotificationList;
use super::parent_home::ParentHome;
use super::qr_modal::PickupQrModal;
use super::tab_bar::{TabBar, TabItem};

fn tab_icon(tab: ParentTab) -> &'static str {
    match tab {
        ParentTab::Home => "🏠",
        ParentTab::Messages => "💬",
        ParentTab::Album => "🖼️",
        ParentTab::Notifications => "⋯",
        ParentTab::Leave => "📅",
        ParentTab::Medicine => "💊",
    }
}

#[function_component(ParentApp)]
pub fn parent_app() -> Html {
    let tab = use_state(ParentTab::default);
    let qr_open = use_state(|| false);
    // Outlive the form tabs so a submitted request stays confirmed
    let leave_sent = use_state(|| false);
    let medicine_sent = use_state(|| false);

    let on_navigate = {
        let tab = tab.clone();
        Callback::from(move |next: ParentTab| tab.set(next))
    };

    let on_tab_change = {
        let tab = tab.clone();
        Callback::from(move |key: &'static str| {
            if let Some(next) = ParentTab::from_key(key) {
                tab.set(next);
            }
        })
    };

    let on_open_qr = {
        let qr_open = qr_open.clone();
        Callback::from(move |_: ()| qr_open.set(true))
    };

    let on_close_qr = {
        let qr_open = qr_open.clone();
        Callback::from(move |_: ()| qr_open.set(false))
    };

    let on_leave_sent = {
        let leave_sent = leave_sent.clone();
        Callback::from(move |_: ()| leave_sent.set(true))
    };

    let on_medicine_sent = {
        let medicine_sent = medicine_sent.clone();
        Callback::from(move |_: ()| medicine_sent.set(true))
    };

    let header_right = {
        let on_open_qr = on_open_qr.clone();
        html! {
            <Button
                variant={ButtonVariant::Secondary}
                onclick={Callback::from(move |_: MouseEvent| on_open_qr.emit(()))}
            >
                {"🔳 QR"}
            </Button>
        }
    };

    let content = match *tab {
        ParentTab::Home => html! {
            <ParentHome on_navigate={on_navigate} on_open_qr={on_open_qr} />
        },
        ParentTab::Messages => html! { <MessagesPanel role={SenderRole::Parent} /> },
        ParentTab::Album => html! { <AlbumGrid /> },
        ParentTab::Notifications => html! { <NotificationList /> },
        ParentTab::Leave => html! {
            <LeaveRequestForm sent={*leave_sent} on_sent={on_leave_sent} />
        },
        ParentTab::Medicine => html! {
            <MedicineRequestForm sent={*medicine_sent} on_sent={on_medicine_sent} />
        },
    };

    let tabs: Vec<TabItem> = ParentTab::TAB_BAR
        .iter()
        .map(|tab| TabItem {
            key: tab.key(),
            label: tab.label(),
            icon: tab_icon(*tab),
        })
        .collect();

    html! {
        <div class="role-shell parent">
            <Header title="Wheremykidsat (家長端)" right={header_right} />
            <main class="container content">
                {content}
            </main>
            <TabBar tabs={tabs} active={tab.key()} on_change={on_tab_change} />
            <PickupQrModal open={*qr_open} on_close={on_close_qr} />
        </div>
    }
}
