use shared::{SenderRole, TeacherTab};
use yew::prelude::*;

use super::album_upload::AlbumUpload;
use super::button::{Button, ButtonVariant};
use super::empty::Empty;
use super::header::Header;
use super::messages_panel::MessagesPanel;
use super::pending_requests::PendingRequests;
use super::tab_bar::{TabBar, TabItem};

fn tab_icon(tab: TeacherTab) -> &'static str {
    match tab {
        TeacherTab::Home => "🏠",
        TeacherTab::Messages => "💬",
        TeacherTab::Album => "🖼️",
        TeacherTab::Notifications => "⋯",
    }
}

#[function_component(TeacherApp)]
pub fn teacher_app() -> Html {
    let tab = use_state(TeacherTab::default);

    let on_tab_change = {
        let tab = tab.clone();
        Callback::from(move |key: &'static str| {
            if let Some(next) = TeacherTab::from_key(key) {
                tab.set(next);
            }
        })
    };

    // Scanning pick-up codes is not wired up yet
    let header_right = html! {
        <Button variant={ButtonVariant::Secondary}>{"🔳 Scan"}</Button>
    };

    let content = match *tab {
        TeacherTab::Home => html! { <PendingRequests /> },
        TeacherTab::Messages => html! { <MessagesPanel role={SenderRole::Teacher} /> },
        TeacherTab::Album => html! { <AlbumUpload /> },
        TeacherTab::Notifications => html! { <Empty title="More coming soon" /> },
    };

    let tabs: Vec<TabItem> = TeacherTab::TAB_BAR
        .iter()
        .map(|tab| TabItem {
            key: tab.key(),
            label: tab.label(),
            icon: tab_icon(*tab),
        })
        .collect();

    html! {
        <div class="role-shell teacher">
            <Header title="Wheremykidsat (教師端)" right={header_right} />
            <main class="container content">
                {content}
            </main>
            <TabBar tabs={tabs} active={tab.key()} on_change={on_tab_change} />
        </div>
    }
}
