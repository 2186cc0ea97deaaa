use shared::{visible_items, ListKey, Notification};
use yew::prelude::*;

use super::card::Card;
use super::empty::Empty;
use crate::hooks::use_fetch::use_list;

#[function_component(NotificationList)]
pub fn notification_list() -> Html {
    let notifications = use_list::<Notification>(ListKey::Notifications);

    html! {
        <div class="stack" aria-busy={notifications.loading.then_some("true")}>
            {match visible_items(notifications.data.as_ref()) {
                Some(items) => html! {
                    {for items.iter().map(|notification| html! {
                        <Card>
                            <div class="notification-title">{notification.title.clone()}</div>
                            <div class="notification-body">{notification.body.clone()}</div>
                        </Card>
                    })}
                },
                None => html! { <Empty title="No notifications" /> },
            }}
        </div>
    }
}
