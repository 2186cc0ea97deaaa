use shared::{is_present, visible_items, ListKey, Message, Mutation, NewMessageRequest, SenderRole};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::button::Button;
use super::card::Card;
use super::empty::Empty;
use super::input::Input;
use crate::hooks::use_api_client::use_api_client;
use crate::hooks::use_fetch::use_list;
use crate::hooks::use_list_refresh::use_list_refresh;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct MessagesPanelProps {
    /// Role the current user sends as
    pub role: SenderRole,
}

/// Recent conversation plus a composer. The list is loaded on entry; a sent
/// message shows up only once the list is fetched again.
#[function_component(MessagesPanel)]
pub fn messages_panel(props: &MessagesPanelProps) -> Html {
    let api_client = use_api_client();
    let refresh = use_list_refresh();
    let messages = use_list::<Message>(ListKey::Messages);
    let text = use_state(String::new);
    let sending = use_state(|| false);

    let on_text_input = {
        let text = text.clone();
        Callback::from(move |value: String| text.set(value))
    };

    let on_send = {
        let role = props.role;
        let text = text.clone();
        let sending = sending.clone();

        Callback::from(move |_: MouseEvent| {
            if !is_present(&text) {
                return;
            }

            let request = NewMessageRequest {
                sender_role: role,
                text: (*text).clone(),
            };
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let text = text.clone();
            let sending = sending.clone();

            sending.set(true);
            spawn_local(async move {
                if let Err(e) = api_client.send_message(&request).await {
                    Logger::error_with_component("messages", &format!("Failed to send message: {}", e));
                }

                // Cleared whatever the outcome
                text.set(String::new());
                sending.set(false);
                refresh.after_write(Mutation::SendMessage);
            });
        })
    };

    let role = props.role;
    let own_class = match role {
        SenderRole::Teacher => "message-own-teacher",
        SenderRole::Parent | SenderRole::Unknown => "message-own-parent",
    };

    html! {
        <div class="messages">
            <div class="messages-list" aria-busy={messages.loading.then_some("true")}>
                {match visible_items(messages.data.as_ref()) {
                    Some(items) => html! {
                        {for items.iter().map(|message| {
                            let class = if message.is_from(role) { own_class } else { "message-other" };
                            html! {
                                <Card class={classes!("message", class)}>
                                    {message.display_text().to_string()}
                                </Card>
                            }
                        })}
                    },
                    None => html! { <Empty title="No messages" subtitle="Start a conversation" /> },
                }}
            </div>
            <div class="composer">
                <Input
                    class="composer-input"
                    placeholder="Type a message"
                    value={(*text).clone()}
                    on_input={on_text_input}
                    disabled={*sending}
                />
                <Button
                    onclick={on_send}
                    loading={*sending}
                    disabled={!is_present(&text)}
                >
                    {"Send"}
                </Button>
            </div>
        </div>
    }
}
