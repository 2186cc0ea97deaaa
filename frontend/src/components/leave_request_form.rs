use shared::{LeaveForm, Mutation};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::button::Button;
use super::card::Card;
use super::input::{Input, Textarea};
use crate::hooks::use_api_client::use_api_client;
use crate::hooks::use_list_refresh::use_list_refresh;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct LeaveRequestFormProps {
    /// Owned by the shell so the confirmation outlives this tab
    pub sent: bool,
    pub on_sent: Callback<()>,
}

#[function_component(LeaveRequestForm)]
pub fn leave_request_form(props: &LeaveRequestFormProps) -> Html {
    let api_client = use_api_client();
    let refresh = use_list_refresh();
    let form = use_state(LeaveForm::default);
    let submitting = use_state(|| false);

    let on_date_input = {
        let form = form.clone();
        Callback::from(move |date: String| {
            form.set(LeaveForm {
                date,
                ..(*form).clone()
            })
        })
    };

    let on_reason_input = {
        let form = form.clone();
        Callback::from(move |reason: String| {
            form.set(LeaveForm {
                reason,
                ..(*form).clone()
            })
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let on_sent = props.on_sent.clone();

        Callback::from(move |_: MouseEvent| {
            if !form.is_complete() {
                return;
            }

            let request = form.to_request();
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let submitting = submitting.clone();
            let on_sent = on_sent.clone();

            submitting.set(true);
            spawn_local(async move {
                match api_client.create_leave_request(&request).await {
                    Ok(()) => {
                        Logger::info_with_component("leave-request", &format!("Leave request sent for {}", request.date));
                        on_sent.emit(());
                        refresh.after_write(Mutation::CreateLeaveRequest);
                    }
                    Err(e) => {
                        Logger::error_with_component("leave-request", &format!("Failed to send leave request: {}", e));
                    }
                }
                submitting.set(false);
            });
        })
    };

    if props.sent {
        return html! {
            <Card class="confirmation">{"Leave request sent"}</Card>
        };
    }

    html! {
        <div class="stack">
            <Input
                label="Date"
                placeholder="YYYY-MM-DD"
                value={form.date.clone()}
                on_input={on_date_input}
                disabled={*submitting}
            />
            <Textarea
                label="Reason"
                value={form.reason.clone()}
                on_input={on_reason_input}
                disabled={*submitting}
            />
            <Button
                class="btn-block"
                onclick={on_submit}
                loading={*submitting}
                disabled={!form.is_complete()}
            >
                {"Submit"}
            </Button>
        </div>
    }
}
