use shared::{visible_items, LeaveDecision, LeaveRequest, ListKey, MedicineRequest, Mutation};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::button::{Button, ButtonVariant};
use super::card::Card;
use super::empty::Empty;
use crate::hooks::use_api_client::use_api_client;
use crate::hooks::use_fetch::use_list;
use crate::hooks::use_list_refresh::{use_list_refresh, ListRefresh};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct PendingRequestsViewProps {
    pub medicine: Option<Vec<MedicineRequest>>,
    pub leaves: Option<Vec<LeaveRequest>>,
    #[prop_or_default]
    pub medicine_loading: bool,
    #[prop_or_default]
    pub leaves_loading: bool,
    pub on_confirm: Callback<String>,
    pub on_decide: Callback<(String, LeaveDecision)>,
}

/// Pending medicine and leave requests with their actions. Records without
/// an id cannot be acted on, so their buttons are disabled.
#[function_component(PendingRequestsView)]
pub fn pending_requests_view(props: &PendingRequestsViewProps) -> Html {
    html! {
        <div class="stack">
            <Card class="pending-medicine" busy={props.medicine_loading}>
                <div class="section-title">{"Pending Medicine Requests"}</div>
                {match visible_items(props.medicine.as_ref()) {
                    Some(items) => html! {
                        {for items.iter().map(|request| {
                            let id = request.id.clone();
                            let addressable = Mutation::ConfirmMedicineRequest { id: id.clone() }.is_addressable();
                            let on_confirm = props.on_confirm.clone();
                            html! {
                                <div class="request-item">
                                    <div class="request-headline">
                                        {format!("{} - {}", request.drug_name, request.dosage)}
                                    </div>
                                    <div class="request-detail">{request.notes.clone()}</div>
                                    <Button
                                        class="btn-block"
                                        disabled={!addressable}
                                        onclick={Callback::from(move |_: MouseEvent| on_confirm.emit(id.clone()))}
                                    >
                                        {"Confirm Given"}
                                    </Button>
                                </div>
                            }
                        })}
                    },
                    None => html! { <Empty title="No pending medicine" /> },
                }}
            </Card>
            <Card class="pending-leave" busy={props.leaves_loading}>
                <div class="section-title">{"Pending Leave Requests"}</div>
                {match visible_items(props.leaves.as_ref()) {
                    Some(items) => html! {
                        {for items.iter().map(|request| {
                            let addressable = Mutation::DecideLeaveRequest {
                                id: request.id.clone(),
                                decision: LeaveDecision::Approve,
                            }
                            .is_addressable();
                            let approve = {
                                let id = request.id.clone();
                                let on_decide = props.on_decide.clone();
                                Callback::from(move |_: MouseEvent| {
                                    on_decide.emit((id.clone(), LeaveDecision::Approve))
                                })
                            };
                            let reject = {
                                let id = request.id.clone();
                                let on_decide = props.on_decide.clone();
                                Callback::from(move |_: MouseEvent| {
                                    on_decide.emit((id.clone(), LeaveDecision::Reject))
                                })
                            };
                            html! {
                                <div class="request-item">
                                    <div class="request-headline">{request.date.clone()}</div>
                                    <div class="request-detail">{request.reason.clone()}</div>
                                    <div class="button-row">
                                        <Button
                                            variant={ButtonVariant::Secondary}
                                            disabled={!addressable}
                                            onclick={approve}
                                        >
                                            {"✓ Approve"}
                                        </Button>
                                        <Button
                                            variant={ButtonVariant::Danger}
                                            disabled={!addressable}
                                            onclick={reject}
                                        >
                                            {"✕ Reject"}
                                        </Button>
                                    </div>
                                </div>
                            }
                        })}
                    },
                    None => html! { <Empty title="No pending leave" /> },
                }}
            </Card>
        </div>
    }
}

/// Teacher home.
///
/// Actions never edit the rendered lists; an item goes away only when a
/// re-fetched list no longer contains it.
#[function_component(PendingRequests)]
pub fn pending_requests() -> Html {
    let api_client = use_api_client();
    let refresh = use_list_refresh();
    let medicine = use_list::<MedicineRequest>(ListKey::PendingMedicineRequests);
    let leaves = use_list::<LeaveRequest>(ListKey::PendingLeaveRequests);

    let on_confirm = {
        let api_client = api_client.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: String| confirm_medicine(api_client.clone(), refresh.clone(), id))
    };

    let on_decide = Callback::from(move |(id, decision): (String, LeaveDecision)| {
        decide_leave(api_client.clone(), refresh.clone(), id, decision)
    });

    html! {
        <PendingRequestsView
            medicine={medicine.data.clone()}
            leaves={leaves.data.clone()}
            medicine_loading={medicine.loading}
            leaves_loading={leaves.loading}
            {on_confirm}
            {on_decide}
        />
    }
}

fn confirm_medicine(api_client: ApiClient, refresh: ListRefresh, id: String) {
    if !(Mutation::ConfirmMedicineRequest { id: id.clone() }).is_addressable() {
        Logger::warn_with_component("pending-requests", "Skipping confirm for a record without id");
        return;
    }

    spawn_local(async move {
        match api_client.confirm_medicine_request(&id).await {
            Ok(()) => Logger::info_with_component("pending-requests", &format!("Confirmed medicine request {}", id)),
            Err(e) => Logger::error_with_component(
                "pending-requests",
                &format!("Failed to confirm medicine request {}: {}", id, e),
            ),
        }
        refresh.after_write(Mutation::ConfirmMedicineRequest { id });
    });
}

fn decide_leave(api_client: ApiClient, refresh: ListRefresh, id: String, decision: LeaveDecision) {
    if !(Mutation::DecideLeaveRequest { id: id.clone(), decision }).is_addressable() {
        Logger::warn_with_component("pending-requests", "Skipping decision for a record without id");
        return;
    }

    spawn_local(async move {
        match api_client.decide_leave_request(&id, decision).await {
            Ok(()) => Logger::info_with_component(
                "pending-requests",
                &format!("Leave request {} sent {}", id, decision.as_str()),
            ),
            Err(e) => Logger::error_with_component(
                "pending-requests",
                &format!("Failed to {} leave request {}: {}", decision.as_str(), id, e),
            ),
        }
        refresh.after_write(Mutation::DecideLeaveRequest { id, decision });
    });
}
