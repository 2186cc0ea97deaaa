use shared::{MedicineForm, Mutation};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::button::Button;
use super::card::Card;
use super::input::{Input, Textarea};
use crate::hooks::use_api_client::use_api_client;
use crate::hooks::use_list_refresh::use_list_refresh;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct MedicineRequestFormProps {
    pub sent: bool,
    pub on_sent: Callback<()>,
}

#[function_component(MedicineRequestForm)]
pub fn medicine_request_form(props: &MedicineRequestFormProps) -> Html {
    let api_client = use_api_client();
    let refresh = use_list_refresh();
    let form = use_state(MedicineForm::default);
    let submitting = use_state(|| false);

    let on_drug_input = {
        let form = form.clone();
        Callback::from(move |drug_name: String| {
            form.set(MedicineForm {
                drug_name,
                ..(*form).clone()
            })
        })
    };

    let on_dosage_input = {
        let form = form.clone();
        Callback::from(move |dosage: String| {
            form.set(MedicineForm {
                dosage,
                ..(*form).clone()
            })
        })
    };

    let on_notes_input = {
        let form = form.clone();
        Callback::from(move |notes: String| {
            form.set(MedicineForm {
                notes,
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
                match api_client.create_medicine_request(&request).await {
                    Ok(()) => {
                        Logger::info_with_component(
                            "medicine-request",
                            &format!("Medicine request submitted for {}", request.drug_name),
                        );
                        on_sent.emit(());
                        refresh.after_write(Mutation::CreateMedicineRequest);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "medicine-request",
                            &format!("Failed to submit medicine request: {}", e),
                        );
                    }
                }
                submitting.set(false);
            });
        })
    };

    if props.sent {
        return html! {
            <Card class="confirmation">{"Medicine request submitted"}</Card>
        };
    }

    html! {
        <div class="stack">
            <Input
                label="Drug name"
                value={form.drug_name.clone()}
                on_input={on_drug_input}
                disabled={*submitting}
            />
            <Input
                label="Dosage"
                value={form.dosage.clone()}
                on_input={on_dosage_input}
                disabled={*submitting}
            />
            <Textarea
                label="Notes"
                value={form.notes.clone()}
                on_input={on_notes_input}
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
