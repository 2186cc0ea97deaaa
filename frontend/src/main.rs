use shared::Role;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::parent_app::ParentApp;
use components::teacher_app::TeacherApp;
use hooks::use_list_refresh::{RefreshContext, RefreshState};
use services::api::ApiClient;
use services::config::app_config;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct RoleSwitchProps {
    role: Role,
    on_change: Callback<Role>,
}

#[function_component(RoleSwitch)]
fn role_switch(props: &RoleSwitchProps) -> Html {
    html! {
        <div class="role-switch">
            {for [Role::Parent, Role::Teacher].into_iter().map(|role| {
                let on_change = props.on_change.clone();
                let class = classes!(
                    "role-pill",
                    (props.role == role).then_some(match role {
                        Role::Parent => "role-pill-parent",
                        Role::Teacher => "role-pill-teacher",
                    })
                );
                html! {
                    <button
                        type="button"
                        {class}
                        onclick={Callback::from(move |_: MouseEvent| on_change.emit(role))}
                    >
                        {role.label()}
                    </button>
                }
            })}
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let role = use_state(Role::default);
    let api_client = use_state(ApiClient::new);
    let refresh = use_reducer(RefreshState::default);

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |next: Role| role.set(next))
    };

    html! {
        <ContextProvider<ApiClient> context={(*api_client).clone()}>
            <ContextProvider<RefreshContext> context={refresh}>
                <div class="app">
                    <RoleSwitch role={*role} on_change={on_role_change} />
                    {match *role {
                        Role::Parent => html! { <ParentApp /> },
                        Role::Teacher => html! { <TeacherApp /> },
                    }}
                </div>
            </ContextProvider<RefreshContext>>
        </ContextProvider<ApiClient>>
    }
}

fn main() {
    let config = app_config();
    Logger::info_with_component(
        "app",
        &format!(
            "Starting with backend '{}' (refetch after write: {})",
            config.backend_url, config.refetch_after_write
        ),
    );
    yew::Renderer::<App>::new().render();
}
