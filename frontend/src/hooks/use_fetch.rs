use serde::de::DeserializeOwned;
use shared::{CancellationToken, ListKey, RequestSequence};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_api_client::use_api_client;
use crate::hooks::use_list_refresh::use_list_refresh;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct FetchState<T> {
    /// Last successfully parsed body; `None` until the first success
    pub data: Option<T>,
    pub loading: bool,
}

/// GET `url` whenever `url` or `deps` change.
///
/// `None` means no request. Only the response to the most recently issued
/// request is applied, and the in-flight request is aborted when the
/// dependencies change or the component unmounts. Failures are logged and
/// leave `data` untouched.
#[hook]
pub fn use_fetch<T, D>(url: Option<String>, deps: D) -> FetchState<T>
where
    T: DeserializeOwned + Clone + 'static,
    D: PartialEq + 'static,
{
    let api_client = use_api_client();
    let data = use_state(|| Option::<T>::None);
    let loading = use_state(|| false);
    let sequence = use_mut_ref(RequestSequence::new);

    {
        let data = data.clone();
        let loading = loading.clone();

        use_effect_with((url, deps), move |(url, _)| {
            let token = CancellationToken::new();

            match url.clone() {
                Some(url) => {
                    let ticket = sequence.borrow_mut().issue();
                    Logger::debug_with_component("fetch", &format!("GET {} ({:?})", url, ticket));
                    loading.set(true);

                    let token = token.clone();
                    spawn_local(async move {
                        let result = api_client.get_json::<T>(&url, &token).await;

                        if token.is_cancelled() || !sequence.borrow().is_latest(ticket) {
                            Logger::debug_with_component(
                                "fetch",
                                &format!("Discarding superseded response from {}", url),
                            );
                            return;
                        }

                        match result {
                            Ok(body) => data.set(Some(body)),
                            Err(e) => {
                                Logger::warn_with_component("fetch", &format!("GET {} failed: {}", url, e));
                            }
                        }
                        loading.set(false);
                    });
                }
                None => loading.set(false),
            }

            move || token.cancel()
        });
    }

    FetchState {
        data: (*data).clone(),
        loading: *loading,
    }
}

/// Fetch one of the backend lists, re-fetching when a write invalidates it
#[hook]
pub fn use_list<T>(key: ListKey) -> FetchState<Vec<T>>
where
    T: DeserializeOwned + Clone + 'static,
{
    let api_client = use_api_client();
    let refresh = use_list_refresh();
    let generation = refresh.generation(key);

    use_fetch::<Vec<T>, u32>(Some(api_client.list_url(key)), generation)
}
