use yew::prelude::*;

use crate::services::api::ApiClient;

/// API client provided by the root shell, or one built from the
/// configuration when rendered outside it
#[hook]
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_default()
}
