pub mod use_api_client;
pub mod use_fetch;
pub mod use_list_refresh;
