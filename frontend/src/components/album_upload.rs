use shared::{AlbumUploadForm, Mutation};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::button::Button;
use super::input::Input;
use crate::hooks::use_api_client::use_api_client;
use crate::hooks::use_list_refresh::use_list_refresh;
use crate::services::logging::Logger;

/// Teacher's album tab: post a photo by URL. No preview.
#[function_component(AlbumUpload)]
pub fn album_upload() -> Html {
    let api_client = use_api_client();
    let refresh = use_list_refresh();
    let form = use_state(AlbumUploadForm::default);
    let uploading = use_state(|| false);

    let on_url_input = {
        let form = form.clone();
        Callback::from(move |media_url: String| {
            form.set(AlbumUploadForm {
                media_url,
                ..(*form).clone()
            })
        })
    };

    let on_caption_input = {
        let form = form.clone();
        Callback::from(move |caption: String| {
            form.set(AlbumUploadForm {
                caption,
                ..(*form).clone()
            })
        })
    };

    let on_upload = {
        let form = form.clone();
        let uploading = uploading.clone();

        Callback::from(move |_: MouseEvent| {
            if !form.is_complete() {
                return;
            }

            let request = form.to_request();
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let form = form.clone();
            let uploading = uploading.clone();

            uploading.set(true);
            spawn_local(async move {
                if let Err(e) = api_client.upload_album_item(&request).await {
                    Logger::error_with_component("album-upload", &format!("Failed to upload album item: {}", e));
                }
                form.set(AlbumUploadForm::default());
                uploading.set(false);
                refresh.after_write(Mutation::UploadAlbumItem);
            });
        })
    };

    html! {
        <div class="stack">
            <Input
                label="Photo URL"
                input_type="url"
                value={form.media_url.clone()}
                on_input={on_url_input}
                disabled={*uploading}
            />
            <Input
                label="Caption"
                value={form.caption.clone()}
                on_input={on_caption_input}
                disabled={*uploading}
            />
            <Button
                class="btn-block"
                onclick={on_upload}
                loading={*uploading}
                disabled={!form.is_complete()}
            >
                {"Upload"}
            </Button>
        </div>
    }
}
