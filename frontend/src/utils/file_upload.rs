use leptos::{
    context,
    logging::{error, log},
    prelude::*,
    task::spawn_local,
};
use shared::Config;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use super::{page_origin, upload_file};

stylance::import_style!(
    #[allow(dead_code)]
    style,
    "file_upload.css"
);

/// Takes the chosen file and clears the picker, so picking the same file
/// again after a failed upload fires `change` once more.
fn take_selected_file(event: &web_sys::Event) -> Option<web_sys::File> {
    let input = event.target()?.dyn_into::<HtmlInputElement>().ok()?;
    let file = input.files()?.get(0);
    input.set_value("");
    file
}

/// Image picker that uploads the chosen file to `endpoint` and reports the
/// resulting URL through `on_change`.
#[component]
pub fn FileUpload(
    endpoint: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let config = context::use_context::<Config>().expect("Config context not found");
    let url = config.upload_url(&page_origin(), &endpoint);
    let (uploading, set_uploading) = signal(false);

    let on_select = move |event: web_sys::Event| {
        let Some(file) = take_selected_file(&event) else {
            return;
        };
        let url = url.clone();
        set_uploading.set(true);
        spawn_local(async move {
            match upload_file(&url, file).await {
                Ok(uploaded) => {
                    log!("Uploaded image: {}", uploaded.url);
                    on_change.run(uploaded.url);
                }
                Err(e) => error!("Failed to upload image: {}", e),
            }
            set_uploading.set(false);
        });
    };

    view! {
        <Show
            when=move || !value.get().is_empty()
            fallback=move || {
                view! {
                    <label class=style::dropzone>
                        <input
                            type="file"
                            accept="image/*"
                            class=style::file_input
                            disabled=move || uploading.get()
                            on:change=on_select.clone()
                        />
                        <span>
                            {move || if uploading.get() { "Uploading…" } else { "Upload an image" }}
                        </span>
                    </label>
                }
            }
        >
            <div class=style::preview>
                <img src=move || value.get() alt="Upload" class=style::preview_image />
                <button
                    type="button"
                    class=style::remove_button
                    on:click=move |_| on_change.run(String::new())
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
