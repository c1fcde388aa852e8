mod create_server;

use leptos::{context, logging::log, prelude::*};

use crate::{home::create_server::CreateServerModal, utils::RefreshTrigger};

stylance::import_style!(
    #[allow(dead_code)]
    style,
    "home/home.css"
);

#[component]
pub fn Home() -> impl IntoView {
    let refresh =
        context::use_context::<RefreshTrigger>().expect("RefreshTrigger context not found");

    Effect::new(move || {
        let version = refresh.version();
        if version > 0 {
            log!("Server data refresh requested ({})", version);
        }
    });

    view! {
        <main class=style::home_container>
            <CreateServerModal />
        </main>
    }
}
