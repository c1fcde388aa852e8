use crate::home::Home;
use crate::utils::RefreshTrigger;

use leptos::{context, logging::log};
use leptos::prelude::*;
use shared::Config;

/// Build-time configuration. `THISCORD_API_URL` points the app at another API host.
pub fn load_config() -> Config {
    Config::default().with_api_url(option_env!("THISCORD_API_URL"))
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    log!("Using config: {:?}", config);

    context::provide_context(config);
    context::provide_context(RefreshTrigger::new());

    view! {
        <Home />
    }
}
