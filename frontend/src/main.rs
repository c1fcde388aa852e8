mod app;
pub mod utils;
mod home;

use app::*;
use leptos::prelude::*;


fn main() {
    console_error_panic_hook::set_once();
    utils::init_tracing();
    mount_to_body(|| {
        view! { <App /> }
    })
}
