use leptos::prelude::*;

stylance::import_style!(
    #[allow(dead_code)]
    style,
    "form_field.css"
);

/// Label, control and validation message of a single form field.
#[component]
pub fn FormField(
    #[prop(optional)] label: Option<&'static str>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=style::form_item>
            {label.map(|label| view! { <label class=style::form_label>{label}</label> })}
            {children()}
            <Show when=move || error.get().is_some()>
                <p class=style::form_message>{move || error.get()}</p>
            </Show>
        </div>
    }
}
