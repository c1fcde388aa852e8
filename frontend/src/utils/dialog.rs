use leptos::prelude::*;
use stylance::classes;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DialogBackgroundStyle {
    Brightness,
    Blur,
}

stylance::import_style!(
    #[allow(dead_code)]
    style,
    "dialog.css"
);

/// Modal dialog. There is no close control, the owner decides through `open`.
#[component]
pub fn Dialog(
    #[prop(into)] open: Signal<bool>,
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
    #[prop(optional)] background_style: Vec<DialogBackgroundStyle>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class=classes!(
                style::overlay,
                if background_style.contains(&DialogBackgroundStyle::Blur) {
                    Some(style::overlay_blur)
                } else {
                    None
                },
                if background_style.contains(&DialogBackgroundStyle::Brightness) {
                    Some(style::overlay_brightness)
                } else {
                    None
                }
            )></div>
            <div class=style::dialog_content role="dialog" aria-modal="true">
                <header class=style::dialog_header>
                    <h2 class=style::dialog_title>{title}</h2>
                    {description.map(|description| {
                        view! { <p class=style::dialog_description>{description}</p> }
                    })}
                </header>
                {children()}
            </div>
        </Show>
    }
}

#[component]
pub fn DialogFooter(children: Children) -> impl IntoView {
    view! { <footer class=style::dialog_footer>{children()}</footer> }
}
