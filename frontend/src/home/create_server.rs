use leptos::{
    context,
    logging::{error, log},
    prelude::*,
    task::spawn_local,
};
use shared::{
    Config, CreateServerFlow, CreateServerForm, Field, FormStore, MountGuard, ServerFormSchema,
    SubmitOutcome,
};

use crate::utils::{
    dialog::{Dialog, DialogBackgroundStyle, DialogFooter},
    file_upload::FileUpload,
    form_field::FormField,
    BrowserNavigator, HttpServerApi, RefreshTrigger,
};

stylance::import_style!(
    #[allow(dead_code)]
    style,
    "create_server.css"
);

#[derive(Clone, Copy)]
struct FormSignal(RwSignal<CreateServerForm>);

impl FormStore for FormSignal {
    fn modify<R>(&self, f: impl FnOnce(&mut CreateServerForm) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

impl FormSignal {
    fn read<R>(&self, f: impl FnOnce(&CreateServerForm) -> R) -> R {
        self.0.with(f)
    }

    fn edit(&self, f: impl FnOnce(&mut CreateServerForm)) {
        self.0.update(f);
    }
}

/// Onboarding dialog asking the user to create their first server.
#[component]
pub fn CreateServerModal() -> impl IntoView {
    let config = StoredValue::new(
        context::use_context::<Config>().expect("Config context not found"),
    );
    let refresh =
        context::use_context::<RefreshTrigger>().expect("RefreshTrigger context not found");

    // The upload widget touches browser-only state, show nothing before the first pass.
    let mount = RwSignal::new(MountGuard::default());
    Effect::new(move || mount.update(MountGuard::mark_mounted));

    let form = FormSignal(RwSignal::new(CreateServerForm::new(ServerFormSchema::default())));
    let loading = move || form.read(|form| form.is_loading());

    let submit = move || {
        let config = config.get_value();
        spawn_local(async move {
            let flow = CreateServerFlow::new(
                HttpServerApi::new(&config),
                BrowserNavigator::new(refresh),
            )
            .reload_after_create(config.reload_after_create);

            match flow.submit(&form).await {
                SubmitOutcome::Created => log!("Server created"),
                SubmitOutcome::Failed(e) => error!("Failed to create server: {}", e),
                SubmitOutcome::Rejected => log!("Create server form rejected"),
            }
        });
    };

    move || {
        mount.get().render(|| {
            let show_submit_errors = config.with_value(|config| config.show_submit_errors);

            view! {
                <Dialog
                    open=true
                    title="Customize your server"
                    description="Give your server a personality"
                    background_style=vec![DialogBackgroundStyle::Blur]
                >
                    <form
                        class=style::create_server_form
                        on:submit=move |event| {
                            event.prevent_default();
                            submit();
                        }
                    >
                        <div class=style::fields>
                            <div class=style::image_field>
                                <FormField error=Signal::derive(move || {
                                    form.read(|form| form.error_for(Field::ImageUrl))
                                })>
                                    <FileUpload
                                        endpoint=config.with_value(|config| config.image_endpoint.clone())
                                        value=Signal::derive(move || {
                                            form.read(|form| form.values().image_url.clone())
                                        })
                                        on_change=Callback::new(move |url: String| {
                                            form.edit(|form| form.set_image_url(url))
                                        })
                                    />
                                </FormField>
                            </div>
                            <FormField
                                label="Server name"
                                error=Signal::derive(move || {
                                    form.read(|form| form.error_for(Field::Name))
                                })
                            >
                                <input
                                    type="text"
                                    class=style::name_input
                                    placeholder="Enter server name"
                                    disabled=loading
                                    prop:value=move || form.read(|form| form.values().name.clone())
                                    on:input=move |event| {
                                        form.edit(|form| form.set_name(event_target_value(&event)))
                                    }
                                />
                            </FormField>
                            <Show when=move || {
                                show_submit_errors && form.read(|form| form.submit_error().is_some())
                            }>
                                <p class=style::submit_error>
                                    {move || {
                                        form.read(|form| {
                                            form.submit_error().map(|e| e.to_string())
                                        })
                                    }}
                                </p>
                            </Show>
                        </div>
                        <DialogFooter>
                            <button type="submit" class=style::create_button disabled=loading>
                                "Create"
                            </button>
                        </DialogFooter>
                    </form>
                </Dialog>
            }
        })
    }
}
