use std::cell::RefCell;

use async_trait::async_trait;

use crate::{Error, form::CreateServerForm, models::CreateServerRequest};

/// Backend that persists a new server.
#[async_trait(?Send)]
pub trait ServerApi {
    async fn create_server(&self, request: &CreateServerRequest) -> Result<(), Error>;
}

/// Navigation collaborator used after a server was created.
pub trait Navigator {
    /// Re-fetch server-provided data without a full reload.
    fn refresh(&self);
    fn reload(&self);
}

#[async_trait(?Send)]
impl<'a, T: ServerApi + ?Sized> ServerApi for &'a T {
    async fn create_server(&self, request: &CreateServerRequest) -> Result<(), Error> {
        (**self).create_server(request).await
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn refresh(&self) {
        (**self).refresh()
    }

    fn reload(&self) {
        (**self).reload()
    }
}

/// Somewhere the form lives while a request is in flight.
pub trait FormStore {
    /// Returns `None` when the form is gone (e.g. the owner was disposed).
    fn modify<R>(&self, f: impl FnOnce(&mut CreateServerForm) -> R) -> Option<R>;
}

impl FormStore for RefCell<CreateServerForm> {
    fn modify<R>(&self, f: impl FnOnce(&mut CreateServerForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Invalid form, or a request was already in flight.
    Rejected,
    Created,
    Failed(Error),
}

pub struct CreateServerFlow<A, N> {
    api: A,
    navigator: N,
    reload_after_create: bool,
}

impl<A: ServerApi, N: Navigator> CreateServerFlow<A, N> {
    pub fn new(api: A, navigator: N) -> Self {
        Self {
            api,
            navigator,
            reload_after_create: true,
        }
    }

    pub fn reload_after_create(mut self, reload: bool) -> Self {
        self.reload_after_create = reload;
        self
    }

    pub async fn submit(&self, form: &impl FormStore) -> SubmitOutcome {
        let Some(Some(request)) = form.modify(|form| form.begin_submit()) else {
            return SubmitOutcome::Rejected;
        };

        let result = self.api.create_server(&request).await;
        form.modify(|form| form.finish_submit(&result));

        match result {
            Ok(()) => {
                tracing::info!("server {:?} created", request.name);
                self.navigator.refresh();
                if self.reload_after_create {
                    self.navigator.reload();
                }
                SubmitOutcome::Created
            }
            Err(e) => SubmitOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::{form::SubmitState, validation::ServerForm};

    #[derive(Default)]
    struct MockApi {
        requests: RefCell<Vec<CreateServerRequest>>,
        fail_with: Option<Error>,
    }

    #[async_trait(?Send)]
    impl ServerApi for MockApi {
        async fn create_server(&self, request: &CreateServerRequest) -> Result<(), Error> {
            self.requests.borrow_mut().push(request.clone());
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    #[derive(Default)]
    struct MockNavigator {
        refreshes: Cell<usize>,
        reloads: Cell<usize>,
    }

    impl Navigator for MockNavigator {
        fn refresh(&self) {
            self.refreshes.set(self.refreshes.get() + 1);
        }

        fn reload(&self) {
            assert_eq!(self.refreshes.get(), 1, "refresh must come before reload");
            self.reloads.set(self.reloads.get() + 1);
        }
    }

    fn filled_form() -> RefCell<CreateServerForm> {
        let mut form: CreateServerForm = CreateServerForm::default();
        form.set_name("My Server");
        form.set_image_url("https://cdn.example/img.png");
        RefCell::new(form)
    }

    #[tokio::test]
    async fn valid_submit_sends_one_request_and_reloads_once() {
        let api = MockApi::default();
        let navigator = MockNavigator::default();
        let flow = CreateServerFlow::new(&api, &navigator);
        let form = filled_form();

        let outcome = flow.submit(&form).await;

        assert_eq!(outcome, SubmitOutcome::Created);
        assert_eq!(
            api.requests.borrow().as_slice(),
            &[CreateServerRequest {
                name: "My Server".to_string(),
                image_url: "https://cdn.example/img.png".to_string(),
            }]
        );
        assert_eq!(form.borrow().values(), &ServerForm::default());
        assert_eq!(navigator.refreshes.get(), 1);
        assert_eq!(navigator.reloads.get(), 1);
    }

    #[tokio::test]
    async fn failed_submit_keeps_form_and_does_not_reload() {
        let api = MockApi {
            fail_with: Some(Error::Status(500)),
            ..Default::default()
        };
        let navigator = MockNavigator::default();
        let flow = CreateServerFlow::new(&api, &navigator);
        let form = filled_form();

        let outcome = flow.submit(&form).await;

        assert_eq!(outcome, SubmitOutcome::Failed(Error::Status(500)));
        assert_eq!(api.requests.borrow().len(), 1);
        assert_eq!(form.borrow().values().name, "My Server");
        assert_eq!(form.borrow().values().image_url, "https://cdn.example/img.png");
        assert!(!form.borrow().is_loading());
        assert_eq!(navigator.refreshes.get(), 0);
        assert_eq!(navigator.reloads.get(), 0);
    }

    #[tokio::test]
    async fn invalid_form_sends_nothing() {
        let api = MockApi::default();
        let navigator = MockNavigator::default();
        let flow = CreateServerFlow::new(&api, &navigator);
        let form: RefCell<CreateServerForm> = RefCell::new(CreateServerForm::default());

        assert_eq!(flow.submit(&form).await, SubmitOutcome::Rejected);
        assert!(api.requests.borrow().is_empty());
        assert_eq!(form.borrow().state(), &SubmitState::Idle);
    }

    #[tokio::test]
    async fn refresh_only_when_reload_disabled() {
        let api = MockApi::default();
        let navigator = MockNavigator::default();
        let flow = CreateServerFlow::new(&api, &navigator).reload_after_create(false);

        assert_eq!(flow.submit(&filled_form()).await, SubmitOutcome::Created);
        assert_eq!(navigator.refreshes.get(), 1);
        assert_eq!(navigator.reloads.get(), 0);
    }

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let request = CreateServerRequest {
            name: "My Server".to_string(),
            image_url: "https://cdn.example/img.png".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "name": "My Server", "imageUrl": "https://cdn.example/img.png" })
        );
    }
}
