use crate::{
    Error,
    models::CreateServerRequest,
    validation::{Field, FieldError, ServerForm, ServerFormSchema, Validator},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Created,
    Failed(Error),
}

/// Form state plus the submit state machine of the create-server dialog.
#[derive(Debug, Clone, Default)]
pub struct CreateServerForm<V = ServerFormSchema> {
    values: ServerForm,
    errors: Vec<FieldError>,
    state: SubmitState,
    submitted: bool,
    validator: V,
}

impl<V> CreateServerForm<V>
where
    V: Validator<ServerForm, Output = CreateServerRequest>,
{
    pub fn new(validator: V) -> Self {
        Self {
            values: ServerForm::default(),
            errors: Vec::new(),
            state: SubmitState::Idle,
            submitted: false,
            validator,
        }
    }

    pub fn values(&self) -> &ServerForm {
        &self.values
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn submit_error(&self) -> Option<&Error> {
        match &self.state {
            SubmitState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SubmitState::Submitting)
    }

    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.values.name = name.into();
        self.revalidate();
    }

    pub fn set_image_url(&mut self, image_url: impl Into<String>) {
        self.values.image_url = image_url.into();
        self.revalidate();
    }

    // Messages only follow edits once the user has tried to submit.
    fn revalidate(&mut self) {
        if self.submitted {
            self.errors = self.validator.validate(&self.values).err().unwrap_or_default();
        }
    }

    /// Validates the current values and enters `Submitting`.
    /// Returns the payload to send, or `None` when the submit is blocked.
    pub fn begin_submit(&mut self) -> Option<CreateServerRequest> {
        if self.is_loading() {
            tracing::debug!("submit ignored, a request is already in flight");
            return None;
        }
        self.submitted = true;
        match self.validator.validate(&self.values) {
            Ok(request) => {
                self.errors.clear();
                self.state = SubmitState::Submitting;
                tracing::debug!("submitting create-server form");
                Some(request)
            }
            Err(errors) => {
                tracing::debug!("create-server form has {} invalid field(s)", errors.len());
                self.errors = errors;
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: &Result<(), Error>) {
        match result {
            Ok(()) => {
                self.reset();
                self.state = SubmitState::Created;
            }
            Err(e) => {
                self.state = SubmitState::Failed(e.clone());
            }
        }
    }

    pub fn reset(&mut self) {
        self.values = ServerForm::default();
        self.errors.clear();
        self.submitted = false;
        self.state = SubmitState::Idle;
    }
}
