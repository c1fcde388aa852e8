mod config;
mod error;
pub mod flow;
pub mod form;
pub mod models;
mod mount;
pub mod validation;

pub use config::Config;
pub use error::Error;
pub use flow::{CreateServerFlow, FormStore, Navigator, ServerApi, SubmitOutcome};
pub use form::{CreateServerForm, SubmitState};
pub use models::{CreateServerRequest, UploadedFile};
pub use mount::MountGuard;
pub use validation::{Field, FieldError, ServerForm, ServerFormSchema, Validator};
