mod err;
mod http;
mod logging;
pub mod dialog;
pub mod file_upload;
pub mod form_field;

pub use err::*;
pub use http::*;
pub use logging::*;
