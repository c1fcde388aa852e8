use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("No browser window available")]
    NoWindow,
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<Error> for shared::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Reqwest(e) => match e.status() {
                Some(status) => shared::Error::Status(status.as_u16()),
                None => shared::Error::Transport(e.to_string()),
            },
            e => shared::Error::Transport(e.to_string()),
        }
    }
}
