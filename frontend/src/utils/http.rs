use async_trait::async_trait;
use leptos::{logging::error, prelude::*};
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use shared::{Config, CreateServerRequest, Navigator, ServerApi, UploadedFile};
use wasm_bindgen_futures::JsFuture;

use super::Error;

/// Origin of the current page, e.g. `https://thiscord.com.tr`.
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

pub struct HttpServerApi {
    client: Client,
    url: String,
}

impl HttpServerApi {
    pub fn new(config: &Config) -> Self {
        Self::with_url(config.create_server_url(&page_origin()))
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait(?Send)]
impl ServerApi for HttpServerApi {
    async fn create_server(&self, request: &CreateServerRequest) -> Result<(), shared::Error> {
        let resp = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(Error::from)?;

        // Response body is not used.
        let status = resp.status();
        if !status.is_success() {
            return Err(shared::Error::Status(status.as_u16()));
        }
        Ok(())
    }
}

pub async fn upload_file(url: &str, file: web_sys::File) -> Result<UploadedFile, Error> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let mut part = Part::bytes(bytes).file_name(file.name());
    let mime = file.type_();
    if !mime.is_empty() {
        part = part.mime_str(&mime)?;
    }

    let resp = Client::new()
        .post(url)
        .multipart(Form::new().part("file", part))
        .send()
        .await?
        .error_for_status()?;
    Ok(resp.json::<UploadedFile>().await?)
}

/// Bumped whenever server-provided data should be fetched again.
#[derive(Clone, Copy)]
pub struct RefreshTrigger(RwSignal<u64>);

impl Default for RefreshTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshTrigger {
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    pub fn notify(&self) {
        self.0.update(|version| *version += 1);
    }

    pub fn version(&self) -> u64 {
        self.0.get()
    }
}

#[derive(Clone, Copy)]
pub struct BrowserNavigator {
    refresh: RefreshTrigger,
}

impl BrowserNavigator {
    pub fn new(refresh: RefreshTrigger) -> Self {
        Self { refresh }
    }

    fn try_reload(&self) -> Result<(), Error> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        window.location().reload()?;
        Ok(())
    }
}

impl Navigator for BrowserNavigator {
    fn refresh(&self) {
        self.refresh.notify();
    }

    fn reload(&self) {
        if let Err(e) = self.try_reload() {
            error!("Failed to reload page: {}", e);
        }
    }
}
