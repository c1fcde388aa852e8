/// Build-time settings of the onboarding frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the API. `None` means the origin of the current page.
    pub api_url: Option<String>,
    pub create_server_path: String,
    pub upload_path: String,
    /// Upload route used for server images.
    pub image_endpoint: String,
    /// Reload the whole page after a server was created.
    pub reload_after_create: bool,
    /// Show a message under the form when the create-request fails.
    pub show_submit_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            create_server_path: "/api/servers".to_string(),
            upload_path: "/api/upload".to_string(),
            image_endpoint: "serverImage".to_string(),
            reload_after_create: true,
            show_submit_errors: false,
        }
    }
}

impl Config {
    pub fn with_api_url(mut self, api_url: Option<&str>) -> Self {
        self.api_url = api_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        self
    }

    fn base<'a>(&'a self, origin: &'a str) -> &'a str {
        self.api_url
            .as_deref()
            .unwrap_or(origin)
            .trim_end_matches('/')
    }

    pub fn create_server_url(&self, origin: &str) -> String {
        format!("{}{}", self.base(origin), self.create_server_path)
    }

    pub fn upload_url(&self, origin: &str, endpoint: &str) -> String {
        format!("{}{}/{}", self.base(origin), self.upload_path, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_default_to_page_origin() {
        let config = Config::default();
        assert_eq!(
            config.create_server_url("https://app.example/"),
            "https://app.example/api/servers"
        );
        assert_eq!(
            config.upload_url("https://app.example", "serverImage"),
            "https://app.example/api/upload/serverImage"
        );
    }

    #[test]
    fn api_url_overrides_origin() {
        let config = Config::default().with_api_url(Some("https://api.example/"));
        assert_eq!(
            config.create_server_url("https://app.example"),
            "https://api.example/api/servers"
        );
        let config = Config::default().with_api_url(Some(""));
        assert_eq!(config.api_url, None);
    }
}
