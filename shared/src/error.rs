#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Server responded with status {0}")]
    Status(u16),
}
