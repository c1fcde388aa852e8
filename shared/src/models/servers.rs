use serde::{Deserialize, Serialize};

/// Body of the create-request, sent as `{ "name": .., "imageUrl": .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServerRequest {
    pub name: String,
    pub image_url: String,
}

/// Response of the upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedFile {
    pub url: String,
}
