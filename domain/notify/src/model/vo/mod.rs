use serde::{Deserialize, Serialize};

/// Mail ready for the transport, after template rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body_html: String,
}

/// Drive folder as reported by the Microsoft Graph API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFolder {
    pub id: String,
    pub web_url: Option<String>,
}
