use serde::{Deserialize, Serialize};

/// One certificate row. `date` is `None` for credentials without an issue
/// date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub credential_url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub sort_order: i64,
}
