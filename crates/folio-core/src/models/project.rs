use serde::{Deserialize, Serialize};

/// One project row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub title_id: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_id: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub sort_order: i64,
}
