use serde::{Deserialize, Serialize};

/// The single site-owner profile row.
///
/// Bilingual fields come in `_en`/`_id` pairs; an empty string means the
/// field was never filled in. URLs are stored with their scheme and only
/// stripped for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_id: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub title_id: String,
    #[serde(default)]
    pub bio_en: String,
    #[serde(default)]
    pub bio_id: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub instagram: String,
}
