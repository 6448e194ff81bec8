use serde::{Deserialize, Serialize};

/// One education row. Years are plain integers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree_en: String,
    #[serde(default)]
    pub degree_id: String,
    #[serde(default)]
    pub field_en: String,
    #[serde(default)]
    pub field_id: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_id: String,
    #[serde(default)]
    pub start_year: i64,
    #[serde(default)]
    pub end_year: i64,
    #[serde(default)]
    pub sort_order: i64,
}
