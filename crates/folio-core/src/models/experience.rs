use serde::{Deserialize, Serialize};

/// One work-experience row.
///
/// `end_date` is `None` for an ongoing position; `is_current` mirrors that
/// by store convention but is not enforced here. Dates are calendar strings
/// (`YYYY-MM` or `YYYY-MM-DD`) and are never reinterpreted through a
/// timezone-aware type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role_en: String,
    #[serde(default)]
    pub role_id: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_id: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub sort_order: i64,
}
