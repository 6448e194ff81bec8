use serde::{Deserialize, Serialize};

/// One skill row. A blank category groups under "Other" at display time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Proficiency percentage (0–100), used by the site's skill bars.
    #[serde(default)]
    pub proficiency: i64,
    #[serde(default)]
    pub sort_order: i64,
}
