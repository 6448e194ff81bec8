use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::certificate::Certificate;
use crate::models::education::Education;
use crate::models::experience::Experience;
use crate::models::profile::Profile;
use crate::models::project::Project;
use crate::models::skill::Skill;

/// A point-in-time snapshot of the six content lists fed to the composer.
///
/// Lists arrive already sorted by `sort_order`; nothing here re-sorts them.
/// `Default` is the unconfigured-store fallback: an empty profile and empty
/// lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentBundle {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

impl ContentBundle {
    /// Parse a stored JSON snapshot.
    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(raw)?)
    }
}
