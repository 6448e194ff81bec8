use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Display language of a composed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Id,
}

impl Lang {
    /// Resolve a bilingual field pair: the preferred language wins, the
    /// other language is the fallback, and two blank values resolve to the
    /// empty string.
    pub fn resolve<'a>(self, en: &'a str, id: &'a str) -> &'a str {
        let (preferred, fallback) = match self {
            Lang::En => (en, id),
            Lang::Id => (id, en),
        };
        if preferred.is_empty() { fallback } else { preferred }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Id => "id",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Lang::En),
            "id" => Ok(Lang::Id),
            other => Err(CoreError::UnknownLang(other.to_string())),
        }
    }
}

/// Localized CV section titles and the open-ended-range label.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub summary: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    pub projects: &'static str,
    pub certificates: &'static str,
    pub present: &'static str,
}

impl Labels {
    pub fn for_lang(lang: Lang) -> Self {
        match lang {
            Lang::En => Labels {
                summary: "Professional Summary",
                experience: "Work Experience",
                education: "Education",
                skills: "Technical Skills",
                projects: "Projects",
                certificates: "Certifications & Licenses",
                present: "Present",
            },
            Lang::Id => Labels {
                summary: "Ringkasan Profesional",
                experience: "Pengalaman Kerja",
                education: "Pendidikan",
                skills: "Keahlian Teknis",
                projects: "Proyek",
                certificates: "Sertifikasi & Lisensi",
                present: "Sekarang",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_selected_language() {
        assert_eq!(Lang::En.resolve("Engineer", "Insinyur"), "Engineer");
        assert_eq!(Lang::Id.resolve("Engineer", "Insinyur"), "Insinyur");
    }

    #[test]
    fn resolve_falls_back_to_other_language() {
        assert_eq!(Lang::En.resolve("", "Insinyur"), "Insinyur");
        assert_eq!(Lang::Id.resolve("Engineer", ""), "Engineer");
    }

    #[test]
    fn resolve_of_two_blanks_is_empty() {
        assert_eq!(Lang::En.resolve("", ""), "");
        assert_eq!(Lang::Id.resolve("", ""), "");
    }

    #[test]
    fn lang_round_trips_through_str() {
        assert_eq!("en".parse::<Lang>().unwrap(), Lang::En);
        assert_eq!("id".parse::<Lang>().unwrap(), Lang::Id);
        assert!("fr".parse::<Lang>().is_err());
        assert_eq!(Lang::Id.to_string(), "id");
    }
}
