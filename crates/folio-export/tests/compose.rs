//! Behavioral tests for the composer: section ordering, lazy headings,
//! bilingual resolution and the bullet heuristic, checked against the
//! block sequence rather than rendered bytes.

use folio_core::language::Lang;
use folio_core::models::bundle::ContentBundle;
use folio_core::models::certificate::Certificate;
use folio_core::models::experience::Experience;
use folio_core::models::profile::Profile;
use folio_core::models::project::Project;
use folio_core::models::skill::Skill;
use folio_export::block::{Block, PlainStyle};
use folio_export::compose::compose;

fn profile(name_en: &str) -> Profile {
    Profile {
        name_en: name_en.to_string(),
        ..Profile::default()
    }
}

fn engineer_at_acme() -> Experience {
    Experience {
        company: "Acme".to_string(),
        role_en: "Engineer".to_string(),
        role_id: "Insinyur".to_string(),
        description_en: "Built systems. Led team.".to_string(),
        start_date: "2022-01".to_string(),
        end_date: None,
        is_current: true,
        ..Experience::default()
    }
}

fn headings(blocks: &[Block]) -> Vec<&str> {
    blocks
        .iter()
        .filter_map(|b| match b {
            Block::Heading(t) => Some(t.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn empty_bundle_composes_to_header_only() {
    let bundle = ContentBundle {
        profile: profile("Budi Santoso"),
        ..ContentBundle::default()
    };
    let blocks = compose(&bundle, Lang::En);

    assert_eq!(
        blocks,
        vec![Block::Plain {
            text: "Budi Santoso".to_string(),
            style: PlainStyle::Name,
        }]
    );
    assert!(headings(&blocks).is_empty());
}

#[test]
fn fully_empty_bundle_still_produces_a_valid_document() {
    let blocks = compose(&ContentBundle::default(), Lang::En);
    assert_eq!(blocks.len(), 1);
    assert!(matches!(
        &blocks[0],
        Block::Plain { text, style: PlainStyle::Name } if text.is_empty()
    ));
}

#[test]
fn experience_entry_composes_row_company_and_bullets() {
    let bundle = ContentBundle {
        profile: profile("Budi Santoso"),
        experience: vec![engineer_at_acme()],
        ..ContentBundle::default()
    };
    let blocks = compose(&bundle, Lang::En);

    assert_eq!(headings(&blocks), vec!["Work Experience"]);

    let heading_ix = blocks
        .iter()
        .position(|b| matches!(b, Block::Heading(_)))
        .unwrap();
    assert_eq!(
        &blocks[heading_ix + 1..heading_ix + 5],
        &[
            Block::KeyValueRow {
                left: "Engineer".to_string(),
                right: "Jan 2022 – Present".to_string(),
                bulleted: false,
            },
            Block::Plain {
                text: "Acme".to_string(),
                style: PlainStyle::Company,
            },
            Block::BulletLine("Built systems".to_string()),
            Block::BulletLine("Led team".to_string()),
        ]
    );
}

#[test]
fn indonesian_export_uses_localized_labels() {
    let bundle = ContentBundle {
        profile: profile("Budi Santoso"),
        experience: vec![engineer_at_acme()],
        ..ContentBundle::default()
    };
    let blocks = compose(&bundle, Lang::Id);

    assert_eq!(headings(&blocks), vec!["Pengalaman Kerja"]);
    let row = blocks
        .iter()
        .find_map(|b| match b {
            Block::KeyValueRow { left, right, .. } => Some((left, right)),
            _ => None,
        })
        .unwrap();
    assert_eq!(row.0, "Insinyur");
    assert!(row.1.ends_with("Sekarang"));
}

#[test]
fn skills_group_by_category_in_first_occurrence_order() {
    let skill = |name: &str, category: &str| Skill {
        name: name.to_string(),
        category: category.to_string(),
        ..Skill::default()
    };
    let bundle = ContentBundle {
        profile: profile("Budi Santoso"),
        skills: vec![
            skill("A", "Frontend"),
            skill("C", "Backend"),
            skill("B", "Frontend"),
        ],
        ..ContentBundle::default()
    };
    let blocks = compose(&bundle, Lang::En);

    let lines: Vec<String> = blocks
        .iter()
        .filter_map(|b| match b {
            Block::LabeledLine { label, text } => Some(format!("{label}{text}")),
            _ => None,
        })
        .collect();
    assert_eq!(lines, vec!["Frontend: A, B", "Backend: C"]);
}

#[test]
fn blank_skill_category_groups_under_other() {
    let bundle = ContentBundle {
        skills: vec![Skill {
            name: "Rust".to_string(),
            category: "  ".to_string(),
            ..Skill::default()
        }],
        ..ContentBundle::default()
    };
    let blocks = compose(&bundle, Lang::En);
    assert!(blocks.iter().any(|b| matches!(
        b,
        Block::LabeledLine { label, .. } if label == "Other: "
    )));
}

#[test]
fn project_entry_carries_tech_stack_and_stripped_links() {
    let bundle = ContentBundle {
        projects: vec![Project {
            title_en: "Folio".to_string(),
            description_en: "Static site generator".to_string(),
            live_url: "https://folio.dev".to_string(),
            github_url: "https://github.com/budi/folio".to_string(),
            tech_stack: vec!["Rust".to_string(), "Postgres".to_string()],
            ..Project::default()
        }],
        ..ContentBundle::default()
    };
    let blocks = compose(&bundle, Lang::En);

    assert!(blocks.contains(&Block::Plain {
        text: "Folio".to_string(),
        style: PlainStyle::ProjectTitle,
    }));
    assert!(blocks.contains(&Block::Plain {
        text: "Rust · Postgres".to_string(),
        style: PlainStyle::TechStack,
    }));
    assert!(blocks.contains(&Block::BulletLine("Static site generator".to_string())));
    assert!(blocks.contains(&Block::Plain {
        text: "folio.dev | github.com/budi/folio".to_string(),
        style: PlainStyle::Links,
    }));
}

#[test]
fn certificate_rows_are_bulleted_key_value_rows() {
    let bundle = ContentBundle {
        certificates: vec![Certificate {
            title: "AWS Solutions Architect".to_string(),
            issuer: "Amazon".to_string(),
            date: Some("2023-06".to_string()),
            ..Certificate::default()
        }],
        ..ContentBundle::default()
    };
    let blocks = compose(&bundle, Lang::En);

    assert_eq!(headings(&blocks), vec!["Certifications & Licenses"]);
    assert!(blocks.contains(&Block::KeyValueRow {
        left: "AWS Solutions Architect".to_string(),
        right: "Amazon · Jun 2023".to_string(),
        bulleted: true,
    }));
}

#[test]
fn bilingual_fields_fall_back_to_the_other_language() {
    let bundle = ContentBundle {
        profile: Profile {
            name_id: "Budi".to_string(),
            bio_id: "Insinyur perangkat lunak.".to_string(),
            ..Profile::default()
        },
        ..ContentBundle::default()
    };
    let blocks = compose(&bundle, Lang::En);

    assert!(matches!(
        &blocks[0],
        Block::Plain { text, style: PlainStyle::Name } if text == "Budi"
    ));
    assert!(blocks
        .iter()
        .any(|b| matches!(b, Block::Paragraph(t) if t == "Insinyur perangkat lunak.")));
}

#[test]
fn unicode_text_passes_through_untouched() {
    let bundle = ContentBundle {
        profile: Profile {
            name_id: "Budi Sūryo 企画".to_string(),
            ..Profile::default()
        },
        ..ContentBundle::default()
    };
    let blocks = compose(&bundle, Lang::Id);
    assert!(matches!(
        &blocks[0],
        Block::Plain { text, .. } if text == "Budi Sūryo 企画"
    ));
}

#[test]
fn composing_twice_is_deterministic() {
    let bundle = ContentBundle {
        profile: profile("Budi Santoso"),
        experience: vec![engineer_at_acme()],
        certificates: vec![Certificate {
            title: "Cert".to_string(),
            issuer: "Issuer".to_string(),
            date: None,
            ..Certificate::default()
        }],
        ..ContentBundle::default()
    };
    assert_eq!(compose(&bundle, Lang::En), compose(&bundle, Lang::En));
    assert_eq!(compose(&bundle, Lang::Id), compose(&bundle, Lang::Id));
}

#[test]
fn section_order_is_fixed() {
    let bundle = ContentBundle {
        profile: Profile {
            name_en: "Budi".to_string(),
            bio_en: "Builds things for the web.".to_string(),
            ..Profile::default()
        },
        experience: vec![engineer_at_acme()],
        education: vec![folio_core::models::education::Education {
            institution: "Universitas Indonesia".to_string(),
            degree_en: "BSc".to_string(),
            field_en: "Computer Science".to_string(),
            start_year: 2016,
            end_year: 2020,
            ..folio_core::models::education::Education::default()
        }],
        skills: vec![Skill {
            name: "Rust".to_string(),
            category: "Backend".to_string(),
            ..Skill::default()
        }],
        projects: vec![Project {
            title_en: "Folio".to_string(),
            ..Project::default()
        }],
        certificates: vec![Certificate {
            title: "Cert".to_string(),
            ..Certificate::default()
        }],
        ..ContentBundle::default()
    };
    let blocks = compose(&bundle, Lang::En);

    assert_eq!(
        headings(&blocks),
        vec![
            "Professional Summary",
            "Work Experience",
            "Education",
            "Technical Skills",
            "Projects",
            "Certifications & Licenses",
        ]
    );
}

#[test]
fn education_row_joins_degree_and_field() {
    let bundle = ContentBundle {
        education: vec![folio_core::models::education::Education {
            institution: "UI".to_string(),
            degree_en: "BSc".to_string(),
            field_en: "Computer Science".to_string(),
            start_year: 2016,
            end_year: 2020,
            ..folio_core::models::education::Education::default()
        }],
        ..ContentBundle::default()
    };
    let blocks = compose(&bundle, Lang::En);
    assert!(blocks.contains(&Block::KeyValueRow {
        left: "BSc — Computer Science".to_string(),
        right: "2016 – 2020".to_string(),
        bulleted: false,
    }));
}
