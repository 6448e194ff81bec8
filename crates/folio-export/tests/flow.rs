//! Flow-renderer tests: the DOCX backend must accept every block shape the
//! composer can emit and produce a well-formed ZIP container.

use folio_core::language::Lang;
use folio_core::models::bundle::ContentBundle;
use folio_core::models::certificate::Certificate;
use folio_core::models::education::Education;
use folio_core::models::experience::Experience;
use folio_core::models::profile::Profile;
use folio_core::models::project::Project;
use folio_core::models::skill::Skill;
use folio_export::block::RenderMeta;
use folio_export::compose::compose;
use folio_export::docx::render_flow;
use folio_export::styles::DocumentStyles;

fn full_bundle() -> ContentBundle {
    ContentBundle {
        profile: Profile {
            name_en: "Budi Santoso".to_string(),
            title_en: "Software Engineer".to_string(),
            bio_en: "Builds storage engines. Speaks at meetups.".to_string(),
            email: "budi@example.com".to_string(),
            github: "https://github.com/budi".to_string(),
            linkedin: "https://linkedin.com/in/budi".to_string(),
            ..Profile::default()
        },
        experience: vec![Experience {
            company: "Acme".to_string(),
            role_en: "Engineer".to_string(),
            description_en: "Built systems. Led team.".to_string(),
            start_date: "2022-01".to_string(),
            end_date: None,
            is_current: true,
            ..Experience::default()
        }],
        education: vec![Education {
            institution: "Universitas Indonesia".to_string(),
            degree_en: "BSc".to_string(),
            field_en: "Computer Science".to_string(),
            start_year: 2016,
            end_year: 2020,
            ..Education::default()
        }],
        skills: vec![
            Skill {
                name: "Rust".to_string(),
                category: "Backend".to_string(),
                ..Skill::default()
            },
            Skill {
                name: "Svelte".to_string(),
                category: "Frontend".to_string(),
                ..Skill::default()
            },
        ],
        projects: vec![Project {
            title_en: "Folio".to_string(),
            description_en: "Portfolio engine".to_string(),
            live_url: "https://folio.dev".to_string(),
            tech_stack: vec!["Rust".to_string()],
            ..Project::default()
        }],
        certificates: vec![Certificate {
            title: "AWS SA".to_string(),
            issuer: "Amazon".to_string(),
            date: Some("2023-06".to_string()),
            ..Certificate::default()
        }],
    }
}

fn meta() -> RenderMeta {
    RenderMeta {
        display_name: "Budi Santoso".to_string(),
    }
}

#[test]
fn full_bundle_renders_a_zip_container() {
    let blocks = compose(&full_bundle(), Lang::En);
    let bytes = render_flow(&blocks, &meta(), &DocumentStyles::default()).unwrap();

    // DOCX is a ZIP; the container must start with the local-file magic.
    assert!(bytes.starts_with(b"PK"));
    assert!(bytes.len() > 1000);
}

#[test]
fn empty_bundle_renders_without_error() {
    let blocks = compose(&ContentBundle::default(), Lang::En);
    let bytes = render_flow(
        &blocks,
        &RenderMeta::default(),
        &DocumentStyles::default(),
    )
    .unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn indonesian_document_renders() {
    let blocks = compose(&full_bundle(), Lang::Id);
    let bytes = render_flow(&blocks, &meta(), &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn rendering_twice_yields_the_same_document_body() {
    let blocks = compose(&full_bundle(), Lang::En);
    let styles = DocumentStyles::default();
    let first = render_flow(&blocks, &meta(), &styles).unwrap();
    let second = render_flow(&blocks, &meta(), &styles).unwrap();
    assert_eq!(first.len(), second.len());
}
