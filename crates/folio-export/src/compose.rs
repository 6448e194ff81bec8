//! Content-to-block mapping: walks the six content lists in fixed section
//! order and emits the flat block sequence both renderer backends consume.

use std::collections::HashMap;

use folio_core::language::{Labels, Lang};
use folio_core::models::bundle::ContentBundle;
use tracing::debug;

use crate::block::{Block, PlainStyle};
use crate::normalize::{
    bullets_from_description, contact_line, format_month_year, strip_protocol,
};

/// Compose the CV block sequence for one language.
///
/// Sections come out in fixed order: header, summary, experience,
/// education, skills, projects, certificates. A section heading appears
/// only immediately before the first block of a non-empty section. Input
/// lists are taken in the order given; the caller sorts. Every call
/// allocates a fresh sequence, so concurrent exports cannot interfere.
pub fn compose(bundle: &ContentBundle, lang: Lang) -> Vec<Block> {
    let labels = Labels::for_lang(lang);
    let mut blocks = Vec::new();

    header(&mut blocks, bundle, lang);
    summary(&mut blocks, bundle, lang, &labels);
    experience(&mut blocks, bundle, lang, &labels);
    education(&mut blocks, bundle, lang, &labels);
    skills(&mut blocks, bundle, &labels);
    projects(&mut blocks, bundle, lang, &labels);
    certificates(&mut blocks, bundle, &labels);

    debug!(blocks = blocks.len(), lang = %lang, "composed document");
    blocks
}

fn header(blocks: &mut Vec<Block>, bundle: &ContentBundle, lang: Lang) {
    let p = &bundle.profile;

    // The name line is always present, even for an empty profile.
    blocks.push(Block::Plain {
        text: lang.resolve(&p.name_en, &p.name_id).to_string(),
        style: PlainStyle::Name,
    });

    let title = lang.resolve(&p.title_en, &p.title_id);
    if !title.is_empty() {
        blocks.push(Block::Plain {
            text: title.to_string(),
            style: PlainStyle::Title,
        });
    }

    let contact = contact_line(p);
    if !contact.is_empty() {
        blocks.push(Block::Plain {
            text: contact,
            style: PlainStyle::Contact,
        });
    }
}

fn summary(blocks: &mut Vec<Block>, bundle: &ContentBundle, lang: Lang, labels: &Labels) {
    let bio = lang.resolve(&bundle.profile.bio_en, &bundle.profile.bio_id);
    if bio.is_empty() {
        return;
    }
    blocks.push(Block::Heading(labels.summary.to_string()));
    blocks.push(Block::Paragraph(bio.to_string()));
}

fn experience(blocks: &mut Vec<Block>, bundle: &ContentBundle, lang: Lang, labels: &Labels) {
    if bundle.experience.is_empty() {
        return;
    }
    blocks.push(Block::Heading(labels.experience.to_string()));

    for exp in &bundle.experience {
        let role = lang.resolve(&exp.role_en, &exp.role_id);
        let range = format!(
            "{} – {}",
            format_month_year(Some(&exp.start_date), labels),
            format_month_year(exp.end_date.as_deref(), labels),
        );
        blocks.push(Block::KeyValueRow {
            left: role.to_string(),
            right: range,
            bulleted: false,
        });

        if !exp.company.is_empty() {
            blocks.push(Block::Plain {
                text: exp.company.clone(),
                style: PlainStyle::Company,
            });
        }

        let desc = lang.resolve(&exp.description_en, &exp.description_id);
        if !desc.is_empty() {
            for bullet in bullets_from_description(desc) {
                blocks.push(Block::BulletLine(bullet));
            }
        }
    }
}

fn education(blocks: &mut Vec<Block>, bundle: &ContentBundle, lang: Lang, labels: &Labels) {
    if bundle.education.is_empty() {
        return;
    }
    blocks.push(Block::Heading(labels.education.to_string()));

    for edu in &bundle.education {
        let degree = lang.resolve(&edu.degree_en, &edu.degree_id);
        let field = lang.resolve(&edu.field_en, &edu.field_id);
        let left = [degree, field]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" — ");

        blocks.push(Block::KeyValueRow {
            left,
            right: format!("{} – {}", edu.start_year, edu.end_year),
            bulleted: false,
        });

        if !edu.institution.is_empty() {
            blocks.push(Block::Plain {
                text: edu.institution.clone(),
                style: PlainStyle::Company,
            });
        }

        let desc = lang.resolve(&edu.description_en, &edu.description_id);
        if !desc.is_empty() {
            blocks.push(Block::BulletLine(desc.to_string()));
        }
    }
}

fn skills(blocks: &mut Vec<Block>, bundle: &ContentBundle, labels: &Labels) {
    if bundle.skills.is_empty() {
        return;
    }
    blocks.push(Block::Heading(labels.skills.to_string()));

    // Group by category, keeping first-occurrence order.
    let mut order: Vec<&str> = Vec::new();
    let mut grouped: HashMap<&str, Vec<&str>> = HashMap::new();
    for skill in &bundle.skills {
        let category = if skill.category.trim().is_empty() {
            "Other"
        } else {
            skill.category.as_str()
        };
        let entry = grouped.entry(category).or_default();
        if entry.is_empty() {
            order.push(category);
        }
        entry.push(&skill.name);
    }

    for category in order {
        blocks.push(Block::LabeledLine {
            label: format!("{category}: "),
            text: grouped[category].join(", "),
        });
    }
}

fn projects(blocks: &mut Vec<Block>, bundle: &ContentBundle, lang: Lang, labels: &Labels) {
    if bundle.projects.is_empty() {
        return;
    }
    blocks.push(Block::Heading(labels.projects.to_string()));

    for proj in &bundle.projects {
        blocks.push(Block::Plain {
            text: lang.resolve(&proj.title_en, &proj.title_id).to_string(),
            style: PlainStyle::ProjectTitle,
        });

        if !proj.tech_stack.is_empty() {
            blocks.push(Block::Plain {
                text: proj.tech_stack.join(" · "),
                style: PlainStyle::TechStack,
            });
        }

        let desc = lang.resolve(&proj.description_en, &proj.description_id);
        if !desc.is_empty() {
            for bullet in bullets_from_description(desc) {
                blocks.push(Block::BulletLine(bullet));
            }
        }

        let mut links: Vec<&str> = Vec::new();
        if !proj.live_url.is_empty() {
            links.push(strip_protocol(&proj.live_url));
        }
        if !proj.github_url.is_empty() {
            links.push(strip_protocol(&proj.github_url));
        }
        if !links.is_empty() {
            blocks.push(Block::Plain {
                text: links.join(" | "),
                style: PlainStyle::Links,
            });
        }
    }
}

fn certificates(blocks: &mut Vec<Block>, bundle: &ContentBundle, labels: &Labels) {
    if bundle.certificates.is_empty() {
        return;
    }
    blocks.push(Block::Heading(labels.certificates.to_string()));

    for cert in &bundle.certificates {
        blocks.push(Block::KeyValueRow {
            left: cert.title.clone(),
            right: format!(
                "{} · {}",
                cert.issuer,
                format_month_year(cert.date.as_deref(), labels),
            ),
            bulleted: true,
        });
    }
}
