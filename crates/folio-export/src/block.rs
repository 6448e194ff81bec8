use serde::{Deserialize, Serialize};

/// Style tag for a [`Block::Plain`] line.
///
/// Tags are semantic roles, not fonts. Each backend maps them onto its own
/// font/size/color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlainStyle {
    /// The profile name, largest line of the header.
    Name,
    /// The professional title under the name.
    Title,
    /// The joined contact identifiers.
    Contact,
    /// Employer or institution line under an entry row.
    Company,
    /// Project name line.
    ProjectTitle,
    /// Project technology list.
    TechStack,
    /// Project live/source links.
    Links,
}

/// One format-agnostic unit of document content.
///
/// The composer emits a flat `Vec<Block>`; both renderer backends consume
/// the same sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// Section title, drawn uppercased with a rule underneath.
    Heading(String),
    /// Body text wrapped to the content width.
    Paragraph(String),
    /// Left text with a right-aligned counterpart on the same baseline.
    KeyValueRow {
        left: String,
        right: String,
        /// Certificate rows carry a leading bullet glyph.
        bulleted: bool,
    },
    /// Bulleted body line; continuation lines align under the text start.
    BulletLine(String),
    /// Bold label followed by wrapped content (skills category rows).
    LabeledLine { label: String, text: String },
    /// Single line with a semantic style tag.
    Plain { text: String, style: PlainStyle },
}

/// Per-document metadata the renderers need beyond the block sequence.
#[derive(Debug, Clone, Default)]
pub struct RenderMeta {
    /// Resolved display name, used for the page footer.
    pub display_name: String,
}
