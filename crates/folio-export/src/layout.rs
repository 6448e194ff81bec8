//! Greedy page layout for the paged backend.
//!
//! Phase one folds the block sequence over a vertical cursor into
//! absolutely-positioned draw ops, starting a fresh page whenever the next
//! line group would cross the bottom margin. Phase two stamps the page
//! footer once the total page count is known. No backtracking, no
//! widow/orphan control.

use std::mem;

use tracing::debug;

use crate::block::{Block, PlainStyle, RenderMeta};
use crate::metrics::{self, Face};
use crate::styles::{DocumentStyles, Palette, Rgb};

/// One positioned piece of text. `y` is the baseline in millimetres from
/// the page top; the PDF encoder flips it into PDF coordinates.
#[derive(Debug, Clone)]
pub struct TextOp {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub face: Face,
    pub size: f64,
    pub color: Rgb,
}

/// A horizontal rule.
#[derive(Debug, Clone)]
pub struct RuleOp {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    pub line_width: f64,
    pub color: Rgb,
}

/// Everything placed on one page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub texts: Vec<TextOp>,
    pub rules: Vec<RuleOp>,
}

// Vertical advances in millimetres, matching the site's PDF export.
const NAME_ADVANCE: f64 = 7.0;
const TITLE_ADVANCE: f64 = 5.5;
const CONTACT_ADVANCE: f64 = 4.0;
const HEADER_RULE_GAP: f64 = 1.5;
const AFTER_HEADER_RULE: f64 = 5.0;
const HEADING_KEEP: f64 = 18.0;
const HEADING_GAP_BEFORE: f64 = 3.0;
const HEADING_RULE_GAP: f64 = 2.0;
const AFTER_HEADING: f64 = 5.0;
const PARAGRAPH_LINE: f64 = 4.0;
const BULLET_LINE: f64 = 3.8;
const BULLET_KEEP: f64 = 4.2;
const ROW_KEEP: f64 = 14.0;
const ROW_ADVANCE: f64 = 4.0;
const CERT_ROW_KEEP: f64 = 6.0;
const CERT_ROW_ADVANCE: f64 = 4.5;
const COMPANY_ADVANCE: f64 = 4.5;
const LABELED_KEEP: f64 = 7.0;
const LABELED_LINE: f64 = 4.2;
const ENTRY_GAP: f64 = 2.0;
const BULLET_INDENT: f64 = 4.0;
const BULLET_TEXT_GAP: f64 = 3.5;
const LINKS_INDENT: f64 = 7.5;
const LINKS_ADVANCE: f64 = 3.5;
const FOOTER_FROM_BOTTOM: f64 = 8.0;

struct Cursor<'a> {
    styles: &'a DocumentStyles,
    done: Vec<Page>,
    current: Page,
    y: f64,
}

impl<'a> Cursor<'a> {
    fn new(styles: &'a DocumentStyles) -> Self {
        Self {
            styles,
            done: Vec::new(),
            current: Page::default(),
            y: styles.margin_top,
        }
    }

    /// Start a new page if `needed` millimetres will not fit above the
    /// bottom margin.
    fn ensure(&mut self, needed: f64) {
        if self.y + needed > self.styles.page_height - self.styles.margin_bottom {
            self.done.push(mem::take(&mut self.current));
            self.y = self.styles.margin_top;
        }
    }

    fn text(&mut self, x: f64, text: &str, face: Face, size: f64, color: Rgb) {
        self.current.texts.push(TextOp {
            x,
            y: self.y,
            text: text.to_string(),
            face,
            size,
            color,
        });
    }

    fn centered(&mut self, text: &str, face: Face, size: f64, color: Rgb) {
        let width = metrics::text_width_mm(text, face, size);
        let x = (self.styles.page_width - width) / 2.0;
        self.text(x, text, face, size, color);
    }

    fn right_aligned(&mut self, text: &str, face: Face, size: f64, color: Rgb) {
        let width = metrics::text_width_mm(text, face, size);
        let x = self.styles.page_width - self.styles.margin_right - width;
        self.text(x, text, face, size, color);
    }

    fn rule(&mut self, x1: f64, x2: f64, line_width: f64, color: Rgb) {
        self.current.rules.push(RuleOp {
            x1,
            x2,
            y: self.y,
            line_width,
            color,
        });
    }

    fn full_width_rule(&mut self, line_width: f64, color: Rgb) {
        let right = self.styles.page_width - self.styles.margin_right;
        self.rule(self.styles.margin_left, right, line_width, color);
    }

    fn finish(mut self) -> Vec<Page> {
        self.done.push(self.current);
        self.done
    }
}

/// Lay the block sequence out onto fixed-size pages, footer included.
pub fn lay_out(blocks: &[Block], meta: &RenderMeta, styles: &DocumentStyles) -> Vec<Page> {
    let palette = Palette::default();
    let mut cur = Cursor::new(styles);
    let ml = styles.margin_left;

    // Centered header prefix, closed with the accent rule.
    let mut rest = blocks;
    while let Some(Block::Plain { text, style }) = rest.first() {
        match style {
            PlainStyle::Name => {
                cur.centered(text, Face::Bold, styles.name_size, palette.black);
                cur.y += NAME_ADVANCE;
            }
            PlainStyle::Title => {
                cur.centered(text, Face::Regular, styles.title_size, palette.muted);
                cur.y += TITLE_ADVANCE;
            }
            PlainStyle::Contact => {
                cur.centered(text, Face::Regular, styles.contact_size, palette.muted);
                cur.y += CONTACT_ADVANCE;
            }
            _ => break,
        }
        rest = &rest[1..];
    }
    cur.y += HEADER_RULE_GAP;
    cur.full_width_rule(0.8, palette.accent);
    cur.y += AFTER_HEADER_RULE;

    let mut after_heading = true;
    for block in rest {
        match block {
            Block::Heading(title) => {
                cur.ensure(HEADING_KEEP);
                cur.y += HEADING_GAP_BEFORE;
                cur.text(
                    ml,
                    &title.to_uppercase(),
                    Face::Bold,
                    styles.heading_size,
                    palette.accent,
                );
                cur.y += HEADING_RULE_GAP;
                cur.full_width_rule(0.4, palette.rule);
                cur.y += AFTER_HEADING;
            }
            Block::Paragraph(text) => {
                let lines =
                    metrics::wrap_text(text, Face::Regular, styles.body_size, styles.content_width());
                for line in lines {
                    cur.ensure(BULLET_KEEP);
                    cur.text(ml, &line, Face::Regular, styles.body_size, palette.body);
                    cur.y += PARAGRAPH_LINE;
                }
            }
            Block::KeyValueRow {
                left,
                right,
                bulleted: false,
            } => {
                if !after_heading {
                    cur.y += ENTRY_GAP;
                }
                cur.ensure(ROW_KEEP);
                cur.text(ml, left, Face::Bold, styles.row_left_size, palette.dark);
                cur.right_aligned(right, Face::Regular, styles.row_right_size, palette.muted);
                cur.y += ROW_ADVANCE;
            }
            Block::KeyValueRow {
                left,
                right,
                bulleted: true,
            } => {
                cur.ensure(CERT_ROW_KEEP);
                cur.text(ml + 1.0, "\u{2022}", Face::Regular, styles.body_size, palette.accent);
                cur.text(ml + 5.0, left, Face::Bold, styles.body_size, palette.dark);
                cur.right_aligned(right, Face::Regular, styles.row_right_size, palette.muted);
                cur.y += CERT_ROW_ADVANCE;
            }
            Block::BulletLine(text) => {
                let bullet_x = ml + BULLET_INDENT;
                let text_x = bullet_x + BULLET_TEXT_GAP;
                let max_width = styles.content_width() - BULLET_INDENT - BULLET_TEXT_GAP;
                let lines = metrics::wrap_text(text, Face::Regular, styles.body_size, max_width);
                for (i, line) in lines.iter().enumerate() {
                    cur.ensure(BULLET_KEEP);
                    if i == 0 {
                        cur.text(
                            bullet_x,
                            "\u{2022}",
                            Face::Regular,
                            styles.body_size,
                            palette.accent,
                        );
                    }
                    cur.text(text_x, line, Face::Regular, styles.body_size, palette.body);
                    cur.y += BULLET_LINE;
                }
            }
            Block::LabeledLine { label, text } => {
                cur.ensure(LABELED_KEEP);
                let label_width = metrics::text_width_mm(label, Face::Bold, styles.body_size);
                cur.text(ml, label, Face::Bold, styles.body_size, palette.dark);
                let content_x = ml + label_width;
                let max_width = styles.content_width() - label_width;
                let lines = metrics::wrap_text(text, Face::Regular, styles.body_size, max_width);
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        cur.ensure(LABELED_LINE);
                    }
                    cur.text(content_x, line, Face::Regular, styles.body_size, palette.body);
                    cur.y += LABELED_LINE;
                }
            }
            Block::Plain { text, style } => match style {
                PlainStyle::Company => {
                    cur.ensure(COMPANY_ADVANCE);
                    cur.text(ml, text, Face::Oblique, styles.company_size, palette.muted);
                    cur.y += COMPANY_ADVANCE;
                }
                PlainStyle::ProjectTitle => {
                    if !after_heading {
                        cur.y += ENTRY_GAP;
                    }
                    cur.ensure(ROW_KEEP);
                    cur.text(ml, text, Face::Bold, styles.row_left_size, palette.dark);
                    cur.y += ROW_ADVANCE;
                }
                PlainStyle::TechStack => {
                    cur.ensure(ROW_ADVANCE);
                    cur.text(ml, text, Face::Oblique, styles.tech_size, palette.muted);
                    cur.y += ROW_ADVANCE;
                }
                PlainStyle::Links => {
                    cur.ensure(BULLET_KEEP);
                    cur.text(
                        ml + LINKS_INDENT,
                        text,
                        Face::Regular,
                        styles.links_size,
                        palette.accent,
                    );
                    cur.y += LINKS_ADVANCE;
                }
                // Header styles only occur in the prefix handled above.
                PlainStyle::Name | PlainStyle::Title | PlainStyle::Contact => {
                    cur.ensure(COMPANY_ADVANCE);
                    cur.text(ml, text, Face::Regular, styles.body_size, palette.body);
                    cur.y += COMPANY_ADVANCE;
                }
            },
        }
        after_heading = matches!(block, Block::Heading(_));
    }

    let mut pages = cur.finish();
    stamp_footers(&mut pages, meta, styles, &palette);
    debug!(pages = pages.len(), "laid out document");
    pages
}

/// Second pass: the total page count is only known now, so the footer is
/// stamped onto finalized pages rather than during the forward fold.
fn stamp_footers(pages: &mut [Page], meta: &RenderMeta, styles: &DocumentStyles, palette: &Palette) {
    let total = pages.len();
    for (index, page) in pages.iter_mut().enumerate() {
        let text = format!("{} · Page {} of {}", meta.display_name, index + 1, total);
        let width = metrics::text_width_mm(&text, Face::Regular, styles.footer_size);
        page.texts.push(TextOp {
            x: (styles.page_width - width) / 2.0,
            y: styles.page_height - FOOTER_FROM_BOTTOM,
            text,
            face: Face::Regular,
            size: styles.footer_size,
            color: palette.light,
        });
    }
}
