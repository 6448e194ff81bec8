//! Flow (DOCX) rendering of the composed block sequence.
//!
//! The word-processor format reflows natively, so there is no pagination
//! here: right-aligned row parts ride on a right tab stop at the maximum
//! tab position and the page model absorbs the rest.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, LineSpacing, PageMargin, Paragraph, Run, RunFonts, Style, StyleType,
    Tab, TabValueType,
};
use tracing::debug;

use crate::block::{Block, PlainStyle, RenderMeta};
use crate::error::ExportError;
use crate::styles::{DocumentStyles, Palette};

/// Right tab stop at the printable width of the page (the "max" position).
const RIGHT_TAB_POS: usize = 9026;
const PAGE_MARGIN_TWIPS: i32 = 720;
const BULLET_INDENT_TWIPS: i32 = 120;

/// Render the block sequence as a reflowable DOCX.
pub fn render_flow(
    blocks: &[Block],
    _meta: &RenderMeta,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let palette = Palette::default();

    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(PAGE_MARGIN_TWIPS)
                .bottom(PAGE_MARGIN_TWIPS)
                .left(PAGE_MARGIN_TWIPS)
                .right(PAGE_MARGIN_TWIPS),
        )
        .add_style(
            Style::new("SectionTitle", StyleType::Paragraph)
                .name("section title")
                .size(half_points(styles.heading_size)),
        );

    for block in blocks {
        docx = docx.add_paragraph(paragraph_for(block, styles, &palette));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    debug!(bytes = buf.get_ref().len(), "encoded docx");
    Ok(buf.into_inner())
}

fn paragraph_for(block: &Block, styles: &DocumentStyles, palette: &Palette) -> Paragraph {
    match block {
        Block::Heading(title) => Paragraph::new()
            .style("SectionTitle")
            .line_spacing(LineSpacing::new().before(240).after(80))
            .add_run(
                run(&title.to_uppercase(), styles)
                    .bold()
                    .underline("single")
                    .size(half_points(styles.heading_size))
                    .color(palette.black.hex()),
            ),
        Block::Paragraph(text) => Paragraph::new()
            .line_spacing(LineSpacing::new().after(80))
            .add_run(
                run(text, styles)
                    .size(half_points(styles.body_size))
                    .color(palette.body.hex()),
            ),
        Block::KeyValueRow {
            left,
            right,
            bulleted,
        } => {
            let left_run = if *bulleted {
                run(&format!("\u{2022} {left}"), styles)
                    .size(half_points(styles.body_size))
                    .color(palette.dark.hex())
            } else {
                run(left, styles)
                    .bold()
                    .size(half_points(styles.row_left_size))
                    .color(palette.dark.hex())
            };
            Paragraph::new()
                .add_tab(Tab::new().val(TabValueType::Right).pos(RIGHT_TAB_POS))
                .line_spacing(LineSpacing::new().before(80).after(20))
                .add_run(left_run)
                .add_run(Run::new().add_tab())
                .add_run(
                    run(right, styles)
                        .size(half_points(styles.row_right_size))
                        .color(palette.muted.hex()),
                )
        }
        Block::BulletLine(text) => Paragraph::new()
            .indent(Some(BULLET_INDENT_TWIPS), None, None, None)
            .line_spacing(LineSpacing::new().after(40))
            .add_run(
                run(&format!("\u{2022} {text}"), styles)
                    .size(half_points(styles.body_size))
                    .color(palette.body.hex()),
            ),
        Block::LabeledLine { label, text } => Paragraph::new()
            .line_spacing(LineSpacing::new().after(40))
            .add_run(
                run(label, styles)
                    .bold()
                    .size(half_points(styles.body_size))
                    .color(palette.dark.hex()),
            )
            .add_run(
                run(text, styles)
                    .size(half_points(styles.body_size))
                    .color(palette.body.hex()),
            ),
        Block::Plain { text, style } => match style {
            PlainStyle::Name => Paragraph::new()
                .align(AlignmentType::Center)
                .line_spacing(LineSpacing::new().after(40))
                .add_run(run(text, styles).bold().size(half_points(styles.name_size))),
            PlainStyle::Title => Paragraph::new()
                .align(AlignmentType::Center)
                .line_spacing(LineSpacing::new().after(40))
                .add_run(
                    run(text, styles)
                        .size(half_points(styles.title_size))
                        .color(palette.muted.hex()),
                ),
            PlainStyle::Contact => Paragraph::new()
                .align(AlignmentType::Center)
                .line_spacing(LineSpacing::new().after(120))
                .add_run(
                    run(text, styles)
                        .size(half_points(styles.contact_size))
                        .color(palette.muted.hex()),
                ),
            PlainStyle::Company => Paragraph::new()
                .line_spacing(LineSpacing::new().after(40))
                .add_run(
                    run(text, styles)
                        .italic()
                        .size(half_points(styles.company_size))
                        .color(palette.muted.hex()),
                ),
            PlainStyle::ProjectTitle => Paragraph::new()
                .line_spacing(LineSpacing::new().before(80).after(20))
                .add_run(
                    run(text, styles)
                        .bold()
                        .size(half_points(styles.row_left_size))
                        .color(palette.dark.hex()),
                ),
            PlainStyle::TechStack => Paragraph::new()
                .line_spacing(LineSpacing::new().after(20))
                .add_run(
                    run(text, styles)
                        .italic()
                        .size(half_points(styles.tech_size))
                        .color(palette.muted.hex()),
                ),
            PlainStyle::Links => Paragraph::new()
                .line_spacing(LineSpacing::new().after(40))
                .add_run(
                    run(text, styles)
                        .size(half_points(styles.links_size))
                        .color(palette.accent.hex()),
                ),
        },
    }
}

fn run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// OOXML sizes are half-points.
fn half_points(size_pt: f64) -> usize {
    (size_pt * 2.0).round() as usize
}
