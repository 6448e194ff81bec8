//! PDF encoding of the laid-out pages.
//!
//! The three standard Helvetica faces are referenced as non-embedded Type1
//! fonts; text bytes are mapped onto Windows-1252, which is what viewers
//! apply to the base fonts, with `?` standing in for unmappable glyphs.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use tracing::debug;

use crate::block::{Block, RenderMeta};
use crate::error::ExportError;
use crate::layout::{self, Page};
use crate::metrics::Face;
use crate::styles::{DocumentStyles, Rgb};

const MM_TO_PT: f32 = 72.0 / 25.4;

/// Render the block sequence as a paginated PDF.
pub fn render_paged(
    blocks: &[Block],
    meta: &RenderMeta,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let pages = layout::lay_out(blocks, meta, styles);
    encode(&pages, styles)
}

fn encode(pages: &[Page], styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut pdf = Pdf::new();

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let font_regular = Ref::new(3);
    let font_bold = Ref::new(4);
    let font_oblique = Ref::new(5);

    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.type1_font(font_regular).base_font(Name(b"Helvetica"));
    pdf.type1_font(font_bold).base_font(Name(b"Helvetica-Bold"));
    pdf.type1_font(font_oblique)
        .base_font(Name(b"Helvetica-Oblique"));

    let mut next_id = 6;
    let mut page_refs = Vec::with_capacity(pages.len());
    for page in pages {
        let page_id = Ref::new(next_id);
        let content_id = Ref::new(next_id + 1);
        next_id += 2;

        pdf.stream(content_id, &encode_page(page, styles));
        page_refs.push((page_id, content_id));
    }

    let width_pt = styles.page_width as f32 * MM_TO_PT;
    let height_pt = styles.page_height as f32 * MM_TO_PT;
    for (page_id, content_id) in &page_refs {
        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, width_pt, height_pt));
        page.parent(page_tree_id);
        page.contents(*content_id);
        {
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(Name(b"F1"), font_regular);
            fonts.pair(Name(b"F2"), font_bold);
            fonts.pair(Name(b"F3"), font_oblique);
        }
        page.finish();
    }

    pdf.pages(page_tree_id)
        .kids(page_refs.iter().map(|(page_id, _)| *page_id))
        .count(page_refs.len() as i32);

    debug!(pages = pages.len(), "encoded pdf");
    Ok(pdf.finish())
}

fn encode_page(page: &Page, styles: &DocumentStyles) -> Vec<u8> {
    let mut content = Content::new();
    let page_height = styles.page_height;

    for rule in &page.rules {
        let (r, g, b) = channels(rule.color);
        content
            .set_stroke_rgb(r, g, b)
            .set_line_width(rule.line_width as f32 * MM_TO_PT)
            .move_to(mm(rule.x1), mm(page_height - rule.y))
            .line_to(mm(rule.x2), mm(page_height - rule.y))
            .stroke();
    }

    for text in &page.texts {
        let (r, g, b) = channels(text.color);
        content
            .begin_text()
            .set_font(font_name(text.face), text.size as f32)
            .set_fill_rgb(r, g, b)
            .next_line(mm(text.x), mm(page_height - text.y))
            .show(Str(&encode_win_ansi(&text.text)))
            .end_text();
    }

    content.finish()
}

fn mm(value: f64) -> f32 {
    value as f32 * MM_TO_PT
}

fn channels(color: Rgb) -> (f32, f32, f32) {
    (
        f32::from(color.0) / 255.0,
        f32::from(color.1) / 255.0,
        f32::from(color.2) / 255.0,
    )
}

fn font_name(face: Face) -> Name<'static> {
    match face {
        Face::Regular => Name(b"F1"),
        Face::Bold => Name(b"F2"),
        Face::Oblique => Name(b"F3"),
    }
}

/// Map a char onto the Windows-1252 byte PDF viewers use for non-embedded
/// base fonts. Unmappable glyphs degrade to `?`; the composed text itself
/// stays untouched upstream.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\u{20ac}' => 0x80,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        c => {
            let code = c as u32;
            if code <= 0xff && !(0x80..=0x9f).contains(&code) {
                code as u8
            } else {
                b'?'
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_ansi_maps_typographic_chars() {
        assert_eq!(win_ansi_byte('\u{2022}'), 0x95);
        assert_eq!(win_ansi_byte('\u{2013}'), 0x96);
        assert_eq!(win_ansi_byte('A'), b'A');
        assert_eq!(win_ansi_byte('\u{00e9}'), 0xe9);
        assert_eq!(win_ansi_byte('\u{4e16}'), b'?');
    }
}
