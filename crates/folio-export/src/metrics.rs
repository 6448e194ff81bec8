//! Text measurement for the paged backend.
//!
//! Advance widths for the standard Helvetica family in 1/1000 em units, as
//! published in the Adobe AFM files. Oblique shares the regular widths.
//! These are exact for the printable ASCII range; anything outside it is
//! approximated with the average lowercase advance, which is all the
//! Latin-1 supplement needs for line-breaking purposes.

/// Font face of the paged backend's standard text fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
    Oblique,
}

pub const PT_TO_MM: f64 = 25.4 / 72.0;

/// Helvetica advances for `U+0020..=U+007E`.
const WIDTHS_REGULAR: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // sp..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, // 'A'..'P'
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'Q'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, // 'a'..'p'
    556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'q'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Helvetica-Bold advances for `U+0020..=U+007E`.
const WIDTHS_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // sp..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, // 'A'..'P'
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'Q'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, // 'a'..'p'
    611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'q'..'z'
    389, 280, 389, 584, // '{'..'~'
];

fn advance(face: Face, c: char) -> u16 {
    let table = match face {
        Face::Bold => &WIDTHS_BOLD,
        _ => &WIDTHS_REGULAR,
    };
    let code = c as u32;
    if (0x20..=0x7e).contains(&code) {
        table[(code - 0x20) as usize]
    } else {
        match face {
            Face::Bold => 611,
            _ => 556,
        }
    }
}

/// Width of `text` drawn at `size` points, in millimetres.
pub fn text_width_mm(text: &str, face: Face, size: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(advance(face, c))).sum();
    f64::from(units) / 1000.0 * size * PT_TO_MM
}

/// Greedy word wrap to `max_width` millimetres.
///
/// A single word wider than the limit gets a line of its own rather than
/// being broken mid-word. Empty input yields one empty line so callers can
/// still advance the cursor uniformly.
pub fn wrap_text(text: &str, face: Face, size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if current.is_empty() || text_width_mm(&candidate, face, size) <= max_width {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
