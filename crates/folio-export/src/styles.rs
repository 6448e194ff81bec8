use serde::{Deserialize, Serialize};

/// 24-bit ink color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Hex form without `#`, as OOXML wants it.
    pub fn hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Ink palette shared by both backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    pub black: Rgb,
    pub dark: Rgb,
    pub body: Rgb,
    pub muted: Rgb,
    pub light: Rgb,
    pub accent: Rgb,
    pub rule: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            black: Rgb(25, 25, 25),
            dark: Rgb(45, 45, 45),
            body: Rgb(55, 55, 55),
            muted: Rgb(120, 120, 120),
            light: Rgb(160, 160, 160),
            accent: Rgb(37, 99, 235),
            rule: Rgb(200, 205, 215),
        }
    }
}

/// Styling knobs shared by both renderer backends.
///
/// Font sizes are points. Page geometry is millimetres, A4 portrait by
/// default. The DOCX backend converts sizes to half-points and the margins
/// to twips; the PDF backend lays text out in page coordinates directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    pub page_width: f64,
    pub page_height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,

    /// Font for flow-document text (e.g. "Calibri").
    pub body_font: String,

    pub name_size: f64,
    pub title_size: f64,
    pub contact_size: f64,
    pub heading_size: f64,
    pub body_size: f64,
    pub row_left_size: f64,
    pub row_right_size: f64,
    pub company_size: f64,
    pub tech_size: f64,
    pub links_size: f64,
    pub footer_size: f64,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin_left: 18.0,
            margin_right: 18.0,
            margin_top: 16.0,
            margin_bottom: 16.0,
            body_font: "Calibri".to_string(),
            name_size: 24.0,
            title_size: 11.0,
            contact_size: 8.5,
            heading_size: 10.5,
            body_size: 9.0,
            row_left_size: 10.0,
            row_right_size: 8.5,
            company_size: 9.0,
            tech_size: 8.5,
            links_size: 7.5,
            footer_size: 7.0,
        }
    }
}

impl DocumentStyles {
    /// Horizontal width available to content, in millimetres.
    pub fn content_width(&self) -> f64 {
        self.page_width - self.margin_left - self.margin_right
    }
}
