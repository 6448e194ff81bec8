use thiserror::Error;

/// Failures surfaced by the renderer backends.
///
/// The composer itself never fails (data-shape problems degrade to omitted
/// lines), so everything here comes from the binary encoding stage and is
/// passed to the caller unchanged.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("DOCX generation failed: {0}")]
    Docx(String),
}
