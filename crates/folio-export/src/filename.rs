use folio_core::language::Lang;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }
}

/// Download name surfaced to the caller:
/// `CV_<name with whitespace runs collapsed to underscores>_<LANG>.<ext>`.
pub fn suggest_filename(name: &str, lang: Lang, format: ExportFormat) -> String {
    let squashed = name.split_whitespace().collect::<Vec<_>>().join("_");
    format!(
        "CV_{}_{}.{}",
        squashed,
        lang.code().to_uppercase(),
        format.extension(),
    )
}
