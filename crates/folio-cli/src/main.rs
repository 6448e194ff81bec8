//! folio
//!
//! Command-line export surface: loads a content snapshot and writes the
//! rendered CV files, standing in for the admin dashboard's export buttons.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr, bail};
use tracing::info;

use folio_core::language::Lang;
use folio_core::models::bundle::ContentBundle;
use folio_export::block::RenderMeta;
use folio_export::compose::compose;
use folio_export::filename::{ExportFormat, suggest_filename};
use folio_export::styles::DocumentStyles;
use folio_export::{docx, pdf};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Export a portfolio content bundle as a CV document")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the CV as PDF and/or DOCX
    Export {
        /// Content bundle JSON; the built-in empty bundle when omitted
        #[arg(short, long)]
        bundle: Option<PathBuf>,

        /// Display language (en or id)
        #[arg(short, long, default_value = "en")]
        lang: Lang,

        /// Output format: pdf, docx or both
        #[arg(short, long, default_value = "both")]
        format: String,

        /// Directory for the exported files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Export {
            bundle,
            lang,
            format,
            out_dir,
        } => export(bundle, lang, &format, &out_dir),
    }
}

fn export(bundle_path: Option<PathBuf>, lang: Lang, format: &str, out_dir: &PathBuf) -> Result<()> {
    let bundle = match &bundle_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read bundle {}", path.display()))?;
            ContentBundle::from_json_str(&raw)?
        }
        None => ContentBundle::default(),
    };

    let formats: Vec<ExportFormat> = match format {
        "pdf" => vec![ExportFormat::Pdf],
        "docx" => vec![ExportFormat::Docx],
        "both" => vec![ExportFormat::Pdf, ExportFormat::Docx],
        other => bail!("unsupported format: {other} (expected pdf, docx or both)"),
    };

    let blocks = compose(&bundle, lang);
    let name = lang.resolve(&bundle.profile.name_en, &bundle.profile.name_id);
    let meta = RenderMeta {
        display_name: name.to_string(),
    };
    let styles = DocumentStyles::default();

    fs::create_dir_all(out_dir)?;
    for fmt in formats {
        let bytes = match fmt {
            ExportFormat::Pdf => pdf::render_paged(&blocks, &meta, &styles)?,
            ExportFormat::Docx => docx::render_flow(&blocks, &meta, &styles)?,
        };
        let path = out_dir.join(suggest_filename(name, lang, fmt));
        fs::write(&path, &bytes)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote export");
    }
    Ok(())
}
