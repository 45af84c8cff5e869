//! CLI Tooling
//!
//! Command-line interface for importer operations: the import run itself
//! and a read-only source-tree inspection. Commands are idempotent in the
//! documented sense: re-running an import regenerates the whole catalog and
//! recopies images (stale destination copies are never deleted).

use crate::config::{ConfigLoader, ImporterConfig};
use crate::error::ImportError;
use crate::importer::{ImportSummary, Importer};
use crate::inspect::{self, InspectReport};
use crate::logging::LoggingConfig;
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// Doorware CLI - catalog importer for door-hardware image trees
#[derive(Parser)]
#[command(name = "doorware")]
#[command(about = "Catalog importer for door-hardware product image trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (when output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract products from the source tree and regenerate the catalog
    Import {
        /// Source image tree root (overrides config)
        #[arg(long)]
        source: Option<PathBuf>,
        /// Destination directory for copied images (overrides config)
        #[arg(long)]
        dest: Option<PathBuf>,
        /// Catalog output file (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Classify and report without copying images or writing the catalog
        #[arg(long)]
        dry_run: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Report taxonomy roots, model leaves, and images in the source tree
    Inspect {
        /// Source image tree root (overrides config)
        #[arg(long)]
        source: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// CLI context holding the resolved configuration
pub struct CliContext {
    config: ImporterConfig,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ImportError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self { config })
    }

    /// Build a context from an already-resolved configuration (tests).
    pub fn with_config(config: ImporterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ImporterConfig {
        &self.config
    }

    /// Logging configuration with CLI flags applied over the config file.
    pub fn logging_config(&self, cli: &Cli) -> LoggingConfig {
        let mut logging = self.config.logging.clone();
        if let Some(level) = &cli.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &cli.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &cli.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &cli.log_file {
            logging.file = Some(file.clone());
        }
        logging
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ImportError> {
        match command {
            Commands::Import {
                source,
                dest,
                catalog,
                dry_run,
                format,
            } => {
                let mut config = self.config.clone();
                if let Some(source) = source {
                    config.source_dir = source.clone();
                }
                if let Some(dest) = dest {
                    config.dest_dir = dest.clone();
                }
                if let Some(catalog) = catalog {
                    config.catalog_file = catalog.clone();
                }
                let outcome = Importer::new(config).run(*dry_run)?;
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&outcome.summary)?)
                } else {
                    Ok(format_import_summary_text(&outcome.summary))
                }
            }
            Commands::Inspect { source, format } => {
                let source_dir = source.as_ref().unwrap_or(&self.config.source_dir);
                let report = inspect::inspect_source(source_dir)?;
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&report)?)
                } else {
                    Ok(format_inspect_report_text(&report))
                }
            }
        }
    }
}

/// Format a section heading with bold/underline. Respects NO_COLOR and TTY.
fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format an import summary as human-readable text.
pub fn format_import_summary_text(summary: &ImportSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Import")));
    if summary.dry_run {
        out.push_str("  Mode: dry run (no files written)\n");
    }
    out.push_str(&format!("  Products extracted: {}\n", summary.products));
    out.push_str(&format!("  Images copied: {}\n", summary.images_copied));
    if summary.copy_failures > 0 {
        out.push_str(&format!(
            "  Copy failures (products dropped): {}\n",
            summary.copy_failures
        ));
    }
    out.push_str(&format!("  Catalog: {}\n", summary.catalog_file));
    out
}

/// Format an inspect report as human-readable text.
pub fn format_inspect_report_text(report: &InspectReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading("Source tree")
    ));
    out.push_str(&format!("  Root: {}\n\n", report.source_dir));
    if report.roots.is_empty() {
        out.push_str("No top-level folders found.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![
        "Folder",
        "Mapped",
        "Category",
        "Subcategory",
        "Models",
        "Images",
    ]);
    for row in &report.roots {
        table.add_row(vec![
            row.folder.clone(),
            if row.recognized { "yes" } else { "no" }.to_string(),
            row.category.clone().unwrap_or_else(|| "-".to_string()),
            row.subcategory.clone().unwrap_or_else(|| "-".to_string()),
            row.model_leaves.to_string(),
            row.images.to_string(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!(
        "Total: {} model leaves, {} unmapped root(s) will be skipped.\n",
        report.total_model_leaves, report.unmapped_roots
    ));
    out
}
