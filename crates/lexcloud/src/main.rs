//! # lexcloud CLI
//!
//! Command-line interface for lexcloud, a word-frequency cloud generator.
//!
//! Upload a plain-text, PDF, or docx document; lexcloud strips stopwords,
//! counts word frequencies, lays out a cloud, and writes the image and an
//! optional CSV frequency table.
//!
//! ## Commands
//!
//! - `lexcloud generate <FILE>` - render the word cloud image
//! - `lexcloud frequencies <FILE>` - print the frequency table
//! - `lexcloud config` - show or initialize configuration
//!
//! ## Examples
//!
//! ```bash
//! # Render a cloud from a PDF with two extra stopwords
//! lexcloud generate report.pdf --stopwords "chapter,figure" --output cloud.png
//!
//! # Frequency table as JSON
//! lexcloud frequencies notes.txt --format json
//!
//! # Full CSV next to an SVG cloud
//! lexcloud generate essay.docx --format svg --table frequencies.csv
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lexcloud::config::Config;
use lexcloud::pipeline::{self, Request, RunOptions};
use lexcloud_core::{Document, ExportFormat, FrequencyEntry, FrequencyTable, MimeType};
use lexcloud_export::{export_frequency_table, ImageExporter};
use lexcloud_extract::ExtractorRegistry;
use lexcloud_render::FlowLayoutEngine;

#[derive(Parser)]
#[command(name = "lexcloud")]
#[command(about = "Generate word-frequency clouds from documents")]
#[command(version)]
struct Cli {
    /// Path to config file (default: platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the word cloud image for a document
    Generate {
        /// Input document (.txt, .pdf, or .docx)
        file: PathBuf,

        /// Declared MIME type (inferred from the extension when omitted)
        #[arg(long)]
        mime: Option<String>,

        /// Image format: png, jpeg, svg, or pdf
        #[arg(short, long)]
        format: Option<String>,

        /// Output path (default: wordcloud.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write the full frequency table as CSV
        #[arg(long)]
        table: Option<PathBuf>,

        /// Canvas width in pixels (400-2000)
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in pixels (200-2000)
        #[arg(long)]
        height: Option<u32>,

        /// Background color, #RRGGBB
        #[arg(long)]
        background: Option<String>,

        /// Contour color, #RRGGBB
        #[arg(long)]
        contour: Option<String>,

        /// Maximum words on the cloud (50-500)
        #[arg(long)]
        max_words: Option<usize>,

        /// Additional stopwords, comma-separated
        #[arg(short, long)]
        stopwords: Option<String>,

        /// Skip the built-in baseline stopword list
        #[arg(long)]
        no_standard_stopwords: bool,

        /// TTF/OTF for raster formats (system fonts are probed when omitted)
        #[arg(long)]
        font: Option<PathBuf>,
    },

    /// Print the word-frequency table for a document
    Frequencies {
        /// Input document (.txt, .pdf, or .docx)
        file: PathBuf,

        /// Declared MIME type (inferred from the extension when omitted)
        #[arg(long)]
        mime: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Rows to print (the table itself is never truncated)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Also write the full frequency table as CSV
        #[arg(long)]
        table: Option<PathBuf>,

        /// Additional stopwords, comma-separated
        #[arg(short, long)]
        stopwords: Option<String>,

        /// Skip the built-in baseline stopword list
        #[arg(long)]
        no_standard_stopwords: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Print sample configuration file
    Init,
    /// Show config file path
    Path,
}

/// JSON output for the frequencies command.
#[derive(Serialize)]
struct FrequencyOutput {
    file: String,
    distinct_words: usize,
    entries: Vec<FrequencyEntry>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = Config::load_from(cli.config.clone()).context("Failed to load config")?;

    match cli.command {
        Commands::Generate {
            file,
            mime,
            format,
            output,
            table,
            width,
            height,
            background,
            contour,
            max_words,
            stopwords,
            no_standard_stopwords,
            font,
        } => {
            let mut render = config.render.clone();
            if let Some(width) = width {
                render.width = width;
            }
            if let Some(height) = height {
                render.height = height;
            }
            if let Some(background) = background {
                render.background = background;
            }
            if let Some(contour) = contour {
                render.contour = contour;
            }
            if let Some(max_words) = max_words {
                render.max_words = max_words;
            }

            let options = RunOptions {
                use_standard_stopwords: config.stopwords.use_standard && !no_standard_stopwords,
                additional_stopwords: merge_stopwords(&config.stopwords.additional, stopwords),
                render: render.to_parameters()?,
                top_n: config.display.top_n,
            };

            let export_format: ExportFormat = match format {
                Some(token) => token
                    .parse()
                    .with_context(|| format!("bad export format {token:?}"))?,
                None => config.export.to_format()?,
            };

            let document = load_document(&file, mime.as_deref())?;
            println!(
                "File: {} ({} bytes, {})",
                document.name, document.size_bytes, document.mime_type
            );

            let run = run_pipeline(document, options)?;

            let exporter = match font.or_else(|| config.export.font.clone()) {
                Some(path) => ImageExporter::with_font_path(path),
                None => ImageExporter::new(),
            };
            let image_bytes = exporter
                .export(&run.output.cloud, export_format)
                .context("Image export failed")?;

            let output_path = output
                .unwrap_or_else(|| PathBuf::from(format!("wordcloud.{}", export_format.extension())));
            std::fs::write(&output_path, &image_bytes)
                .with_context(|| format!("failed to write {}", output_path.display()))?;
            info!(
                "wrote {} ({} bytes, {} words placed)",
                output_path.display(),
                image_bytes.len(),
                run.output.cloud.words.len()
            );

            if let Some(table_path) = table {
                write_csv(&run.output.table, &table_path)?;
            }

            print_table(&run.output.table, run.top_n);
        }

        Commands::Frequencies {
            file,
            mime,
            format,
            limit,
            table,
            stopwords,
            no_standard_stopwords,
        } => {
            let options = RunOptions {
                use_standard_stopwords: config.stopwords.use_standard && !no_standard_stopwords,
                additional_stopwords: merge_stopwords(&config.stopwords.additional, stopwords),
                render: config.render.to_parameters()?,
                top_n: limit.unwrap_or(config.display.top_n),
            };

            let document = load_document(&file, mime.as_deref())?;
            let file_name = document.name.clone();
            let run = run_pipeline(document, options)?;

            if let Some(table_path) = table {
                write_csv(&run.output.table, &table_path)?;
            }

            match format {
                OutputFormat::Json => {
                    let output = FrequencyOutput {
                        file: file_name,
                        distinct_words: run.output.table.len(),
                        entries: run.output.table.top(run.top_n).to_vec(),
                    };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Text => {
                    println!(
                        "{} distinct words in {}\n",
                        run.output.table.len(),
                        file_name
                    );
                    print_table(&run.output.table, run.top_n);
                }
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!(
                    "{}",
                    toml::to_string_pretty(&config).context("Failed to serialize config")?
                );
            }
            ConfigAction::Init => {
                println!("{}", Config::sample_toml());
            }
            ConfigAction::Path => {
                if let Some(path) = Config::config_path() {
                    println!("{}", path.display());
                } else {
                    println!("Could not determine config directory");
                }
            }
        },
    }

    Ok(())
}

struct PipelineRun {
    output: pipeline::RunOutput,
    top_n: usize,
}

/// Assemble the request and run the pipeline with the stock collaborators.
fn run_pipeline(document: Document, options: RunOptions) -> Result<PipelineRun> {
    let top_n = options.top_n;
    let request = Request { document, options };
    let registry = ExtractorRegistry::with_defaults();
    let engine = FlowLayoutEngine::new();
    let output = pipeline::run(&request, &registry, &engine)?;
    Ok(PipelineRun { output, top_n })
}

/// Read the file and attach its declared type.
fn load_document(path: &Path, mime: Option<&str>) -> Result<Document> {
    let mime_type = declared_mime(path, mime)?;
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Document::new(name, mime_type, bytes))
}

/// Resolve the declared MIME type from the flag or the file extension.
fn declared_mime(path: &Path, mime: Option<&str>) -> Result<MimeType> {
    match mime {
        Some(declared) => Ok(MimeType::from_declared(declared)?),
        None => {
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                bail!(
                    "cannot infer the type of {} (no extension); pass --mime",
                    path.display()
                );
            };
            Ok(MimeType::from_extension(ext)?)
        }
    }
}

/// Merge config-file stopwords with the CLI flag into one comma-separated list.
fn merge_stopwords(configured: &[String], flag: Option<String>) -> String {
    let mut parts: Vec<String> = configured.to_vec();
    if let Some(flag) = flag {
        parts.push(flag);
    }
    parts.join(",")
}

fn write_csv(table: &FrequencyTable, path: &Path) -> Result<()> {
    let csv_bytes = export_frequency_table(table).context("CSV export failed")?;
    std::fs::write(path, &csv_bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {} ({} rows)", path.display(), table.len());
    Ok(())
}

fn print_table(table: &FrequencyTable, limit: usize) {
    if table.is_empty() {
        println!("No words left after filtering.");
        return;
    }

    println!("{:<24} {:>8}", "Word", "Count");
    for entry in table.top(limit) {
        println!("{:<24} {:>8}", entry.word, entry.count);
    }
    if table.len() > limit {
        println!("... {} more (full table via --table)", table.len() - limit);
    }
}
