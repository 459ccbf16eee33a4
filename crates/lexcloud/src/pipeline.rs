//! The explicit request → output pipeline.
//!
//! One run per interaction: extract, filter, aggregate, lay out. Nothing is
//! cached between runs; the stopword set, the table, and the cloud are all
//! recomputed from the request. A failed stage halts the run with its error
//! and produces no partial output.

use lexcloud_analyze::{aggregate, filter, StopwordSet};
use lexcloud_core::{
    CloudLayoutEngine, Document, FrequencyTable, RenderParameters, Result, WordCloud,
};
use lexcloud_extract::ExtractorRegistry;
use tracing::{debug, info};

/// Everything one run needs, collected up front.
#[derive(Debug, Clone)]
pub struct Request {
    pub document: Document,
    pub options: RunOptions,
}

/// Per-run knobs, mirroring the interactive sidebar.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Include the built-in baseline stopword list
    pub use_standard_stopwords: bool,
    /// Extra stopwords, comma-separated
    pub additional_stopwords: String,
    pub render: RenderParameters,
    /// Display truncation for the frequency table (a view, not a mutation)
    pub top_n: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_standard_stopwords: true,
            additional_stopwords: String::new(),
            render: RenderParameters::default(),
            top_n: 20,
        }
    }
}

/// Output of a successful run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub table: FrequencyTable,
    pub cloud: WordCloud,
}

/// Run the full pipeline for one request.
pub fn run(
    request: &Request,
    extractors: &ExtractorRegistry,
    engine: &dyn CloudLayoutEngine,
) -> Result<RunOutput> {
    let document = &request.document;
    info!(
        "processing {} ({} bytes, {})",
        document.name, document.size_bytes, document.mime_type
    );

    let text = extractors.extract(&document.bytes, document.mime_type)?;
    debug!("extracted {} characters", text.len());

    let stopwords = StopwordSet::build(
        request.options.use_standard_stopwords,
        &request.options.additional_stopwords,
    );
    let filtered = filter(&text, &stopwords);
    debug!(
        "{} stopwords active, {} characters after filtering",
        stopwords.len(),
        filtered.len()
    );

    let table = aggregate(&filtered);
    let cloud = engine.layout(&table, &request.options.render)?;
    debug!("{} distinct words, {} placed", table.len(), cloud.words.len());

    Ok(RunOutput { table, cloud })
}
