//! # lexcloud-core
//!
//! Core types and traits for lexcloud, a word-frequency cloud generator for
//! uploaded documents.
//!
//! This crate provides the foundational abstractions used throughout lexcloud:
//!
//! - **Text Extraction**: [`TextExtractor`] trait for turning document bytes into text
//! - **Cloud Layout**: [`CloudLayoutEngine`] trait for placing words on a canvas
//!
//! ## Architecture
//!
//! The crate is organized around a single-direction pipeline:
//!
//! ```text
//! Document bytes → TextExtractor → stopword filter → FrequencyTable
//!                                                  → CloudLayoutEngine → WordCloud → export
//! ```
//!
//! Every stage is synchronous and recomputed per run; nothing is cached or
//! mutated across runs.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Document`] | An uploaded file: name, size, declared type, raw bytes |
//! | [`MimeType`] | The closed set of accepted upload types |
//! | [`FrequencyTable`] | Distinct tokens with counts, sorted by count descending |
//! | [`RenderParameters`] | Canvas size, colors, and word cap for the cloud |
//! | [`WordCloud`] | A laid-out cloud: placed words on a colored canvas |
//! | [`ExportFormat`] | The closed set of image export formats |
//!
//! ## Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`TextExtractor`] | Extract text from document bytes by format |
//! | [`CloudLayoutEngine`] | Place the most frequent words on the canvas |
//!
//! Both traits are seams: the shipped implementations live in
//! `lexcloud-extract` and `lexcloud-render`, and test doubles or alternate
//! engines substitute freely.
//!
//! ## Related Crates
//!
//! - `lexcloud-extract`: plain-text, PDF, and docx extractors plus the registry
//! - `lexcloud-analyze`: stopword sets, filtering, and frequency aggregation
//! - `lexcloud-render`: the deterministic flow-layout engine
//! - `lexcloud-export`: image (png/jpeg/svg/pdf) and CSV serialization

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, ExportError, ExtractError, RenderError, Result};
pub use traits::*;
pub use types::*;
