//! # lexcloud-extract
//!
//! Text extraction from uploaded documents for the lexcloud pipeline.
//!
//! This crate provides the extraction layer that turns raw upload bytes into
//! plain text for downstream stopword filtering and frequency aggregation.
//!
//! ## Supported Formats
//!
//! | Extractor | MIME type | Behavior |
//! |-----------|-----------|----------|
//! | [`PlainTextExtractor`] | `text/plain` | Strict UTF-8 decode |
//! | [`PdfExtractor`] | `application/pdf` | Per-page text in document order, pages joined with a space |
//! | [`DocxExtractor`] | `application/vnd.openxmlformats-officedocument.wordprocessingml.document` | Paragraph text in document order, joined with a space |
//!
//! ## Usage
//!
//! ```rust
//! use lexcloud_core::MimeType;
//! use lexcloud_extract::ExtractorRegistry;
//!
//! let registry = ExtractorRegistry::with_defaults();
//! let text = registry.extract(b"hello word cloud", MimeType::PlainText).unwrap();
//! assert_eq!(text, "hello word cloud");
//! ```
//!
//! A declared type with no registered extractor fails with
//! [`ExtractError::UnsupportedType`](lexcloud_core::ExtractError) before any
//! parsing is attempted.

pub mod docx;
pub mod pdf;
pub mod registry;
pub mod text;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use registry::ExtractorRegistry;
pub use text::PlainTextExtractor;
