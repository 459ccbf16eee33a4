//! Request-object pipeline and configuration for the lexcloud CLI.
//!
//! The binary in `main.rs` is a thin shell over [`pipeline::run`]: widget
//! state (flags and config file values) is collected into an explicit
//! [`pipeline::Request`], and everything downstream is a pure function of
//! that request plus the injected extractor registry and layout engine.

pub mod config;
pub mod pipeline;
