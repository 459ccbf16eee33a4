//! # lexcloud-render
//!
//! The in-tree [`CloudLayoutEngine`](lexcloud_core::CloudLayoutEngine)
//! implementation.
//!
//! Word-cloud layout proper (spiral packing, collision maps, rotation) is an
//! external concern behind the engine trait. [`FlowLayoutEngine`] is the
//! shipped engine: a deterministic row-flow placement that scales font size
//! with count and wraps words into rows until the canvas is full. It has no
//! font dependency (word widths are estimated from the font size), so the
//! same table and parameters always produce the same layout.

pub mod flow;

pub use flow::FlowLayoutEngine;
