//! # lexcloud-analyze
//!
//! Stopword filtering and word-frequency aggregation for the lexcloud
//! pipeline.
//!
//! Both stages are pure functions over whitespace-delimited tokens:
//!
//! - [`StopwordSet`] / [`filter`]: drop tokens whose lowercase form is in the
//!   active set, preserving the order of the survivors
//! - [`aggregate`]: count surviving tokens (case-sensitively) into a
//!   [`FrequencyTable`](lexcloud_core::FrequencyTable) sorted by count
//!   descending with stable tie order
//!
//! Note the deliberate asymmetry: stopword matching folds case, counting
//! does not. `"The"` and `"the"` are distinct table entries unless both were
//! filtered out.

pub mod frequency;
pub mod stopwords;

pub use frequency::aggregate;
pub use stopwords::{filter, StopwordSet};
