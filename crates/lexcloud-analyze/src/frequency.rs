//! Word-frequency aggregation.

use lexcloud_core::{FrequencyEntry, FrequencyTable};
use rustc_hash::FxHashMap;

/// Count whitespace-delimited tokens into a frequency table.
///
/// Tokens are grouped by exact string (case-sensitive), counted, and sorted
/// by count descending. Equal counts keep first-appearance order: the sort
/// is stable over insertion order, so `"sat"` before `"mat"` in the text
/// stays `"sat"` before `"mat"` in the table.
#[must_use]
pub fn aggregate(text: &str) -> FrequencyTable {
    let mut entries: Vec<FrequencyEntry> = Vec::new();
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();

    for token in text.split_whitespace() {
        if let Some(&i) = index.get(token) {
            entries[i].count += 1;
        } else {
            index.insert(token, entries.len());
            entries.push(FrequencyEntry {
                word: token.to_string(),
                count: 1,
            });
        }
    }

    // sort_by is stable; ties keep first-appearance order
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    FrequencyTable { entries }
}
