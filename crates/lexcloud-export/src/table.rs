//! Frequency-table CSV export.

use lexcloud_core::{ExportError, FrequencyTable};

/// Serialize the full frequency table as CSV.
///
/// Header row `Word,Count`, one row per entry in table order. The export
/// always covers the whole table, even when the display view is truncated.
pub fn export_frequency_table(table: &FrequencyTable) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["Word", "Count"])
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    for entry in table.iter() {
        writer
            .write_record([entry.word.as_str(), &entry.count.to_string()])
            .map_err(|e| ExportError::Encode(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexcloud_core::FrequencyEntry;

    fn table(pairs: &[(&str, u64)]) -> FrequencyTable {
        FrequencyTable {
            entries: pairs
                .iter()
                .map(|(word, count)| FrequencyEntry {
                    word: (*word).to_string(),
                    count: *count,
                })
                .collect(),
        }
    }

    #[test]
    fn test_export_has_header_and_rows() {
        let bytes =
            export_frequency_table(&table(&[("cat", 2), ("sat", 1)])).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "Word,Count\ncat,2\nsat,1\n");
    }

    #[test]
    fn test_export_empty_table_is_header_only() {
        let bytes = export_frequency_table(&FrequencyTable::default()).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Word,Count\n");
    }

    #[test]
    fn test_export_round_trips_through_csv_reader() {
        let original = table(&[("cat", 2), ("sat", 1), ("mat", 1), ("ran", 1)]);
        let bytes = export_frequency_table(&original).unwrap();

        let mut reader = csv::Reader::from_reader(&bytes[..]);
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec!["Word", "Count"])
        );

        let recovered: Vec<(String, u64)> = reader
            .records()
            .map(|r| {
                let record = r.unwrap();
                (record[0].to_string(), record[1].parse().unwrap())
            })
            .collect();
        let expected: Vec<(String, u64)> = original
            .iter()
            .map(|e| (e.word.clone(), e.count))
            .collect();
        assert_eq!(recovered, expected);
    }

    #[test]
    fn test_export_quotes_words_with_commas() {
        // Tokens are whitespace-delimited, so embedded commas are possible.
        let bytes = export_frequency_table(&table(&[("a,b", 1)])).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "Word,Count\n\"a,b\",1\n");

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "a,b");
    }

    #[test]
    fn test_export_has_no_row_limit() {
        let entries: Vec<(String, u64)> = (0..1000).map(|i| (format!("w{i}"), 1)).collect();
        let borrowed: Vec<(&str, u64)> =
            entries.iter().map(|(w, c)| (w.as_str(), *c)).collect();
        let bytes = export_frequency_table(&table(&borrowed)).unwrap();
        let line_count = bytes.iter().filter(|&&b| b == b'\n').count();
        assert_eq!(line_count, 1001);
    }
}
