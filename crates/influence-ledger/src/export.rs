//! CSV export of the ledger.
//!
//! Columns are [`Sample::FIELD_NAMES`] in declared order, so the header is
//! the same for every export, including an empty one. Output is fully
//! determined by the samples: two exports of the same ledger are
//! byte-identical.

use influence_core::Sample;

use crate::error::LedgerError;

pub const EXPORT_FILE_NAME: &str = "influence_samples.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// A finished CSV download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Encodes `samples` as CSV: header row, then one row per sample in order.
///
/// # Errors
///
/// Returns [`LedgerError`] if the CSV writer fails to flush its buffer.
pub fn export_csv(samples: &[Sample]) -> Result<CsvExport, LedgerError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(Sample::FIELD_NAMES)?;
    for sample in samples {
        writer.write_record(sample.field_values())?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| LedgerError::Io(e.into_error()))?;

    Ok(CsvExport {
        file_name: EXPORT_FILE_NAME,
        mime_type: EXPORT_MIME_TYPE,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::tests::sample;
    use crate::ledger::Ledger;

    fn as_text(export: &CsvExport) -> &str {
        std::str::from_utf8(&export.bytes).expect("CSV should be UTF-8")
    }

    #[test]
    fn empty_ledger_exports_header_only() {
        let export = export_csv(&[]).expect("empty export should succeed");
        let text = as_text(&export);
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.trim_end(), Sample::FIELD_NAMES.join(","));
    }

    #[test]
    fn export_has_one_row_per_sample_in_order() {
        let mut ledger = Ledger::new();
        for n in 0..5 {
            ledger.append(sample(&format!("sample {n}")));
        }
        let export = ledger.export_csv().unwrap();

        let mut reader = csv::Reader::from_reader(export.bytes.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), Sample::FIELD_NAMES.len());

        let title_col = headers.iter().position(|h| h == "mediaTitle").unwrap();
        let titles: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[title_col].to_string())
            .collect();
        assert_eq!(
            titles,
            ["sample 0", "sample 1", "sample 2", "sample 3", "sample 4"]
        );
    }

    #[test]
    fn export_is_idempotent() {
        let mut ledger = Ledger::new();
        ledger.append(sample("one"));
        ledger.append(sample("two"));
        let first = ledger.export_csv().unwrap();
        let second = ledger.export_csv().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn export_renders_dates_and_scores_as_text() {
        let mut s = sample("typed");
        s.ethos_score = 1.0;
        let export = export_csv(&[s]).unwrap();
        let text = as_text(&export);
        let row = text.lines().nth(1).unwrap();
        assert!(row.contains(",2025-03-01,"), "row: {row}");
        assert!(row.contains(",0.5,"), "row: {row}");
        assert!(row.contains(",1.0,"), "row: {row}");
        assert!(row.starts_with("Lebanon,Print,typed,"), "row: {row}");
    }

    #[test]
    fn export_quotes_delimiters_quotes_and_newlines() {
        let mut s = sample("Debate, part \"two\"");
        s.persuasive_note = "line one\nline two".to_string();
        let export = export_csv(&[s]).unwrap();

        let text = as_text(&export);
        assert!(text.contains("\"Debate, part \"\"two\"\"\""));

        let mut reader = csv::Reader::from_reader(export.bytes.as_slice());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[2], "Debate, part \"two\"");
        assert_eq!(&record[21], "line one\nline two");
    }

    #[test]
    fn export_carries_download_metadata() {
        let export = export_csv(&[]).unwrap();
        assert_eq!(export.file_name, "influence_samples.csv");
        assert_eq!(export.mime_type, "text/csv");
    }
}
