use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info, warn};
use thiserror::Error;

use super::encoder::{encode, ParseError};
use super::model::Dataset;

/// Failure to turn a CSV source into a [`Dataset`]. Any bad row aborts the
/// whole load; there is no partial result.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV read error near line {line}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("invalid record on line {line}")]
    Record {
        line: u64,
        #[source]
        source: ParseError,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a shopping-sessions CSV file from disk.
///
/// Layout: one header row (ignored), then one session per line with the
/// seventeen feature columns followed by `Revenue`.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file)?;
    info!("loaded {} sessions from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Load sessions from any byte source with the same layout as [`load_file`].
pub fn load_reader<R: Read>(source: R) -> Result<Dataset, LoadError> {
    // Row width is checked by the encoder so the error names the line.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let mut dataset = Dataset::new();
    let mut record = StringRecord::new();

    loop {
        let line = reader.position().line();
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(source) => {
                let line = source.position().map(|p| p.line()).unwrap_or(line);
                return Err(LoadError::Csv { line, source });
            }
        }
        let line = record.position().map(|p| p.line()).unwrap_or(line);
        let (features, label) =
            encode(&record).map_err(|source| LoadError::Record { line, source })?;
        dataset.push(features, label);
    }

    if dataset.is_empty() {
        warn!("input contains no data rows");
    } else {
        let (positive, negative) = dataset.class_counts();
        debug!("class balance: {positive} purchases, {negative} without purchase");
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::model::Label;

    const HEADER: &str = "Administrative,Administrative_Duration,Informational,Informational_Duration,ProductRelated,ProductRelated_Duration,BounceRates,ExitRates,PageValues,SpecialDay,Month,OperatingSystems,Browser,Region,TrafficType,VisitorType,Weekend,Revenue";

    fn csv_text(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        text
    }

    #[test]
    fn header_is_skipped_and_order_kept() {
        let text = csv_text(&[
            "0,0,0,0,1,0,0.2,0.2,0,0,Feb,1,1,1,1,Returning_Visitor,FALSE,FALSE",
            "2,64.6,0,0,19,154.21,0.015,0.024,0,0,June,2,2,1,2,New_Visitor,TRUE,TRUE",
            "1,0,0,0,2,2.66,0.05,0.14,0,0,Dec,3,2,2,3,Other,FALSE,FALSE",
        ]);
        let ds = load_reader(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.features().len(), ds.labels().len());
        assert_eq!(
            ds.labels(),
            &[Label::Negative, Label::Positive, Label::Negative]
        );
        assert_eq!(ds.features()[1][10], 5.0);
        assert_eq!(ds.features()[2][10], 11.0);
        assert_eq!(ds.features()[1][16], 1.0);
    }

    #[test]
    fn header_only_gives_empty_dataset() {
        let ds = load_reader(csv_text(&[]).as_bytes()).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn bad_record_aborts_with_line_number() {
        let text = csv_text(&[
            "0,0,0,0,1,0,0.2,0.2,0,0,Feb,1,1,1,1,Returning_Visitor,FALSE,FALSE",
            "0,0,0,0,1,0,0.2,0.2,0,0,Jun,1,1,1,1,Returning_Visitor,FALSE,FALSE",
        ]);
        let err = load_reader(text.as_bytes()).unwrap_err();
        match err {
            LoadError::Record { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source, ParseError::UnknownMonth("Jun".into()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn nan_feature_aborts_load() {
        let text = csv_text(&[
            "0,0,0,0,1,0,0.2,0.2,0,0,Feb,1,1,1,1,Returning_Visitor,FALSE,FALSE",
            "0,NaN,0,0,1,0,0.2,0.2,0,0,Feb,1,1,1,1,Returning_Visitor,FALSE,FALSE",
        ]);
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Record {
                line: 3,
                source: ParseError::NonFinite {
                    field: "Administrative_Duration",
                    ..
                },
            }
        ));
    }

    #[test]
    fn missing_column_is_rejected() {
        let text = csv_text(&["0,0,0,0,1,0,0.2,0.2,0,0,Feb,1,1,1,1,Returning_Visitor,FALSE"]);
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Record {
                source: ParseError::FieldCount { found: 17, .. },
                ..
            }
        ));
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            csv_text(&[
                "0,0,0,0,1,0,0.2,0.2,0,0,Feb,1,1,1,1,Returning_Visitor,FALSE,FALSE",
                "4,12,1,3.5,10,99.9,0,0.01,12.3,0.8,May,2,4,9,20,Returning_Visitor,TRUE,TRUE",
            ])
            .as_bytes(),
        )
        .unwrap();
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.class_counts(), (1, 1));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("absent.csv"));
    }
}
