//! Delimited-text reader backed by the Arrow CSV decoder.
//!
//! Every column is read as nullable UTF-8, so cells keep their raw text and an
//! empty cell comes back as `None`. Batches are then unrolled row by row into
//! [`RawRecord`]s, preserving file order. Files with ragged rows are re-read
//! with a flexible row reader instead of being rejected.

use arrow::csv::ReaderBuilder as CsvReaderBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow_array::{Array, StringArray};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::errors::PipelineError;
use crate::readers::ReaderConfig;
use crate::record::RawRecord;

fn malformed(path: &Path, message: impl ToString) -> PipelineError {
    PipelineError::MalformedSource {
        path: path.display().to_string(),
        message: message.to_string(),
    }
}

/// Generate an all-UTF-8 schema from the header line
fn csv_generate_schema(path: &Path, delimiter: u8) -> Result<Schema, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::SourceUnavailable {
        path: path.display().to_string(),
        source,
    })?;
    let mut header = String::new();
    let read = BufReader::new(file)
        .read_line(&mut header)
        .map_err(|e| malformed(path, e))?;
    if read == 0 {
        return Err(malformed(path, "file is empty"));
    }

    let header = header.trim_start_matches('\u{feff}').trim_end_matches(['\r', '\n']);
    let fields: Vec<Field> = header
        .split(delimiter as char)
        .map(|c| Field::new(c.trim().trim_matches('"'), DataType::Utf8, true))
        .collect();
    Ok(Schema::new(fields))
}

fn batch_to_records(path: &Path, batch: &RecordBatch) -> Result<Vec<RawRecord>, PipelineError> {
    let schema = batch.schema();
    let columns = batch
        .columns()
        .iter()
        .map(|c| {
            c.as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| malformed(path, "column is not UTF-8"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let records: Vec<RawRecord> = (0..batch.num_rows())
        .map(|row| {
            schema
                .fields()
                .iter()
                .zip(&columns)
                .map(|(field, array)| {
                    let value = (!array.is_null(row)).then(|| array.value(row).to_string());
                    (field.name().clone(), value)
                })
                .collect::<RawRecord>()
        })
        .collect();
    Ok(records)
}

fn read_batches(
    path: &Path,
    schema: Arc<Schema>,
    config: &ReaderConfig,
) -> Result<Vec<RawRecord>, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::SourceUnavailable {
        path: path.display().to_string(),
        source,
    })?;
    let reader = CsvReaderBuilder::new(schema)
        .with_header(true)
        .with_delimiter(config.delimiter)
        .with_batch_size(config.batch_size)
        .with_truncated_rows(true)
        .build(file)
        .map_err(|e| malformed(path, e))?;

    let mut records = Vec::new();
    for batch in reader {
        let batch = batch.map_err(|e| malformed(path, e))?;
        records.extend(batch_to_records(path, &batch)?);
    }
    Ok(records)
}

/// Row-by-row read for files the batch decoder rejects. Short rows get the
/// missing fields as `None`, cells past the header are dropped.
fn read_rows_flexible(
    path: &Path,
    schema: &Schema,
    config: &ReaderConfig,
) -> Result<Vec<RawRecord>, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::SourceUnavailable {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(config.delimiter)
        .flexible(true)
        .from_reader(file);

    let names: Vec<&String> = schema.fields().iter().map(|f| f.name()).collect();
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| malformed(path, e))?;
        if row.len() > names.len() {
            log::debug!(
                "{}: dropping {} extra cell(s) on line {}",
                path.display(),
                row.len() - names.len(),
                row.position().map_or(0, |p| p.line())
            );
        }
        let record = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let value = row.get(i).filter(|v| !v.is_empty()).map(str::to_string);
                ((*name).clone(), value)
            })
            .collect::<RawRecord>();
        records.push(record);
    }
    Ok(records)
}

/// Read every data row of a delimited file.
///
/// Rows with fewer cells than the header keep the missing fields as `None`;
/// extra cells are ignored. Fails with [`PipelineError::SourceUnavailable`]
/// when the file cannot be opened and [`PipelineError::MalformedSource`] when
/// it cannot be decoded at all.
pub fn try_load_employees(
    path: impl AsRef<Path>,
    config: &ReaderConfig,
) -> Result<Vec<RawRecord>, PipelineError> {
    let path = path.as_ref();
    let schema = Arc::new(csv_generate_schema(path, config.delimiter)?);

    let records = match read_batches(path, schema.clone(), config) {
        Ok(records) => records,
        Err(PipelineError::MalformedSource { message, .. }) => {
            log::debug!("{}: {message}, reading row by row", path.display());
            read_rows_flexible(path, &schema, config)?
        }
        Err(e) => return Err(e),
    };
    log::debug!("Loaded {} rows from {}", records.len(), path.display());
    Ok(records)
}

/// Soft variant of [`try_load_employees`]: any failure is logged and yields
/// an empty vector.
pub fn load_employees(path: impl AsRef<Path>, config: &ReaderConfig) -> Vec<RawRecord> {
    match try_load_employees(path, config) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("{e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_generate_schema_strips_bom_and_quotes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("h.csv");
        let mut file = File::create(&path).unwrap();
        write!(file, "\u{feff}\"employee_id\", name ,city\r\n1,a,b\r\n").unwrap();

        let schema = csv_generate_schema(&path, b',').unwrap();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, vec!["employee_id", "name", "city"]);
    }

    #[test]
    fn test_generate_schema_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        File::create(&path).unwrap();

        let err = csv_generate_schema(&path, b',').unwrap_err();
        assert!(matches!(err, PipelineError::MalformedSource { .. }));
    }
}
