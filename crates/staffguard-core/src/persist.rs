use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::PipelineError;
use crate::record::RawRecord;

/// Write records as a pretty-printed UTF-8 JSON array (the clean snapshot).
///
/// Each record becomes an object of its original string fields in source
/// order. Non-ASCII text is written as is.
pub fn save_clean_json<'a, I>(records: I, path: impl AsRef<Path>) -> Result<(), PipelineError>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let path = path.as_ref();
    let write_error = |source: std::io::Error| PipelineError::Write {
        path: path.display().to_string(),
        source,
    };

    let records: Vec<&RawRecord> = records.into_iter().collect();
    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &records).map_err(|e| {
        if e.is_io() {
            write_error(e.into())
        } else {
            PipelineError::Serialize(e)
        }
    })?;
    writer.flush().map_err(write_error)?;
    log::info!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}
