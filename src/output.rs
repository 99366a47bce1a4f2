use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::collection::GrowableContainer;
use crate::error::{Result, RosterError};
use crate::record::Record;

/// Write one serialized record per line
pub fn write_records<W: Write>(writer: W, records: &GrowableContainer<Record>) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    writer.flush()
}

/// Append records to `path`, creating the file if needed
///
/// Each batch ends with a blank separator line. Existing content is never
/// rewritten.
pub fn append_records(path: &Path, records: &GrowableContainer<Record>) -> Result<()> {
    if path.is_dir() {
        return Err(RosterError::InvalidArgument(format!(
            "output path is a directory: {}",
            path.display()
        )));
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write_records(&mut file, records)?;
    writeln!(file)?;
    tracing::info!(path = %path.display(), count = records.len(), "appended records");
    Ok(())
}
