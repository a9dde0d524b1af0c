use std::fs;
use std::path::Path;

use tracing::debug;

use crate::ingest::IngestError;

/// Reads an uploaded CSV file after checking its extension and size.
pub fn read_source(path: &Path, max_bytes: u64) -> Result<String, IngestError> {
    let is_csv = path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));

    if !is_csv {
        return Err(IngestError::UnsupportedFile { path: path.display().to_string() });
    }

    let size = fs::metadata(path)?.len();

    if size > max_bytes {
        return Err(IngestError::FileSizeExceeded { size, limit: max_bytes });
    }

    debug!("Reading [{}] ({:.2} KB)", path.display(), size as f64 / 1024.0);

    Ok(fs::read_to_string(path)?)
}
