use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::DataError;

/// Open `path` and read it as a headed CSV table.
pub fn load_table<Raw, T>(path: &Path, required: &[&str]) -> Result<Vec<T>, DataError>
where
    Raw: DeserializeOwned,
    T: TryFrom<Raw, Error = String>,
{
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_table(path, file, required)
}

/// Read a headed CSV table from any reader, converting each row with `TryFrom`.
/// The first malformed row aborts the read; `path` is only used in errors.
pub fn read_table<R, Raw, T>(path: &Path, source: R, required: &[&str]) -> Result<Vec<T>, DataError>
where
    R: Read,
    Raw: DeserializeOwned,
    T: TryFrom<Raw, Error = String>,
{
    let csv_err = |source: csv::Error| DataError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader.headers().map_err(csv_err)?.clone();
    if let Some(missing) = required.iter().find(|c| !headers.iter().any(|h| h == **c)) {
        return Err(DataError::MalformedRow {
            path: path.to_path_buf(),
            line: 1,
            reason: format!("missing column {missing:?}"),
        });
    }

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record).map_err(csv_err)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let malformed = |reason: String| DataError::MalformedRow {
            path: path.to_path_buf(),
            line,
            reason,
        };

        let raw: Raw = record
            .deserialize(Some(&headers))
            .map_err(|e| malformed(e.to_string()))?;
        rows.push(T::try_from(raw).map_err(malformed)?);
    }

    Ok(rows)
}
