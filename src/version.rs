use serde_json::{Map, Value};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Key always present in a composed version record.
pub const VERSION_KEY: &str = "flapper_version";

pub type VersionRecord = Map<String, Value>;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("failed to read version file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse version file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("version file does not contain a JSON object")]
    NotObject,
}

/// Builds the version record: the compiled-in base version, overlaid with the
/// top-level keys of the version file.
///
/// A file that cannot be opened is a degraded success: the base record is
/// returned and the condition logged at warn level. A file that opens but does
/// not hold a JSON object is a hard failure, so a partially merged record
/// never escapes. Overlay keys win on collision, including `flapper_version`
/// itself.
///
/// The file is re-read on every call; edits are visible on the next request.
pub fn compose(base_version: &str, path: &Path) -> Result<VersionRecord, VersionError> {
    let mut record = VersionRecord::new();
    record.insert(
        VERSION_KEY.to_string(),
        Value::String(base_version.to_string()),
    );

    // Handle is dropped on every exit path below.
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            tracing::warn!("Version file not found: {error}");
            return Ok(record);
        }
    };

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let overlay = match serde_json::from_str::<Value>(&contents)? {
        Value::Object(overlay) => overlay,
        _ => return Err(VersionError::NotObject),
    };

    record.extend(overlay);
    Ok(record)
}
