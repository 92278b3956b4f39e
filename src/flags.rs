use serde::Serialize;

/// Environment keys starting with this prefix publish a disabled flag.
pub const DISABLED_PREFIX: &str = "X_";
/// Environment keys starting with this prefix publish an enabled flag.
pub const ENABLED_PREFIX: &str = "O_";

/// A named boolean toggle derived from a single environment entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagRecord {
    pub name: String,
    pub enabled: bool,
}

/// Classifies environment entries into flag records by key prefix.
///
/// The flag name is carried by the *value* side of the entry, not the key with
/// its prefix stripped. Consumers depend on this shape.
///
/// Entries matching neither prefix are ordinary environment variables and are
/// skipped. Output order follows the iteration order of the snapshot, which
/// must be treated as unordered.
pub fn classify(entries: impl IntoIterator<Item = (String, String)>) -> Vec<FlagRecord> {
    entries
        .into_iter()
        .filter_map(|(key, value)| {
            if key.starts_with(DISABLED_PREFIX) {
                Some(FlagRecord {
                    name: value,
                    enabled: false,
                })
            } else if key.starts_with(ENABLED_PREFIX) {
                Some(FlagRecord {
                    name: value,
                    enabled: true,
                })
            } else {
                None
            }
        })
        .collect()
}
