//! Key-value store trait and error type.

/// Storage key for the serialized statistics record.
///
/// Matches the key earlier versions of the game wrote, so existing records
/// load unchanged.
pub const STATS_KEY: &str = "rpsStats";

/// Error type for key-value store failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// An underlying I/O operation failed.
    Io(String),
    /// The store cannot accept writes.
    ReadOnly,
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "storage I/O error: {}", msg),
            StorageError::ReadOnly => write!(f, "store is read-only"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Persistent key-value store holding serialized blobs.
///
/// The engine only ever uses [`STATS_KEY`], but implementations are keyed
/// so a single store can serve several records.
pub trait StatsStore {
    /// Read the blob stored under `key`, or `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous blob.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
