use std::path::PathBuf;

/// Failures at the edges of a capture replay. Parsing itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("Failed to read capture file '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read capture from stdin: {0}")]
    ReadStdin(#[source] std::io::Error),
    #[error("Failed to serialize item: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),
}
