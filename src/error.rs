use thiserror::Error;

/// Failures that can only happen before a run starts, and therefore aren't
/// worth wrapping in bare `anyhow`: callers may want to match on the kind.
/// Everything past startup stays on `anyhow::Result`, as does every
/// per-candidate failure inside the worker loop.
#[derive(Debug, Error)]
pub enum SubreconError {
    #[error("invalid target domain: {0}")]
    InvalidDomain(String),

    #[error("wordlist path rejected: {0}")]
    InvalidWordlistPath(String),

    #[error("could not prepare output path {path}: {source}")]
    InvalidOutputPath {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
