use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid game date {value:?} (expected MM/DD/YYYY)")]
    InvalidDate { value: String },

    #[error("invalid true shooting cutoff {0} (must be a finite value >= 0)")]
    InvalidCutoff(f64),
}
