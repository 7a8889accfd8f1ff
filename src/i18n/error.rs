use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading dictionaries.
///
/// Merging and resolving never fail; only turning files or JSON into a
/// `Dictionary` can.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LocaleError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Dictionary root must be a JSON object, got {0}")]
    InvalidRoot(&'static str),

    #[error("Unsupported value at '{0}': null is not a translation")]
    UnsupportedValue(String),

    #[error("Base locale '{}' not found in {}", .code, .dir.display())]
    MissingBaseLocale { code: String, dir: PathBuf },
}
