//! Error types for model loading.

use std::path::PathBuf;

use objmesh_decode::ParseError;

/// Result type for model table operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or uploading models.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The model source could not be read.
    #[error("model file \"{}\" could not be opened: {source}", path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The model source was read but failed to parse.
    #[error("error while parsing model \"{name}\" on {source}")]
    Parse {
        name: String,
        #[source]
        source: ParseError,
    },

    /// A model with this name is already loaded.
    #[error("model \"{0}\" is already loaded")]
    DuplicateName(String),

    /// The upload backend rejected a model.
    #[error("model \"{name}\" could not be uploaded: {source}")]
    Upload {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
