//! Where model text comes from.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Source of a model's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// Text already in memory.
    Text(String),
    /// A file to read in full before parsing.
    Path(PathBuf),
}

impl ModelSource {
    /// Read the source into a string.
    pub fn read(&self) -> Result<std::borrow::Cow<'_, str>> {
        match self {
            Self::Text(text) => Ok(text.as_str().into()),
            Self::Path(path) => read_model_file(path).map(Into::into),
        }
    }
}

/// A load request: the name to register the model under and its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    pub name: String,
    pub source: ModelSource,
}

impl ModelInfo {
    pub fn from_path(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: ModelSource::Path(path.into()),
        }
    }

    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: ModelSource::Text(text.into()),
        }
    }

    /// Parse a `name=path` argument. Without `=`, the file stem is the name.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg.split_once('=') {
            Some((name, path)) => Self::from_path(name, path),
            None => {
                let path = Path::new(arg);
                let name = path
                    .file_stem()
                    .map_or_else(|| arg.to_owned(), |stem| stem.to_string_lossy().into_owned());
                Self::from_path(name, path)
            }
        }
    }
}

/// Read a model file in full.
pub fn read_model_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::FileUnavailable {
        path: path.to_path_buf(),
        source,
    })
}
