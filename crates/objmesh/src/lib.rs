//! Named table of triangulated OBJ models with pluggable GPU upload.
//!
//! This crate wraps [`objmesh_decode`] with the pieces an application needs
//! around the parser:
//!
//! - [`ModelTable`]: owns parsed models by name, with explicit teardown
//! - [`ModelInfo`] / [`ModelSource`]: load requests from text or a file
//! - [`LoadPolicy`]: whether unreadable or malformed sources are fatal
//! - [`ModelUploader`] / [`UploadedModels`]: hand models to a renderer and
//!   keep the resulting handles
//!
//! # Example
//!
//! ```
//! use objmesh::{LoadPolicy, ModelInfo, ModelTable};
//!
//! let mut table = ModelTable::new();
//! let info = ModelInfo::from_text("tri", "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
//! table.load_info(&info, &LoadPolicy::strict())?;
//!
//! let model = table.get("tri").unwrap();
//! assert_eq!(model.vertex_count(), 3);
//! assert_eq!(model.layout().stride, 12);
//! # Ok::<(), objmesh::Error>(())
//! ```

mod error;
mod policy;
mod source;
mod summary;
mod table;
mod upload;

pub use error::{Error, Result};
pub use policy::{FailureAction, LoadOutcome, LoadPolicy};
pub use source::{ModelInfo, ModelSource, read_model_file};
pub use summary::{Bounds, ModelSummary};
pub use table::ModelTable;
pub use upload::{ModelUploader, UploadedModels};

// Re-export decode types for convenience.
pub use objmesh_decode::{
    AttributeKind, DecodeError, ParseError, ParseStats, ParsedModel, StructureVariant,
    VertexAttribute, VertexLayout,
};
