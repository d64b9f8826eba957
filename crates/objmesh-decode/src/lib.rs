//! Decode triangulated OBJ text into interleaved GPU vertex buffers.
//!
//! This crate provides pure synchronous parsing functions. Nothing here
//! touches the filesystem or a GPU; callers hand in the source text and get
//! back a flat `f32` buffer plus a [`VertexLayout`] describing it.
//!
//! # Supported input
//!
//! - `v x y z`, `vt s t`, `vn x y z` attribute records
//! - `f a b c` triangle records whose references are `p`, `p//n`, `p/t` or
//!   `p/t/n`, depending on which attribute tables were filled before the
//!   first face
//! - `#` comments; every other record kind is skipped
//!
//! Numbers are fixed-notation only (no exponent, no `+`), and are lexed by
//! [`parse_fixed_float`] and [`parse_unsigned`] rather than `str::parse`.
//!
//! # Key functions
//!
//! - [`parse_model`]: Parse a whole source into a [`ParsedModel`]
//! - [`classify`]: Classify and decode a single line
//! - [`resolve_face`]: Append the vertices of one face record to a buffer

mod error;

pub mod face;
pub mod layout;
pub mod model;
pub mod numeric;
pub mod record;
pub mod tables;

pub use error::{AttributeTable, DecodeError, DecodeResult, ParseError, RecordKind};
pub use face::{FaceVertex, resolve_face, split_face};
pub use layout::{AttributeKind, StructureVariant, VertexAttribute, VertexLayout};
pub use model::{ParseStats, ParsedModel, parse_model, parse_model_with_stats};
pub use numeric::{parse_fixed_float, parse_unsigned};
pub use record::{Record, classify};
pub use tables::AttributeTables;
