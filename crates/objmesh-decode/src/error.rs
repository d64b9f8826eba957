//! Error types for decoding.

use std::fmt;

use crate::StructureVariant;

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Attribute table referenced by a face-vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeTable {
    Positions,
    TexCoords,
    Normals,
}

impl fmt::Display for AttributeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Positions => "position",
            Self::TexCoords => "texture coordinate",
            Self::Normals => "normal",
        })
    }
}

/// Kind of record a line was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Position,
    TexCoord,
    Normal,
    Face,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Position => "vertex",
            Self::TexCoord => "texture coordinate",
            Self::Normal => "normal",
            Self::Face => "face",
        })
    }
}

/// Errors raised while decoding a single record or token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A character that cannot appear in the numeric token.
    #[error("character '{character}' at position {position} cannot be used in a numeric token")]
    InvalidNumericToken { character: char, position: usize },

    /// A floating point token with no digits.
    #[error("empty numeric token")]
    EmptyNumericToken,

    /// The record does not have the shape its prefix promises.
    #[error("malformed {kind} record: {reason}")]
    MalformedRecord {
        kind: RecordKind,
        reason: &'static str,
    },

    /// A face-vertex reference with the wrong number of `/`-delimited fields.
    #[error("face token \"{token}\" does not match the {variant} layout")]
    MalformedFaceToken {
        token: String,
        variant: StructureVariant,
    },

    /// A 1-based index that is zero or past the end of its table.
    #[error("{table} index {requested_index} is out of range (table holds {len})")]
    IndexOutOfRange {
        table: AttributeTable,
        requested_index: u32,
        len: usize,
    },
}

/// A [`DecodeError`] tagged with the 1-based line it occurred on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    #[source]
    pub kind: DecodeError,
}

impl ParseError {
    #[must_use]
    pub fn new(line: usize, kind: DecodeError) -> Self {
        Self { line, kind }
    }
}
