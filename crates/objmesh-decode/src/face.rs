//! Face resolution into interleaved vertex records.

use crate::StructureVariant;
use crate::error::{DecodeError, DecodeResult, RecordKind};
use crate::numeric::parse_unsigned;
use crate::record::split_triple;
use crate::tables::AttributeTables;

/// Number of face-vertex references in every face record.
pub const VERTICES_PER_FACE: usize = 3;

/// 1-based indices of one face-vertex reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceVertex {
    pub position: u32,
    pub tex_coord: Option<u32>,
    pub normal: Option<u32>,
}

impl FaceVertex {
    /// Decode a `p`, `p//n`, `p/t` or `p/t/n` token according to `variant`.
    pub fn parse(token: &str, variant: StructureVariant) -> DecodeResult<Self> {
        let malformed = || DecodeError::MalformedFaceToken {
            token: token.to_owned(),
            variant,
        };

        let fields: Vec<&str> = token.split('/').collect();
        match (variant, fields.as_slice()) {
            (StructureVariant::PositionOnly, [p]) => Ok(Self {
                position: parse_unsigned(p)?,
                tex_coord: None,
                normal: None,
            }),
            (StructureVariant::PositionNormal, [p, "", n]) => Ok(Self {
                position: parse_unsigned(p)?,
                tex_coord: None,
                normal: Some(parse_unsigned(n)?),
            }),
            (StructureVariant::PositionTexCoord, [p, t]) => Ok(Self {
                position: parse_unsigned(p)?,
                tex_coord: Some(parse_unsigned(t)?),
                normal: None,
            }),
            (StructureVariant::PositionTexCoordNormal, [p, t, n]) if !t.is_empty() => Ok(Self {
                position: parse_unsigned(p)?,
                tex_coord: Some(parse_unsigned(t)?),
                normal: Some(parse_unsigned(n)?),
            }),
            _ => Err(malformed()),
        }
    }

    /// Look the indices up and append the vertex record to `buffer`.
    ///
    /// Nothing is appended when any lookup fails.
    pub fn resolve_into(&self, tables: &AttributeTables, buffer: &mut Vec<f32>) -> DecodeResult<()> {
        let position = tables.fetch_position(self.position)?;
        let tex_coord = self
            .tex_coord
            .map(|index| tables.fetch_tex_coord(index))
            .transpose()?;
        let normal = self
            .normal
            .map(|index| tables.fetch_normal(index))
            .transpose()?;

        buffer.extend_from_slice(&position.to_array());
        if let Some(tex_coord) = tex_coord {
            buffer.extend_from_slice(&tex_coord.to_array());
        }
        if let Some(normal) = normal {
            buffer.extend_from_slice(&normal.to_array());
        }
        Ok(())
    }
}

/// Split a face body into its three references.
///
/// Uses the first and last space as delimiters; faces with more than three
/// references are not supported and end up with a malformed middle token.
pub fn split_face(body: &str) -> DecodeResult<[&str; VERTICES_PER_FACE]> {
    split_triple(body, RecordKind::Face)
}

/// Resolve every reference of a face body, appending to `buffer`.
///
/// Returns the number of vertices appended.
pub fn resolve_face(
    body: &str,
    variant: StructureVariant,
    tables: &AttributeTables,
    buffer: &mut Vec<f32>,
) -> DecodeResult<u32> {
    let mut appended = 0;
    for token in split_face(body)? {
        FaceVertex::parse(token, variant)?.resolve_into(tables, buffer)?;
        appended += 1;
    }
    Ok(appended)
}
