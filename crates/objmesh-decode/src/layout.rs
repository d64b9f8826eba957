//! Vertex structure variants and the layout descriptor handed to renderers.

use std::fmt;

/// Size of one buffer component in bytes.
pub const FLOAT_SIZE: u64 = std::mem::size_of::<f32>() as u64;

/// Which attributes each vertex in an interleaved buffer carries.
///
/// Attributes are always stored in the order position, texture coordinate,
/// normal, skipping the ones that are absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StructureVariant {
    #[default]
    PositionOnly,
    PositionNormal,
    PositionTexCoord,
    PositionTexCoordNormal,
}

impl StructureVariant {
    /// Pick the variant from which attribute tables have been filled.
    #[must_use]
    pub fn infer(tex_coords_empty: bool, normals_empty: bool) -> Self {
        match (tex_coords_empty, normals_empty) {
            (true, true) => Self::PositionOnly,
            (true, false) => Self::PositionNormal,
            (false, true) => Self::PositionTexCoord,
            (false, false) => Self::PositionTexCoordNormal,
        }
    }

    #[must_use]
    pub fn has_tex_coords(self) -> bool {
        matches!(self, Self::PositionTexCoord | Self::PositionTexCoordNormal)
    }

    #[must_use]
    pub fn has_normals(self) -> bool {
        matches!(self, Self::PositionNormal | Self::PositionTexCoordNormal)
    }

    /// Number of floats per vertex.
    #[must_use]
    pub fn stride(self) -> usize {
        match self {
            Self::PositionOnly => 3,
            Self::PositionNormal => 6,
            Self::PositionTexCoord => 5,
            Self::PositionTexCoordNormal => 8,
        }
    }

    /// Number of bytes per vertex.
    #[must_use]
    pub fn stride_bytes(self) -> u64 {
        self.stride() as u64 * FLOAT_SIZE
    }
}

impl fmt::Display for StructureVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PositionOnly => "position-only",
            Self::PositionNormal => "position/normal",
            Self::PositionTexCoord => "position/texcoord",
            Self::PositionTexCoordNormal => "position/texcoord/normal",
        })
    }
}

/// Semantic of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Position,
    TexCoord,
    Normal,
}

impl AttributeKind {
    /// Number of `f32` components.
    #[must_use]
    pub fn components(self) -> u32 {
        match self {
            Self::Position | Self::Normal => 3,
            Self::TexCoord => 2,
        }
    }
}

/// One attribute inside an interleaved vertex record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub kind: AttributeKind,
    /// Shader location, assigned in order of presence.
    pub location: u32,
    /// Number of `f32` components.
    pub components: u32,
    /// Byte offset from the start of the vertex record.
    pub offset: u64,
}

/// Describes how to read an interleaved buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    pub variant: StructureVariant,
    /// Bytes between consecutive vertices.
    pub stride: u64,
    pub attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    #[must_use]
    pub fn for_variant(variant: StructureVariant) -> Self {
        let mut kinds = vec![AttributeKind::Position];
        if variant.has_tex_coords() {
            kinds.push(AttributeKind::TexCoord);
        }
        if variant.has_normals() {
            kinds.push(AttributeKind::Normal);
        }

        let mut offset = 0;
        let attributes = (0..)
            .zip(kinds)
            .map(|(location, kind)| {
                let attribute = VertexAttribute {
                    kind,
                    location,
                    components: kind.components(),
                    offset,
                };
                offset += u64::from(kind.components()) * FLOAT_SIZE;
                attribute
            })
            .collect();

        Self {
            variant,
            stride: variant.stride_bytes(),
            attributes,
        }
    }

    /// Look up the attribute of the given kind, if the layout has one.
    #[must_use]
    pub fn attribute(&self, kind: AttributeKind) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.kind == kind)
    }
}
