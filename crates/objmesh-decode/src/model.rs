//! Whole-source parsing into a [`ParsedModel`].

use crate::error::{DecodeResult, ParseError};
use crate::face::{VERTICES_PER_FACE, resolve_face};
use crate::layout::{StructureVariant, VertexLayout};
use crate::record::{Record, classify};
use crate::tables::AttributeTables;

/// Interleaved vertex data for one source file.
///
/// `buffer.len() == vertex_count * variant.stride()` always holds, and
/// `vertex_count` is a multiple of three.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedModel {
    variant: StructureVariant,
    vertex_count: u32,
    buffer: Vec<f32>,
}

impl ParsedModel {
    #[must_use]
    pub fn variant(&self) -> StructureVariant {
        self.variant
    }

    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[must_use]
    pub fn triangle_count(&self) -> u32 {
        self.vertex_count / 3
    }

    /// The interleaved floats.
    #[must_use]
    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    /// The interleaved floats as raw bytes, ready for a vertex buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buffer)
    }

    #[must_use]
    pub fn layout(&self) -> VertexLayout {
        VertexLayout::for_variant(self.variant)
    }

    /// Floats of vertex `index`, or `None` past the end.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&[f32]> {
        self.buffer.chunks_exact(self.variant.stride()).nth(index)
    }

    /// Iterate over the vertex records.
    pub fn vertices(&self) -> impl Iterator<Item = &[f32]> {
        self.buffer.chunks_exact(self.variant.stride())
    }
}

/// Record counts gathered while parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub positions: usize,
    pub tex_coords: usize,
    pub normals: usize,
    pub faces: usize,
    /// Empty, comment and unrecognised lines.
    pub ignored_lines: usize,
}

/// Parse a complete source.
///
/// Any failure aborts the parse; no partial model is returned.
pub fn parse_model(source: &str) -> Result<ParsedModel, ParseError> {
    parse_model_with_stats(source).map(|(model, _)| model)
}

/// Like [`parse_model`], also returning what the source contained.
pub fn parse_model_with_stats(source: &str) -> Result<(ParsedModel, ParseStats), ParseError> {
    let mut parser = Parser::default();
    for (index, line) in source.lines().enumerate() {
        parser
            .feed(line)
            .map_err(|kind| ParseError::new(index + 1, kind))?;
    }
    Ok(parser.finish())
}

#[derive(Default)]
struct Parser {
    tables: AttributeTables,
    /// Frozen on the first face.
    variant: Option<StructureVariant>,
    vertex_count: u32,
    buffer: Vec<f32>,
    stats: ParseStats,
}

impl Parser {
    fn feed(&mut self, line: &str) -> DecodeResult<()> {
        match classify(line)? {
            None => self.stats.ignored_lines += 1,
            Some(Record::Position(position)) => {
                self.tables.positions.push(position);
                self.stats.positions += 1;
            }
            Some(Record::TexCoord(tex_coord)) => {
                self.tables.tex_coords.push(tex_coord);
                self.stats.tex_coords += 1;
            }
            Some(Record::Normal(normal)) => {
                self.tables.normals.push(normal);
                self.stats.normals += 1;
            }
            Some(Record::Face(body)) => {
                let tables = &self.tables;
                let variant = *self.variant.get_or_insert_with(|| {
                    StructureVariant::infer(tables.tex_coords.is_empty(), tables.normals.is_empty())
                });
                self.buffer
                    .reserve(VERTICES_PER_FACE * variant.stride());
                self.vertex_count += resolve_face(body, variant, &self.tables, &mut self.buffer)?;
                self.stats.faces += 1;
            }
        }
        Ok(())
    }

    fn finish(self) -> (ParsedModel, ParseStats) {
        let model = ParsedModel {
            variant: self.variant.unwrap_or_default(),
            vertex_count: self.vertex_count,
            buffer: self.buffer,
        };
        (model, self.stats)
    }
}
