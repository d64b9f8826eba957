//! Attribute tables filled in file order.

use glam::{Vec2, Vec3};

use crate::error::{AttributeTable, DecodeError, DecodeResult};

/// Positions, texture coordinates and normals read so far.
///
/// Stored 0-based; the text format references them 1-based.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeTables {
    pub positions: Vec<Vec3>,
    pub tex_coords: Vec<Vec2>,
    pub normals: Vec<Vec3>,
}

fn fetch<T: Copy>(items: &[T], table: AttributeTable, index: u32) -> DecodeResult<T> {
    index
        .checked_sub(1)
        .and_then(|i| items.get(i as usize))
        .copied()
        .ok_or(DecodeError::IndexOutOfRange {
            table,
            requested_index: index,
            len: items.len(),
        })
}

impl AttributeTables {
    pub fn fetch_position(&self, index: u32) -> DecodeResult<Vec3> {
        fetch(&self.positions, AttributeTable::Positions, index)
    }

    pub fn fetch_tex_coord(&self, index: u32) -> DecodeResult<Vec2> {
        fetch(&self.tex_coords, AttributeTable::TexCoords, index)
    }

    pub fn fetch_normal(&self, index: u32) -> DecodeResult<Vec3> {
        fetch(&self.normals, AttributeTable::Normals, index)
    }
}
