//! Upload parsed models as Bevy meshes.

use std::convert::Infallible;

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use objmesh::{AttributeKind, ModelUploader, ParsedModel, VertexLayout};

/// [`ModelUploader`] that adds one [`Mesh`] asset per model.
pub struct BevyMeshUploader<'a> {
    meshes: &'a mut Assets<Mesh>,
}

impl<'a> BevyMeshUploader<'a> {
    pub fn new(meshes: &'a mut Assets<Mesh>) -> Self {
        Self { meshes }
    }
}

impl ModelUploader for BevyMeshUploader<'_> {
    type Handle = Handle<Mesh>;
    type Error = Infallible;

    fn upload(
        &mut self,
        _name: &str,
        model: &ParsedModel,
        layout: &VertexLayout,
    ) -> Result<Handle<Mesh>, Infallible> {
        Ok(self.meshes.add(to_bevy_mesh(model, layout)))
    }

    fn release(&mut self, handle: Handle<Mesh>) {
        self.meshes.remove(&handle);
    }
}

/// De-interleave a model into a non-indexed triangle list.
///
/// Texture coordinates are flipped vertically (OBJ has its origin at the
/// bottom left). Models without normals get flat normals.
#[must_use]
pub fn to_bevy_mesh(model: &ParsedModel, layout: &VertexLayout) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());

    for attribute in &layout.attributes {
        let start = usize::try_from(attribute.offset).unwrap_or_default() / size_of::<f32>();
        match attribute.kind {
            AttributeKind::Position => {
                mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, gather::<3>(model, start));
            }
            AttributeKind::TexCoord => {
                let uvs: Vec<[f32; 2]> = gather::<2>(model, start)
                    .into_iter()
                    .map(|[u, v]| [u, 1.0 - v])
                    .collect();
                mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
            }
            AttributeKind::Normal => {
                mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, gather::<3>(model, start));
            }
        }
    }

    if !layout.variant.has_normals() {
        mesh.compute_flat_normals();
    }
    mesh
}

/// Collect `N` consecutive floats starting at `start` from every vertex.
fn gather<const N: usize>(model: &ParsedModel, start: usize) -> Vec<[f32; N]> {
    model
        .vertices()
        .map(|vertex| {
            let mut out = [0.0; N];
            out.copy_from_slice(&vertex[start..start + N]);
            out
        })
        .collect()
}
