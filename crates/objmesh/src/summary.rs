//! Human-facing facts about a parsed model.

use glam::Vec3;
use objmesh_decode::{ParsedModel, StructureVariant};

/// Axis-aligned bounds of a model's positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Summary of a [`ParsedModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelSummary {
    pub variant: StructureVariant,
    /// Floats per vertex.
    pub stride: usize,
    pub vertex_count: u32,
    pub triangle_count: u32,
    /// `None` for a model without vertices.
    pub bounds: Option<Bounds>,
}

impl ModelSummary {
    #[must_use]
    pub fn of(model: &ParsedModel) -> Self {
        let bounds = model
            .vertices()
            .map(|vertex| Vec3::from_slice(&vertex[..3]))
            .fold(None, |acc: Option<Bounds>, p| {
                Some(match acc {
                    Some(b) => Bounds {
                        min: b.min.min(p),
                        max: b.max.max(p),
                    },
                    None => Bounds { min: p, max: p },
                })
            });

        Self {
            variant: model.variant(),
            stride: model.variant().stride(),
            vertex_count: model.vertex_count(),
            triangle_count: model.triangle_count(),
            bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use objmesh_decode::parse_model;

    use super::*;

    #[test]
    fn bounds_cover_every_vertex() {
        let model = parse_model(
            "v -1 0 2\nv 3 -4 0\nv 0 5 -6\nvn 0 0 1\nf 1//1 2//1 3//1\n",
        )
        .unwrap();
        let summary = ModelSummary::of(&model);
        assert_eq!(summary.stride, 6);
        assert_eq!(summary.triangle_count, 1);
        let bounds = summary.bounds.unwrap();
        assert_eq!(bounds.min, Vec3::new(-1.0, -4.0, -6.0));
        assert_eq!(bounds.max, Vec3::new(3.0, 5.0, 2.0));
        assert_eq!(bounds.center(), Vec3::new(1.0, 0.5, -2.0));
        assert_eq!(bounds.size(), Vec3::new(4.0, 9.0, 8.0));
    }

    #[test]
    fn empty_model_has_no_bounds() {
        let summary = ModelSummary::of(&parse_model("# nothing\n").unwrap());
        assert_eq!(summary.vertex_count, 0);
        assert!(summary.bounds.is_none());
    }
}
