//! Items offered in the catalog row.

use crate::mesh::{MeshInstance, Shading, Shape};
use crate::scene::VisualId;
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct ItemSpec {
    pub name: &'static str,
    pub shape: Shape,
    pub shading: Shading,
    pub color: [f32; 3],
    pub scale: f32,
}

impl ItemSpec {
    pub fn instantiate(&self, id: VisualId) -> MeshInstance {
        MeshInstance {
            id,
            name: self.name,
            shape: self.shape,
            shading: self.shading,
            color: self.color,
            scale: self.scale,
            position: Vec3::ZERO,
        }
    }
}

#[inline]
fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// The sun followed by four bodies, in carousel order.
pub fn default_catalog() -> Vec<ItemSpec> {
    let body = Shape::Octahedron {
        radius: 0.05,
        detail: 1,
    };
    vec![
        ItemSpec {
            name: "Sun",
            shape: Shape::Circle {
                radius: 0.15,
                segments: 32,
            },
            shading: Shading::Basic,
            color: hex_rgb(0xFFFF00),
            scale: 0.5,
        },
        ItemSpec {
            name: "Earth",
            shape: body,
            shading: Shading::Basic,
            color: hex_rgb(0x0020FF),
            scale: 0.5,
        },
        ItemSpec {
            name: "Mars",
            shape: Shape::Octahedron {
                radius: 0.03,
                detail: 4,
            },
            shading: Shading::Lambert,
            color: hex_rgb(0x9B7653),
            scale: 1.0,
        },
        ItemSpec {
            name: "Verdant",
            shape: body,
            shading: Shading::Basic,
            color: hex_rgb(0x20FF00),
            scale: 0.5,
        },
        ItemSpec {
            name: "Crimson",
            shape: body,
            shading: Shading::Basic,
            color: hex_rgb(0xFF0020),
            scale: 0.5,
        },
    ]
}

/// Mesh instances for `specs`, with ids assigned in order.
pub fn instantiate_all(specs: &[ItemSpec]) -> Vec<MeshInstance> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| spec.instantiate(VisualId(i as u32)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_decode() {
        assert_eq!(hex_rgb(0xFFFF00), [1.0, 1.0, 0.0]);
        assert_eq!(hex_rgb(0x000000), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn default_catalog_has_five_uniquely_identified_items() {
        let meshes = instantiate_all(&default_catalog());
        assert_eq!(meshes.len(), 5);
        for (i, m) in meshes.iter().enumerate() {
            assert_eq!(m.id, VisualId(i as u32));
        }
        assert_eq!(meshes[0].name, "Sun");
    }

    #[test]
    fn product_palette_matches_its_hex_codes() {
        let hex = [0xFF0000, 0xF27A10, 0xFFEB00, 0x00FF00, 0x0000FF, 0x5E0FD7, 0xE06DE7];
        for (color, code) in crate::constants::PRODUCT_PALETTE.iter().zip(hex) {
            assert_eq!(*color, hex_rgb(code));
        }
    }
}
