//! Single-model stage with a column of color picker spheres.

use super::{ChromeState, View, VisibleMeshes};
use crate::catalog::ItemSpec;
use crate::constants::{
    PICKER_COLUMN_X, PICKER_RADIUS, PRODUCT_CAMERA_EYE, PRODUCT_CAMERA_TARGET,
    PRODUCT_FOV_DEGREES, PRODUCT_LIGHT_COLOR, PRODUCT_LIGHT_TARGET, PRODUCT_MODEL_SCALE,
    PRODUCT_PALETTE, ZFAR, ZNEAR,
};
use crate::mesh::{MeshInstance, Shading, Shape};
use crate::picking::nearest_hit;
use crate::scene::{Scene, SceneMembership, VisualId};
use crate::state::{Camera, DirectionalLight};
use glam::Vec3;
use std::time::Duration;

const MODEL_ID: VisualId = VisualId(0);

pub struct ProductView {
    camera: Camera,
    light: DirectionalLight,
    scene: Scene,
    model: MeshInstance,
    pickers: Vec<MeshInstance>,
    catalog_index: usize,
}

impl ProductView {
    pub fn new(spec: &ItemSpec, catalog_index: usize) -> Self {
        let model = MeshInstance {
            id: MODEL_ID,
            name: spec.name,
            shape: spec.shape,
            shading: Shading::Lambert,
            color: PRODUCT_PALETTE[0],
            scale: spec.scale * PRODUCT_MODEL_SCALE,
            position: Vec3::ZERO,
        };
        let pickers = PRODUCT_PALETTE
            .iter()
            .enumerate()
            .map(|(i, color)| MeshInstance {
                id: VisualId(i as u32 + 1),
                name: "Picker",
                shape: Shape::sphere(PICKER_RADIUS),
                shading: Shading::Lambert,
                color: *color,
                scale: 1.0,
                position: Vec3::new(PICKER_COLUMN_X, i as f32, 0.0),
            })
            .collect();
        Self {
            camera: Camera {
                eye: PRODUCT_CAMERA_EYE,
                target: PRODUCT_CAMERA_TARGET,
                up: Vec3::Y,
                aspect: 1.0,
                fovy_radians: PRODUCT_FOV_DEGREES.to_radians(),
                znear: ZNEAR,
                zfar: ZFAR,
            },
            light: DirectionalLight {
                color: PRODUCT_LIGHT_COLOR,
                intensity: 1.0,
                position: Vec3::ZERO,
                target: PRODUCT_LIGHT_TARGET,
            },
            scene: Scene::new(),
            model,
            pickers,
            catalog_index,
        }
    }

    pub fn catalog_index(&self) -> usize {
        self.catalog_index
    }

    pub fn model(&self) -> &MeshInstance {
        &self.model
    }

    pub fn pickers(&self) -> &[MeshInstance] {
        &self.pickers
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Recolor the model if the ray hits a picker; returns the new color.
    pub fn pick_color(&mut self, ray_origin: Vec3, ray_dir: Vec3) -> Option<[f32; 3]> {
        let hit = nearest_hit(&self.pickers, ray_origin, ray_dir, 0.0)?;
        let color = self.pickers[hit].color;
        self.apply_color(color);
        Some(color)
    }

    /// Paint every non-picker mesh with `color`.
    pub fn apply_color(&mut self, color: [f32; 3]) {
        self.model.color = color;
        log::info!(
            "[product] {} recolored to ({:.2},{:.2},{:.2})",
            self.model.name,
            color[0],
            color[1],
            color[2]
        );
    }
}

impl View for ProductView {
    fn initialize(&mut self) {
        self.scene.add(self.model.id);
        for p in &self.pickers {
            self.scene.add(p.id);
        }
        log::info!("[product] initialized with {}", self.model.name);
    }

    // the stage is static; camera orbiting is left to the host
    fn update(&mut self, _dt: Duration, _elapsed: Duration) {}

    fn destroy(&mut self) {
        self.scene.clear();
        log::info!("[product] destroyed");
    }

    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    fn light(&self) -> &DirectionalLight {
        &self.light
    }

    fn visible(&self) -> VisibleMeshes<'_> {
        std::iter::once(&self.model)
            .chain(self.pickers.iter())
            .filter(|m| self.scene.contains(m.id))
            .collect()
    }

    fn chrome(&self) -> ChromeState {
        ChromeState {
            catalog_button: true,
            previous_button: true,
            next_button: true,
            item_title: None,
        }
    }
}
