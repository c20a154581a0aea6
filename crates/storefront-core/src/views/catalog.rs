use super::{ChromeState, View, VisibleMeshes};
use crate::carousel::Carousel;
use crate::catalog::{instantiate_all, ItemSpec};
use crate::config::{CarouselConfig, ConfigError};
use crate::constants::{
    CATALOG_CAMERA_EYE, CATALOG_FOV_DEGREES, CATALOG_LIGHT_COLOR, CATALOG_LIGHT_TARGET,
    CATALOG_PICK_RADIUS_MIN, ZFAR, ZNEAR,
};
use crate::mesh::MeshInstance;
use crate::picking::nearest_hit;
use crate::scene::{Scene, SceneMembership, Visual};
use crate::state::{Camera, DirectionalLight};
use glam::Vec3;
use std::time::Duration;

/// Scrollable row of catalog items.
pub struct CatalogView {
    camera: Camera,
    light: DirectionalLight,
    scene: Scene,
    carousel: Carousel<MeshInstance>,
    specs: Vec<ItemSpec>,
}

impl CatalogView {
    pub fn new(specs: Vec<ItemSpec>, config: CarouselConfig) -> Result<Self, ConfigError> {
        let carousel = Carousel::new(instantiate_all(&specs), config)?;
        Ok(Self {
            camera: Camera {
                eye: CATALOG_CAMERA_EYE,
                target: CATALOG_CAMERA_EYE + Vec3::NEG_Z,
                up: Vec3::Y,
                aspect: 1.0,
                fovy_radians: CATALOG_FOV_DEGREES.to_radians(),
                znear: ZNEAR,
                zfar: ZFAR,
            },
            light: DirectionalLight {
                color: CATALOG_LIGHT_COLOR,
                intensity: 1.0,
                position: Vec3::ZERO,
                target: CATALOG_LIGHT_TARGET,
            },
            scene: Scene::new(),
            carousel,
            specs,
        })
    }

    pub fn carousel(&self) -> &Carousel<MeshInstance> {
        &self.carousel
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn specs(&self) -> &[ItemSpec] {
        &self.specs
    }

    /// Feed a scaled scroll delta into the carousel.
    pub fn scroll(&mut self, delta: f32) {
        self.carousel.apply_scroll(delta, &mut self.scene);
    }

    /// Catalog index of the attached item hit by the ray, if any.
    pub fn pick(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<usize> {
        let attached: Vec<(usize, &MeshInstance)> = self.attached_items().collect();
        nearest_hit(
            attached.iter().map(|(_, m)| *m),
            ray_origin,
            ray_dir,
            CATALOG_PICK_RADIUS_MIN,
        )
        .map(|k| attached[k].0)
    }

    /// Catalog index of the attached item closest to the centre of the row.
    pub fn focused_item(&self) -> Option<usize> {
        self.attached_items()
            .min_by(|(_, a), (_, b)| a.position.x.abs().total_cmp(&b.position.x.abs()))
            .map(|(i, _)| i)
    }

    fn attached_items(&self) -> impl Iterator<Item = (usize, &MeshInstance)> {
        self.carousel
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| (i, item.visual()))
            .filter(|(_, m)| self.scene.contains(m.id()))
    }
}

impl View for CatalogView {
    fn initialize(&mut self) {
        self.carousel.update_visibility(&mut self.scene);
        log::info!(
            "[catalog] initialized with {} items, {} on screen",
            self.carousel.len(),
            self.scene.len()
        );
    }

    fn update(&mut self, dt: Duration, _elapsed: Duration) {
        self.carousel.tick(dt, &mut self.scene);
    }

    fn destroy(&mut self) {
        self.carousel.detach_all(&mut self.scene);
        log::info!("[catalog] destroyed");
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
        self.attached_items().map(|(_, m)| m).collect()
    }

    fn chrome(&self) -> ChromeState {
        ChromeState {
            catalog_button: false,
            previous_button: false,
            next_button: false,
            item_title: self.focused_item().map(|i| self.specs[i].name),
        }
    }
}
