//! Switching between the catalog and product views.
//!
//! Every switch destroys the outgoing view and initializes the incoming
//! one; the camera aspect follows the last known viewport size.

use crate::catalog::ItemSpec;
use crate::config::{CarouselConfig, ConfigError};
use crate::views::{CatalogView, ProductView, View};
use std::time::Duration;

pub enum ActiveView {
    Catalog(CatalogView),
    Product(ProductView),
}

impl ActiveView {
    pub fn as_view(&self) -> &dyn View {
        match self {
            ActiveView::Catalog(v) => v,
            ActiveView::Product(v) => v,
        }
    }

    pub fn as_view_mut(&mut self) -> &mut dyn View {
        match self {
            ActiveView::Catalog(v) => v,
            ActiveView::Product(v) => v,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    OpenedProduct(usize),
    Recolored([f32; 3]),
    Missed,
}

pub struct Storefront {
    specs: Vec<ItemSpec>,
    config: CarouselConfig,
    active: ActiveView,
    viewport: (u32, u32),
    elapsed: Duration,
}

impl Storefront {
    /// Build the storefront showing the catalog.
    pub fn new(specs: Vec<ItemSpec>, config: CarouselConfig) -> Result<Self, ConfigError> {
        let mut catalog = CatalogView::new(specs.clone(), config.clone())?;
        catalog.initialize();
        Ok(Self {
            specs,
            config,
            active: ActiveView::Catalog(catalog),
            viewport: (1, 1),
            elapsed: Duration::ZERO,
        })
    }

    pub fn active(&self) -> &ActiveView {
        &self.active
    }

    pub fn view(&self) -> &dyn View {
        self.active.as_view()
    }

    pub fn is_catalog(&self) -> bool {
        matches!(self.active, ActiveView::Catalog(_))
    }

    pub fn specs(&self) -> &[ItemSpec] {
        &self.specs
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.active
            .as_view_mut()
            .camera_mut()
            .set_aspect_from_size(width, height);
    }

    pub fn update(&mut self, dt: Duration) {
        self.elapsed += dt;
        let elapsed = self.elapsed;
        self.active.as_view_mut().update(dt, elapsed);
    }

    /// Scroll the catalog; ignored while a product is shown.
    pub fn scroll(&mut self, delta: f32) {
        if let ActiveView::Catalog(catalog) = &mut self.active {
            catalog.scroll(delta);
        }
    }

    /// Handle a click at pixel `(sx, sy)` of the viewport.
    pub fn click(&mut self, sx: f32, sy: f32) -> ClickOutcome {
        let (w, h) = self.viewport;
        let (ro, rd) = self.view().camera().screen_ray(sx, sy, w as f32, h as f32);
        match &mut self.active {
            ActiveView::Catalog(catalog) => match catalog.pick(ro, rd) {
                Some(index) => {
                    self.open_product(index);
                    ClickOutcome::OpenedProduct(index)
                }
                None => ClickOutcome::Missed,
            },
            ActiveView::Product(product) => match product.pick_color(ro, rd) {
                Some(color) => ClickOutcome::Recolored(color),
                None => ClickOutcome::Missed,
            },
        }
    }

    /// Show the product view for catalog item `index` (taken cyclically).
    pub fn open_product(&mut self, index: usize) {
        let index = index % self.specs.len();
        let product = ProductView::new(&self.specs[index], index);
        log::info!("[storefront] open product {} ({})", index, self.specs[index].name);
        self.switch_to(ActiveView::Product(product));
    }

    pub fn open_catalog(&mut self) -> Result<(), ConfigError> {
        let catalog = CatalogView::new(self.specs.clone(), self.config.clone())?;
        log::info!("[storefront] open catalog");
        self.switch_to(ActiveView::Catalog(catalog));
        Ok(())
    }

    pub fn next_product(&mut self) {
        if let ActiveView::Product(product) = &self.active {
            let next = (product.catalog_index() + 1) % self.specs.len();
            self.open_product(next);
        }
    }

    pub fn previous_product(&mut self) {
        if let ActiveView::Product(product) = &self.active {
            let n = self.specs.len();
            let prev = (product.catalog_index() + n - 1) % n;
            self.open_product(prev);
        }
    }

    fn switch_to(&mut self, next: ActiveView) {
        self.active.as_view_mut().destroy();
        self.active = next;
        self.elapsed = Duration::ZERO;
        let (w, h) = self.viewport;
        let view = self.active.as_view_mut();
        view.camera_mut().set_aspect_from_size(w, h);
        view.initialize();
    }
}
