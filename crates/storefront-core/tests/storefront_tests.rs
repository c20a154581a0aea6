// Host-side tests for the views and the storefront shell.

use glam::Vec3;
use std::time::Duration;
use storefront_core::*;

const W: u32 = 800;
const H: u32 = 600;

fn storefront() -> Storefront {
    let mut s = Storefront::new(default_catalog(), CarouselConfig::default()).expect("valid");
    s.resize(W, H);
    s
}

/// Pixel coordinates at which `world` appears in the active view.
fn project(s: &Storefront, world: Vec3) -> (f32, f32) {
    let clip = s.view().camera().view_proj() * world.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    let sx = (ndc.x + 1.0) * 0.5 * W as f32;
    let sy = (1.0 - ndc.y) * 0.5 * H as f32;
    (sx, sy)
}

fn catalog_view(s: &Storefront) -> &CatalogView {
    match s.active() {
        ActiveView::Catalog(c) => c,
        ActiveView::Product(_) => panic!("expected catalog"),
    }
}

fn product_view(s: &Storefront) -> &ProductView {
    match s.active() {
        ActiveView::Product(p) => p,
        ActiveView::Catalog(_) => panic!("expected product"),
    }
}

#[test]
fn catalog_starts_with_items_inside_spawn_range_attached() {
    let s = storefront();
    assert!(s.is_catalog());
    let names: Vec<&str> = s.view().visible().iter().map(|m| m.name).collect();
    // default layout: x = 0, 1, 2, 3, -1; x = 3 is off screen
    assert_eq!(names, vec!["Sun", "Earth", "Mars", "Crimson"]);
}

#[test]
fn catalog_chrome_titles_the_centred_item() {
    let mut s = storefront();
    assert_eq!(
        s.view().chrome(),
        ChromeState {
            catalog_button: false,
            previous_button: false,
            next_button: false,
            item_title: Some("Sun"),
        }
    );
    // one full slot to the left brings Earth to the centre
    s.scroll(1.0);
    for _ in 0..400 {
        s.update(Duration::from_millis(16));
    }
    assert_eq!(s.view().chrome().item_title, Some("Earth"));
}

#[test]
fn scrolling_is_ignored_outside_the_catalog() {
    let mut s = storefront();
    s.open_product(1);
    s.scroll(0.5);
    assert!(!s.is_catalog());
    assert_eq!(product_view(&s).catalog_index(), 1);
}

#[test]
fn clicking_an_item_opens_its_product() {
    let mut s = storefront();
    let earth = catalog_view(&s).carousel().items()[1].visual().position;
    let (sx, sy) = project(&s, earth);
    assert_eq!(s.click(sx, sy), ClickOutcome::OpenedProduct(1));

    let product = product_view(&s);
    assert_eq!(product.model().name, "Earth");
    assert_eq!(product.model().color, PRODUCT_PALETTE[0]);
    assert_eq!(product.scene().len(), 1 + PRODUCT_PALETTE.len());
}

#[test]
fn clicking_empty_space_in_catalog_misses() {
    let mut s = storefront();
    assert_eq!(s.click(2.0, 2.0), ClickOutcome::Missed);
    assert!(s.is_catalog());
}

#[test]
fn product_chrome_shows_navigation_and_hides_title() {
    let mut s = storefront();
    s.open_product(0);
    assert_eq!(
        s.view().chrome(),
        ChromeState {
            catalog_button: true,
            previous_button: true,
            next_button: true,
            item_title: None,
        }
    );
}

#[test]
fn clicking_a_picker_recolors_the_model() {
    let mut s = storefront();
    s.open_product(2);
    let picker = product_view(&s).pickers()[4].position;
    let (sx, sy) = project(&s, picker);
    assert_eq!(s.click(sx, sy), ClickOutcome::Recolored(PRODUCT_PALETTE[4]));
    assert_eq!(product_view(&s).model().color, PRODUCT_PALETTE[4]);
    // pickers keep their own colors
    for (p, color) in product_view(&s).pickers().iter().zip(PRODUCT_PALETTE) {
        assert_eq!(p.color, color);
    }
}

#[test]
fn clicking_the_model_does_not_recolor() {
    let mut s = storefront();
    s.open_product(0);
    let (sx, sy) = project(&s, Vec3::ZERO);
    assert_eq!(s.click(sx, sy), ClickOutcome::Missed);
    assert_eq!(product_view(&s).model().color, PRODUCT_PALETTE[0]);
}

#[test]
fn next_and_previous_cycle_through_the_catalog() {
    let mut s = storefront();
    s.open_product(4);
    s.next_product();
    assert_eq!(product_view(&s).catalog_index(), 0);
    s.previous_product();
    s.previous_product();
    assert_eq!(product_view(&s).catalog_index(), 3);
    assert_eq!(product_view(&s).model().name, "Verdant");
}

#[test]
fn returning_to_catalog_starts_from_initial_layout() {
    let mut s = storefront();
    s.scroll(0.5);
    s.open_product(0);
    s.open_catalog().expect("valid");
    assert!(s.is_catalog());
    assert_eq!(
        catalog_view(&s).carousel().destinations(),
        vec![0.0, 1.0, 2.0, 3.0, -1.0]
    );
    assert_eq!(s.view().camera().aspect, W as f32 / H as f32);
}

#[test]
fn product_view_lifecycle_attaches_and_detaches() {
    let spec = &default_catalog()[0];
    let mut view = ProductView::new(spec, 0);
    assert!(view.visible().is_empty());
    view.initialize();
    assert_eq!(view.visible().len(), 8);
    view.update(Duration::from_millis(16), Duration::from_millis(16));
    view.destroy();
    assert!(view.visible().is_empty());
}

#[test]
fn catalog_view_destroy_detaches_every_item() {
    let mut view = CatalogView::new(default_catalog(), CarouselConfig::default()).expect("valid");
    view.initialize();
    assert!(!view.scene().is_empty());
    view.destroy();
    assert!(view.scene().is_empty());
    assert!(view.visible().is_empty());
}

#[test]
fn storefront_rejects_a_degenerate_catalog() {
    let two = default_catalog().into_iter().take(2).collect();
    assert!(matches!(
        Storefront::new(two, CarouselConfig::default()),
        Err(ConfigError::TooFewItems(2))
    ));
}

#[test]
fn camera_ray_passes_through_projected_point() {
    let s = storefront();
    let target = Vec3::new(1.0, 0.0, 0.0);
    let (sx, sy) = project(&s, target);
    let (ro, rd) = s.view().camera().screen_ray(sx, sy, W as f32, H as f32);
    let to_target = (target - ro).normalize();
    assert!((rd - to_target).length() < 1e-3);
}
