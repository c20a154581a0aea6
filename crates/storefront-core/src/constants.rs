use glam::Vec3;

// Shared tuning constants for the catalog and product views.

// Carousel layout
pub const ITEM_MARGIN: f32 = 1.0; // spacing between adjacent carousel slots
pub const SPAWN_RANGE: f32 = 2.0; // items outside [-range, range] are detached
pub const MOVEMENT_SPEED: f32 = 0.1; // fraction of the remaining distance covered per tick
pub const SNAP_EPSILON: f32 = 1e-4; // remaining distance at which an item snaps onto its slot
pub const REFERENCE_FPS: f32 = 60.0; // tick rate the per-frame easing was tuned for

// Input
pub const WHEEL_SCROLL_SCALE: f32 = 0.001; // wheel delta (pixels) to carousel units

// Catalog camera
pub const CATALOG_FOV_DEGREES: f32 = 45.0;
pub const CATALOG_CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.25, 1.75);

// Product camera
pub const PRODUCT_FOV_DEGREES: f32 = 50.0;
pub const PRODUCT_CAMERA_EYE: Vec3 = Vec3::new(2.5, 3.0, 11.0);
pub const PRODUCT_CAMERA_TARGET: Vec3 = Vec3::new(2.5, 3.0, 0.0);

// Lights
pub const CATALOG_LIGHT_COLOR: [f32; 3] = [1.0, 0.753, 0.796]; // 0xffc0cb
pub const CATALOG_LIGHT_TARGET: Vec3 = Vec3::new(8.0, -8.0, -12.0);
pub const PRODUCT_LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const PRODUCT_LIGHT_TARGET: Vec3 = Vec3::new(10.0, -12.0, -12.0);
pub const AMBIENT_LEVEL: f32 = 0.25;

// Product view layout
pub const PICKER_RADIUS: f32 = 0.4;
pub const PICKER_COLUMN_X: f32 = 5.0;
pub const PRODUCT_MODEL_SCALE: f32 = 20.0; // catalog shapes are tiny; enlarge for the product stage

pub const PRODUCT_PALETTE: [[f32; 3]; 7] = [
    // red
    [255.0 / 255.0, 0.0 / 255.0, 0.0 / 255.0],
    // orange
    [242.0 / 255.0, 122.0 / 255.0, 16.0 / 255.0],
    // yellow
    [255.0 / 255.0, 235.0 / 255.0, 0.0 / 255.0],
    // green
    [0.0 / 255.0, 255.0 / 255.0, 0.0 / 255.0],
    // blue
    [0.0 / 255.0, 0.0 / 255.0, 255.0 / 255.0],
    // violet
    [94.0 / 255.0, 15.0 / 255.0, 215.0 / 255.0],
    // pink
    [224.0 / 255.0, 109.0 / 255.0, 231.0 / 255.0],
];

// Camera clip planes
pub const ZNEAR: f32 = 0.01;
pub const ZFAR: f32 = 100.0;

// Picking
pub const CATALOG_PICK_RADIUS_MIN: f32 = 0.12; // catalog items are tiny; widen their hit sphere
