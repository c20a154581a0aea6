// DOM element ids and renderer tuning used by the web frontend.

// Elements
pub const CANVAS_ID: &str = "app-canvas";
pub const CATALOG_BUTTON_ID: &str = "catalog";
pub const PREVIOUS_BUTTON_ID: &str = "previous";
pub const NEXT_BUTTON_ID: &str = "next";
pub const ITEM_TITLE_ID: &str = "item_title";

// Renderer
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.02, 0.04];
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
pub const MAX_INSTANCES: usize = 32; // instance buffer capacity per shape

// Frame clock
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches so time-scaled easing does not jump
