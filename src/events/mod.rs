mod pointer;
mod wheel;

pub use pointer::{wire_canvas_click, wire_chrome_buttons};
pub use wheel::wire_wheel;
