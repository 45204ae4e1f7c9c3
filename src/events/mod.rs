pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_cards, wire_cubes, wire_use_cases};
pub use scroll::{wire_fallback_navigation, wire_navigation, wire_resize, wire_scroll};
