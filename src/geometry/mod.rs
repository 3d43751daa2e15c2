pub mod icon;
pub mod shadow;

// Re-export commonly used types for convenience
pub use icon::{render_icon, AnchorBox, RenderedIcon};
pub use shadow::{render_shadow, RenderedShadow, ShadowGeometry};
