//! # Pinlet
//!
//! Scalable vector map-pin markers, inspired by Leaflet's vector-marker
//! plugins.
//!
//! The crate computes the SVG markup, anchor metrics and skewed-shadow
//! transform for a teardrop map pin, and drives a parabolic bounce animation
//! for it. It renders nothing itself: the host overlay framework mounts the
//! markup, positions the nodes from the anchor boxes, and polls the animator
//! once per frame.

pub mod animation;
pub mod core;
pub mod geometry;
pub mod marker;
pub mod prelude;
pub mod traits;

// Re-export public API
pub use crate::core::{
    config::{MarkerConfig, ShadowSetting, ShadowTransform},
    geo::Point,
};

pub use crate::geometry::{
    icon::{AnchorBox, RenderedIcon},
    shadow::{RenderedShadow, ShadowGeometry},
};

pub use crate::animation::bounce::{BounceAnimator, BounceOptions, FloatOffset};

pub use crate::marker::{icon, VectorMarker};

pub use crate::traits::DomElement;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MarkerError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    #[error("Invalid marker configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MarkerError;
