//! Prelude module for common pinlet types
//!
//! Re-exports the most commonly used types and functions for easy importing
//! with `use pinlet::prelude::*;`.

pub use crate::core::{
    config::{MarkerConfig, ShadowSetting, ShadowTransform, MAP_PIN},
    geo::Point,
};

pub use crate::geometry::{
    icon::{render_icon, AnchorBox, RenderedIcon},
    shadow::{render_shadow, RenderedShadow, ShadowGeometry},
};

pub use crate::animation::bounce::{
    BounceAnimator, BounceOptions, DoneCallback, FloatOffset,
};

pub use crate::marker::{icon, VectorMarker};

pub use crate::traits::DomElement;

pub use crate::{Error as MarkerError, Result};

pub use instant::Instant;
pub use std::time::Duration;
