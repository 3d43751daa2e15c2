//! Marker configuration with documented defaults
//!
//! A [`MarkerConfig`] is immutable per marker instance. Partial option bags
//! deserialize merged against the defaults below, mirroring the option-merge
//! behavior of Leaflet icon options.

use crate::core::geo::Point;
use crate::{MarkerError, Result};
use serde::{Deserialize, Serialize};

/// The default teardrop pin outline, authored in a 32x52 coordinate space.
pub const MAP_PIN: &str = "M16,1 C7.7146,1 1,7.65636364 1,15.8648485 C1,24.0760606 16,51 16,51 C16,51 31,24.0760606 31,15.8648485 C31,7.65636364 24.2815,1 16,1 L16,1 Z";

/// Skew/scale pair describing the shadow's 2D shear transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowTransform {
    /// Horizontal shear factor. Negative skews the shadow to the left.
    pub skew: f64,
    /// Vertical compression factor.
    pub scale: f64,
}

impl Default for ShadowTransform {
    fn default() -> Self {
        Self {
            skew: -0.25,
            scale: 0.5,
        }
    }
}

/// Shadow configuration: disabled, the default transform, or an explicit one.
///
/// Deserializes from `false`, `true`, or a `{"skew": .., "scale": ..}` object,
/// matching the original option shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShadowSetting {
    Enabled(bool),
    Custom(ShadowTransform),
}

impl ShadowSetting {
    /// Resolves the setting to a concrete transform, or `None` when disabled.
    pub fn resolve(&self) -> Option<ShadowTransform> {
        match self {
            ShadowSetting::Enabled(false) => None,
            ShadowSetting::Enabled(true) => Some(ShadowTransform::default()),
            ShadowSetting::Custom(transform) => Some(*transform),
        }
    }
}

impl Default for ShadowSetting {
    fn default() -> Self {
        ShadowSetting::Enabled(true)
    }
}

/// Configuration for a vector marker instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerConfig {
    /// Logical rendered size of the pin in pixels.
    pub icon_size: Point,
    /// Point within the rendered icon aligned to the target coordinate.
    /// When omitted the pin anchors bottom-center; see
    /// [`resolved_icon_anchor`](Self::resolved_icon_anchor).
    pub icon_anchor: Option<Point>,
    /// Popup placement relative to the anchor; opaque to the geometry.
    pub popup_anchor: Point,
    /// Rendered size of the shadow node's anchor box.
    pub shadow_size: Point,
    /// Anchor within the shadow node; falls back to half-size centering.
    pub shadow_anchor: Option<Point>,
    /// Shadow rendering mode.
    pub svg_shadow: ShadowSetting,
    pub class_name: String,
    /// Icon-font class prefix, e.g. `fa`.
    pub prefix: String,
    pub spin: bool,
    pub spin_class: String,
    pub extra_classes: String,
    /// Glyph name, with or without the prefix.
    pub icon: String,
    pub marker_color: String,
    pub shadow_color: String,
    pub shadow_opacity: f64,
    pub font_icon_color: String,
    // The svg options below describe the coordinate space the path was
    // authored in, and are used to auto-scale the rendered elements.
    pub svg_width: f64,
    pub svg_height: f64,
    pub svg_path: String,
    /// Glyph top offset, calibrated to the authored height.
    pub svg_font_top: f64,
    /// Glyph font size, calibrated to the authored width.
    pub svg_font_size: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            icon_size: Point::new(32.0, 52.0),
            // Derives to (16, 52), the stock bottom-center anchor
            icon_anchor: None,
            popup_anchor: Point::new(2.0, -40.0),
            shadow_size: Point::new(54.0, 51.0),
            shadow_anchor: Some(Point::new(7.0, 45.0)),
            svg_shadow: ShadowSetting::default(),
            class_name: "vector-marker".to_string(),
            prefix: "fa".to_string(),
            spin: false,
            spin_class: "fa-spin".to_string(),
            extra_classes: String::new(),
            icon: "home".to_string(),
            marker_color: "blue".to_string(),
            shadow_color: "black".to_string(),
            shadow_opacity: 0.5,
            font_icon_color: "white".to_string(),
            svg_width: 32.0,
            svg_height: 52.0,
            svg_path: MAP_PIN.to_string(),
            svg_font_top: 8.0,
            svg_font_size: 14.0,
        }
    }
}

impl MarkerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendered pin size. Clears any explicit anchor so the
    /// bottom-center anchor is re-derived for the new size.
    pub fn with_icon_size(mut self, size: Point) -> Self {
        self.icon_size = size;
        self.icon_anchor = None;
        self
    }

    pub fn with_icon_anchor(mut self, anchor: Point) -> Self {
        self.icon_anchor = Some(anchor);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_marker_color(mut self, color: impl Into<String>) -> Self {
        self.marker_color = color.into();
        self
    }

    pub fn with_font_icon_color(mut self, color: impl Into<String>) -> Self {
        self.font_icon_color = color.into();
        self
    }

    pub fn with_spin(mut self, spin: bool) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_extra_classes(mut self, classes: impl Into<String>) -> Self {
        self.extra_classes = classes.into();
        self
    }

    pub fn with_svg_shadow(mut self, setting: ShadowSetting) -> Self {
        self.svg_shadow = setting;
        self
    }

    pub fn without_shadow(mut self) -> Self {
        self.svg_shadow = ShadowSetting::Enabled(false);
        self
    }

    pub fn with_shadow_transform(mut self, skew: f64, scale: f64) -> Self {
        self.svg_shadow = ShadowSetting::Custom(ShadowTransform { skew, scale });
        self
    }

    pub fn with_svg_path(mut self, path: impl Into<String>) -> Self {
        self.svg_path = path.into();
        self
    }

    /// The anchor point actually used for placement: the configured one, or
    /// bottom-center of the rendered size when none was supplied.
    pub fn resolved_icon_anchor(&self) -> Point {
        self.icon_anchor
            .unwrap_or_else(|| Point::new((self.icon_size.x / 2.0).round(), self.icon_size.y))
    }

    /// The concrete shadow transform, or `None` when the shadow is disabled.
    pub fn shadow_transform(&self) -> Option<ShadowTransform> {
        self.svg_shadow.resolve()
    }

    /// Shadow opacity clamped to `[0, 1]`.
    pub fn clamped_shadow_opacity(&self) -> f64 {
        self.shadow_opacity.clamp(0.0, 1.0)
    }

    /// Validates the authored coordinate space and the shadow transform.
    ///
    /// The geometry divides by `svg_width`/`svg_height` and the shadow
    /// transform degenerates at `scale == 0`, so these are rejected up front.
    pub fn validate(&self) -> Result<()> {
        if self.svg_width <= 0.0 || !self.svg_width.is_finite() {
            return Err(MarkerError::InvalidConfig(format!(
                "svgWidth must be a positive number, got {}",
                self.svg_width
            )));
        }
        if self.svg_height <= 0.0 || !self.svg_height.is_finite() {
            return Err(MarkerError::InvalidConfig(format!(
                "svgHeight must be a positive number, got {}",
                self.svg_height
            )));
        }
        if let Some(transform) = self.shadow_transform() {
            if transform.scale == 0.0 {
                return Err(MarkerError::InvalidConfig(
                    "shadow scale of 0 produces a degenerate transform".to_string(),
                ));
            }
        }
        Ok(())
    }
}
