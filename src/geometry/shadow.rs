//! Skewed shadow markup
//!
//! The shadow is the pin path run through the 2D affine transform
//! `matrix(1, 0, skew, scale, tx, ty)`: a horizontal shear and a vertical
//! compression. The authored viewBox widens to accommodate the shear, and the
//! translation re-anchors the sheared (or, for negative scale, flipped) shape
//! back inside the positive quadrant.

use crate::core::config::{MarkerConfig, ShadowTransform};
use crate::geometry::icon::AnchorBox;
use serde::{Deserialize, Serialize};

/// Derived shadow dimensions and offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowGeometry {
    /// Authored-space viewBox width, widened for the shear.
    pub view_width: f64,
    /// Authored-space viewBox height after vertical compression.
    pub view_height: f64,
    /// Rendered pixel width of the shadow svg.
    pub render_width: f64,
    /// Rendered pixel height; tracks the icon's rendered height, not a
    /// separately scaled shadow height.
    pub render_height: f64,
    /// Horizontal translation of the transform matrix.
    pub tx: f64,
    /// Vertical translation of the transform matrix.
    pub ty: f64,
    /// Vertical float-container offset aligning the shadow base with the
    /// icon base.
    pub delta_top: f64,
    /// Horizontal float-container offset; non-zero only for positive skew,
    /// which shifts the shadow rightward relative to the icon's anchor.
    pub delta_left: f64,
}

impl ShadowGeometry {
    pub fn compute(config: &MarkerConfig, transform: ShadowTransform) -> Self {
        let ShadowTransform { skew, scale } = transform;
        let view_width = (config.svg_width + config.svg_height * skew.abs()).round();
        let view_height = (config.svg_height * scale).abs();
        let render_width = (config.icon_size.x * (1.0 + skew.abs())).round();
        let render_height = config.icon_size.y;
        let tx = if skew < 0.0 {
            view_width - config.svg_width
        } else {
            0.0
        };
        let ty = if scale < 0.0 { view_height } else { 0.0 };
        let delta_top = config.svg_height * (1.0 - scale).min(1.0);
        let delta_left = if skew > 0.0 {
            config.svg_width - view_width + tx / 2.0
        } else {
            0.0
        };
        Self {
            view_width,
            view_height,
            render_width,
            render_height,
            tx,
            ty,
            delta_top,
            delta_left,
        }
    }

    /// The `matrix(..)` argument list for the svg transform attribute.
    pub fn matrix_string(&self, transform: ShadowTransform) -> String {
        format!(
            "1,0,{},{},{},{}",
            transform.skew, transform.scale, self.tx, self.ty
        )
    }
}

/// Markup and placement metrics for the shadow node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedShadow {
    pub markup: String,
    pub class_name: String,
    pub anchor: AnchorBox,
    /// The resolved skew/scale pair; the bounce animator shifts the shadow's
    /// float margins by it.
    pub transform: ShadowTransform,
    pub geometry: ShadowGeometry,
}

/// Renders the shadow markup, or `None` when the shadow is disabled.
pub fn render_shadow(config: &MarkerConfig) -> Option<RenderedShadow> {
    let transform = config.shadow_transform()?;
    let geometry = ShadowGeometry::compute(config, transform);
    let markup = format!(
        "<div class=\"float-container\" style=\"left: {}px; top: {}px\">\
         <svg width=\"{}px\" height=\"{}px\" preserveAspectRatio=\"none\" \
         viewBox=\"0 0 {} {}\" version=\"1.1\" \
         xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\">\
         <g transform=\"matrix({})\">\
         <path d=\"{}\" fill=\"{}\" fill-opacity=\"{}\"></path></g></svg></div>",
        geometry.delta_left,
        geometry.delta_top,
        geometry.render_width,
        geometry.render_height,
        geometry.view_width,
        geometry.view_height,
        geometry.matrix_string(transform),
        config.svg_path,
        config.shadow_color,
        config.clamped_shadow_opacity()
    );
    Some(RenderedShadow {
        markup,
        class_name: format!("vector-marker-vector-shadow {}", config.class_name),
        anchor: AnchorBox::compute(config.shadow_size, config.shadow_anchor),
        transform,
        geometry,
    })
}
