//! Vector marker facade
//!
//! Ties configuration, geometry and animation together behind the surface the
//! host overlay framework consumes: `create_icon`, `create_shadow` and
//! `bounce`, plus the float-offset glue that writes the per-frame margins
//! through [`DomElement`].

use crate::animation::bounce::{BounceAnimator, BounceOptions, DoneCallback, FloatOffset};
use crate::core::config::MarkerConfig;
use crate::geometry::{render_icon, render_shadow, AnchorBox, RenderedIcon, RenderedShadow};
use crate::traits::DomElement;
use crate::Result;
use instant::Instant;

/// Creates a marker from the given configuration (the factory entry point).
pub fn icon(config: MarkerConfig) -> Result<VectorMarker> {
    VectorMarker::new(config)
}

/// A single map-pin marker: immutable configuration plus its own bounce
/// animation state. Markers share nothing with each other.
pub struct VectorMarker {
    config: MarkerConfig,
    animator: BounceAnimator,
}

impl VectorMarker {
    pub fn new(config: MarkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            animator: BounceAnimator::new(),
        })
    }

    pub fn config(&self) -> &MarkerConfig {
        &self.config
    }

    /// Renders the icon markup and anchor box.
    pub fn create_icon(&self) -> RenderedIcon {
        render_icon(&self.config)
    }

    /// Renders the shadow markup and anchor box, or `None` when the shadow
    /// is disabled.
    pub fn create_shadow(&self) -> Option<RenderedShadow> {
        render_shadow(&self.config)
    }

    /// Starts a bounce, replacing any in-flight one.
    pub fn bounce(&mut self, options: BounceOptions) {
        self.animator.bounce(options);
    }

    /// Starts a bounce with a completion callback.
    pub fn bounce_with(&mut self, options: BounceOptions, on_done: DoneCallback) {
        self.animator.bounce_with(options, Some(on_done));
    }

    /// Cancels any pending bounce; the returned rest offset should be applied
    /// so the nodes settle immediately.
    pub fn stop_bounce(&mut self) -> FloatOffset {
        self.animator.stop()
    }

    pub fn is_bouncing(&self) -> bool {
        self.animator.is_active()
    }

    /// Advances the bounce to `now`; `None` means no frame is needed.
    pub fn tick(&mut self, now: Instant) -> Option<FloatOffset> {
        self.animator.tick(now)
    }

    /// Advances the bounce to the current instant.
    pub fn update(&mut self) -> Option<FloatOffset> {
        self.animator.update()
    }

    /// Writes the current float margins into the icon and shadow nodes.
    pub fn apply_float_offset<E: DomElement + ?Sized>(
        &self,
        offset: FloatOffset,
        icon_el: &mut E,
        shadow_el: Option<&mut E>,
    ) {
        icon_el.set_descendant_style(
            "float-container",
            "margin-top",
            &px(offset.icon_margin_top()),
        );
        if let (Some(el), Some(transform)) = (shadow_el, self.config.shadow_transform()) {
            let margins = offset.shadow_margins(&transform);
            el.set_descendant_style("float-container", "margin-top", &px(margins.y));
            el.set_descendant_style("float-container", "margin-left", &px(margins.x));
        }
    }

    /// The configuration as a JSON value.
    pub fn options(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.config)?)
    }

    /// Replaces the configuration from a JSON option bag (partial bags merge
    /// against the defaults). The new configuration is validated before it
    /// takes effect.
    pub fn set_options(&mut self, options: serde_json::Value) -> Result<()> {
        let config: MarkerConfig = serde_json::from_value(options)?;
        config.validate()?;
        self.config = config;
        Ok(())
    }
}

impl RenderedIcon {
    /// Mounts the markup, class list and anchor-box styles into a host node.
    pub fn mount<E: DomElement + ?Sized>(&self, el: &mut E) {
        el.set_inner_html(&self.markup);
        el.set_class_name(&self.class_name);
        apply_anchor_box(el, &self.anchor);
    }
}

impl RenderedShadow {
    /// Mounts the markup, class list and anchor-box styles into a host node.
    pub fn mount<E: DomElement + ?Sized>(&self, el: &mut E) {
        el.set_inner_html(&self.markup);
        el.set_class_name(&self.class_name);
        apply_anchor_box(el, &self.anchor);
    }
}

fn apply_anchor_box<E: DomElement + ?Sized>(el: &mut E, anchor: &AnchorBox) {
    el.set_style("margin-left", &px(anchor.margin_left));
    el.set_style("margin-top", &px(anchor.margin_top));
    el.set_style("width", &px(anchor.width));
    el.set_style("height", &px(anchor.height));
}

fn px(value: f64) -> String {
    // Negative zero would otherwise render as "-0px"
    if value == 0.0 {
        "0px".to_string()
    } else {
        format!("{}px", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::Point;

    #[test]
    fn test_factory_validates_config() {
        let mut config = MarkerConfig::new();
        config.svg_height = 0.0;
        assert!(icon(config).is_err());
        assert!(icon(MarkerConfig::new()).is_ok());
    }

    #[test]
    fn test_disabled_shadow_yields_none() {
        let marker = icon(MarkerConfig::new().without_shadow()).unwrap();
        assert!(marker.create_shadow().is_none());
    }

    #[test]
    fn test_options_round_trip() {
        let marker = icon(MarkerConfig::new().with_marker_color("red")).unwrap();
        let value = marker.options().unwrap();
        assert_eq!(value["markerColor"], "red");
        assert_eq!(value["svgShadow"], serde_json::json!(true));

        let mut other = icon(MarkerConfig::new()).unwrap();
        other.set_options(value).unwrap();
        assert_eq!(other.config().marker_color, "red");
    }

    #[test]
    fn test_set_options_rejects_invalid_config() {
        let mut marker = icon(MarkerConfig::new()).unwrap();
        let err = marker.set_options(serde_json::json!({"svgWidth": -1.0}));
        assert!(err.is_err());
        // The prior configuration stays in effect
        assert_eq!(marker.config().svg_width, 32.0);
    }

    #[test]
    fn test_partial_option_bag_merges_defaults() {
        let mut marker = icon(MarkerConfig::new()).unwrap();
        marker
            .set_options(serde_json::json!({
                "iconSize": Point::new(16.0, 26.0),
                "svgShadow": {"skew": 0.5, "scale": 0.25}
            }))
            .unwrap();
        assert_eq!(marker.config().icon, "home");
        let shadow = marker.create_shadow().unwrap();
        assert_eq!(shadow.transform.skew, 0.5);
    }
}
