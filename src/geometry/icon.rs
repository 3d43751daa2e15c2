//! Icon markup and anchor metrics
//!
//! Pure functions that turn a [`MarkerConfig`] into the pin's SVG markup and
//! the anchor box the host overlay uses to place the node. The authored path
//! auto-scales to the requested render size: the svg carries explicit pixel
//! dimensions with `preserveAspectRatio` disabled, so non-uniform scaling is
//! permitted.

use crate::core::config::MarkerConfig;
use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Placement contract for a marker node.
///
/// The host applies the margins and dimensions as inline styles so the anchor
/// point lands exactly on the target coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorBox {
    pub margin_left: f64,
    pub margin_top: f64,
    pub width: f64,
    pub height: f64,
}

impl AnchorBox {
    /// Computes the box for a node of `size` anchored at `anchor`, falling
    /// back to half-size centering when no anchor is given.
    pub fn compute(size: Point, anchor: Option<Point>) -> Self {
        let anchor = anchor.unwrap_or_else(|| size.divide_by(2.0, true));
        Self {
            margin_left: -anchor.x,
            margin_top: -anchor.y,
            width: size.x,
            height: size.y,
        }
    }
}

/// Markup and placement metrics for the icon node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedIcon {
    /// SVG markup wrapped in a `float-container` div, embeddable in any
    /// DOM-like tree.
    pub markup: String,
    /// Class list for the node itself.
    pub class_name: String,
    pub anchor: AnchorBox,
}

/// Renders the pin markup and anchor box for the given configuration.
pub fn render_icon(config: &MarkerConfig) -> RenderedIcon {
    let size = config.icon_size;
    let glyph = if config.icon.is_empty() {
        String::new()
    } else {
        glyph_fragment(config)
    };
    let markup = format!(
        "<div class=\"float-container\">\
         <svg width=\"{}px\" height=\"{}px\" preserveAspectRatio=\"none\" \
         viewBox=\"0 0 {} {}\" version=\"1.1\" \
         xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\">\
         <path d=\"{}\" fill=\"{}\"></path>{}</svg></div>",
        size.x,
        size.y,
        config.svg_width,
        config.svg_height,
        config.svg_path,
        config.marker_color,
        glyph
    );
    RenderedIcon {
        markup,
        class_name: format!(
            "vector-marker-icon-{} {}",
            config.marker_color, config.class_name
        ),
        anchor: AnchorBox::compute(size, Some(config.resolved_icon_anchor())),
    }
}

/// Composes the `<i>` glyph element placed over the pin.
///
/// The glyph class is `prefix-icon` unless the icon name already carries the
/// prefix (or the prefix is empty), so `fa` + `fa-home` never becomes
/// `fa-fa-home`. When the rendered size differs from the authored space, the
/// calibrated top offset and font size are rescaled linearly per axis and
/// emitted as inline styles to keep the glyph centered and legible.
fn glyph_fragment(config: &MarkerConfig) -> String {
    let glyph_class = if config.prefix.is_empty()
        || config
            .icon
            .starts_with(&format!("{}-", config.prefix))
    {
        config.icon.clone()
    } else {
        format!("{}-{}", config.prefix, config.icon)
    };

    let spin_class = if config.spin && !config.spin_class.is_empty() {
        config.spin_class.as_str()
    } else {
        ""
    };

    let mut color_class = String::new();
    let mut style = String::from("style='");
    if !config.font_icon_color.is_empty() {
        if config.font_icon_color == "white" || config.font_icon_color == "black" {
            color_class = format!("icon-{}", config.font_icon_color);
        } else {
            style.push_str(&format!("color: {};", config.font_icon_color));
        }
    }

    let size = config.icon_size;
    if size.y != config.svg_height {
        let font_top = (config.svg_font_top * size.y / config.svg_height).round() as i64;
        style.push_str(&format!("top:{}px;", font_top));
    }
    if size.x != config.svg_width {
        let font_size = (config.svg_font_size * size.x / config.svg_width).round() as i64;
        style.push_str(&format!("font-size:{}px;", font_size));
        style.push_str(&format!("width:{}px;", size.x));
    }
    style.push_str("' ");

    format!(
        "<i {}class='{} {} {} {} {}'></i>",
        style, config.extra_classes, config.prefix, glyph_class, spin_class, color_class
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_box_from_explicit_anchor() {
        let rendered = render_icon(&MarkerConfig::new());
        assert_eq!(rendered.anchor.margin_left, -16.0);
        assert_eq!(rendered.anchor.margin_top, -52.0);
        assert_eq!(rendered.anchor.width, 32.0);
        assert_eq!(rendered.anchor.height, 52.0);
    }

    #[test]
    fn test_anchor_box_derived_bottom_center() {
        let config = MarkerConfig::new().with_icon_size(Point::new(25.0, 41.0));
        let rendered = render_icon(&config);
        assert_eq!(rendered.anchor.margin_left, -13.0);
        assert_eq!(rendered.anchor.margin_top, -41.0);
    }

    #[test]
    fn test_anchor_box_half_size_fallback() {
        let anchor_box = AnchorBox::compute(Point::new(33.0, 51.0), None);
        assert_eq!(anchor_box.margin_left, -17.0);
        assert_eq!(anchor_box.margin_top, -26.0);
    }

    #[test]
    fn test_markup_scales_authored_space() {
        let rendered = render_icon(&MarkerConfig::new());
        assert!(rendered.markup.contains("width=\"32px\" height=\"52px\""));
        assert!(rendered.markup.contains("viewBox=\"0 0 32 52\""));
        assert!(rendered.markup.contains("preserveAspectRatio=\"none\""));
        assert!(rendered.markup.contains("fill=\"blue\""));
    }

    #[test]
    fn test_no_double_prefix() {
        let config = MarkerConfig::new().with_icon("fa-home");
        let rendered = render_icon(&config);
        assert!(rendered.markup.contains(" fa fa-home "));
        assert!(!rendered.markup.contains("fa-fa-home"));
    }

    #[test]
    fn test_empty_prefix_uses_icon_verbatim() {
        let config = MarkerConfig::new().with_prefix("").with_icon("glyphicon-ok");
        let rendered = render_icon(&config);
        assert!(rendered.markup.contains("glyphicon-ok"));
    }

    #[test]
    fn test_authored_size_emits_no_font_overrides() {
        let rendered = render_icon(&MarkerConfig::new());
        assert!(!rendered.markup.contains("font-size:"));
        assert!(!rendered.markup.contains("top:"));
    }

    #[test]
    fn test_half_size_rescales_glyph() {
        let config = MarkerConfig::new().with_icon_size(Point::new(16.0, 26.0));
        let rendered = render_icon(&config);
        // fontTop = round(8 * 26/52) = 4, fontSize = round(14 * 16/32) = 7
        assert!(rendered.markup.contains("top:4px;"));
        assert!(rendered.markup.contains("font-size:7px;"));
        assert!(rendered.markup.contains("width:16px;"));
    }

    #[test]
    fn test_well_known_colors_use_classes() {
        let rendered = render_icon(&MarkerConfig::new());
        assert!(rendered.markup.contains("icon-white"));
        assert!(!rendered.markup.contains("color: white"));

        let config = MarkerConfig::new().with_font_icon_color("#ffcc00");
        let rendered = render_icon(&config);
        assert!(rendered.markup.contains("color: #ffcc00;"));
        assert!(!rendered.markup.contains("icon-#ffcc00"));
    }

    #[test]
    fn test_spin_class_appended_on_request() {
        let rendered = render_icon(&MarkerConfig::new().with_spin(true));
        assert!(rendered.markup.contains("fa-spin"));

        let rendered = render_icon(&MarkerConfig::new());
        assert!(!rendered.markup.contains("fa-spin"));
    }

    #[test]
    fn test_empty_icon_omits_glyph() {
        let rendered = render_icon(&MarkerConfig::new().with_icon(""));
        assert!(!rendered.markup.contains("<i "));
    }

    #[test]
    fn test_node_class_carries_color_and_class_name() {
        let rendered = render_icon(&MarkerConfig::new().with_marker_color("red"));
        assert_eq!(rendered.class_name, "vector-marker-icon-red vector-marker");
    }
}
