//! Seam traits for the host overlay framework
//!
//! Pinlet computes markup and metrics; the host owns the actual nodes. The
//! [`DomElement`] trait is the minimal mutation surface the marker writes
//! through when the host hands it a node.

/// A DOM-like node the host positions on its canvas.
pub trait DomElement {
    /// Replaces the node's inner markup.
    fn set_inner_html(&mut self, markup: &str);

    /// Replaces the node's class list.
    fn set_class_name(&mut self, class: &str);

    /// Sets an inline style property on the node itself.
    fn set_style(&mut self, property: &str, value: &str);

    /// Sets an inline style property on the first descendant carrying the
    /// given class.
    fn set_descendant_style(&mut self, class: &str, property: &str, value: &str);
}
