//! Computed layout values.
//!
//! [`ComputedLayout`] is the solver's per-node output: the four resolved
//! edge positions (relative to the parent), the two dimensions, and the
//! resolved writing direction. [`CachedLayout`] remembers the inputs and
//! output of the last solve so an unchanged subtree can be reused.

use crate::math::{is_defined, UNDEFINED};
use crate::style::{Dim, DimValues, Direction, Edge, EdgeValues};

/// The resolved layout of a node after a solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedLayout {
    /// Edge positions within the parent (left, top, right, bottom). When an
    /// axis is fully resolved, `leading + dimension + trailing` equals the
    /// parent's dimension on that axis.
    pub position: EdgeValues,
    /// Resolved width and height.
    pub dimensions: DimValues,
    /// Writing direction the node resolved to.
    pub direction: Direction,
}

impl Default for ComputedLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputedLayout {
    /// A fresh result: positions at zero, dimensions unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: EdgeValues::zero(),
            dimensions: DimValues::undefined(),
            direction: Direction::Ltr,
        }
    }

    /// Clears the result back to its pre-solve state. The parent does this
    /// for each direct child before laying a line out.
    pub fn reset(&mut self) {
        self.position = EdgeValues::zero();
        self.dimensions = DimValues::undefined();
    }

    /// X position relative to the parent.
    #[must_use]
    pub fn x(&self) -> f32 {
        self.position[Edge::Left]
    }

    /// Y position relative to the parent.
    #[must_use]
    pub fn y(&self) -> f32 {
        self.position[Edge::Top]
    }

    /// Resolved width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.dimensions[Dim::Width]
    }

    /// Resolved height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.dimensions[Dim::Height]
    }

    /// True once both dimensions hold concrete values.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        is_defined(self.width()) && is_defined(self.height())
    }
}

/// Memo of the last solve, keyed by the inputs that can invalidate it.
///
/// Callers may pre-size a node by writing into its layout dimensions before
/// a solve; those requested values are part of the key, so re-parenting or
/// resizing forces a recompute even on a clean node.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CachedLayout {
    /// Layout width at entry to the last solve.
    pub requested_width: f32,
    /// Layout height at entry to the last solve.
    pub requested_height: f32,
    /// Parent width constraint of the last solve.
    pub parent_max_width: f32,
    /// Output of the last solve.
    pub result: ComputedLayout,
}

impl Default for CachedLayout {
    fn default() -> Self {
        Self {
            requested_width: UNDEFINED,
            requested_height: UNDEFINED,
            parent_max_width: UNDEFINED,
            result: ComputedLayout::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::is_undefined;

    #[test]
    fn test_new_layout_is_unresolved() {
        let layout = ComputedLayout::new();
        assert_eq!(layout.x(), 0.0);
        assert_eq!(layout.y(), 0.0);
        assert!(is_undefined(layout.width()));
        assert!(!layout.is_resolved());
    }

    #[test]
    fn test_reset_keeps_direction() {
        let mut layout = ComputedLayout::new();
        layout.direction = Direction::Rtl;
        layout.position[Edge::Left] = 10.0;
        layout.dimensions[Dim::Width] = 100.0;

        layout.reset();
        assert_eq!(layout.x(), 0.0);
        assert!(is_undefined(layout.width()));
        assert_eq!(layout.direction, Direction::Rtl);
    }

    #[test]
    fn test_accessors() {
        let mut layout = ComputedLayout::new();
        layout.position[Edge::Left] = 3.0;
        layout.position[Edge::Top] = 4.0;
        layout.dimensions[Dim::Width] = 5.0;
        layout.dimensions[Dim::Height] = 6.0;
        assert_eq!(layout.x(), 3.0);
        assert_eq!(layout.y(), 4.0);
        assert_eq!(layout.width(), 5.0);
        assert_eq!(layout.height(), 6.0);
        assert!(layout.is_resolved());
    }
}
