//! Flexbox layout engine for `Strut`.
//!
//! This crate turns a tree of style nodes plus a parent width constraint
//! into concrete (x, y, width, height) rectangles for every node. It
//! implements the subset of CSS3 Flexible Box Layout needed for UI
//! composition: main/cross axes, the four flex directions, wrapping,
//! justify-content, align-items/self/content, absolute and relative
//! positioning, LTR/RTL direction inheritance, fixed and flexible sizing,
//! min/max bounds, margin/padding/border, and a host-supplied measure
//! callback for leaf content such as text.
//!
//! # Overview
//!
//! The building blocks:
//!
//! - [`LayoutTree`]: an arena of nodes with the host-facing API
//! - [`Style`] / [`StyleBuilder`]: the per-node input attributes
//! - [`ComputedLayout`]: the resolved position and size after a solve
//! - [`MeasureFunc`]: an optional leaf sizer invoked during the solve
//!
//! # Example
//!
//! ```rust
//! use strut_layout::{FlexDirection, LayoutTree, Style};
//!
//! let mut tree = LayoutTree::new();
//! let root = tree.create_node(
//!     Style::builder()
//!         .flex_direction(FlexDirection::Row)
//!         .width(200.0)
//!         .height(50.0)
//!         .build(),
//! );
//! let sidebar = tree.create_node(Style::builder().width(60.0).build());
//! let content = tree.create_node(Style::builder().flex(1.0).build());
//! tree.add_child(root, sidebar).unwrap();
//! tree.add_child(root, content).unwrap();
//!
//! tree.calculate_layout(root).unwrap();
//!
//! let layout = tree.layout(content).unwrap();
//! assert_eq!(layout.x(), 60.0);
//! assert_eq!(layout.width(), 140.0);
//! ```
//!
//! # Dirty tracking
//!
//! Layout is recomputed per node, only when needed. Mutating a style or the
//! tree structure marks the node and its ancestors dirty; a solve skips
//! clean subtrees whose cached inputs still match and restores their memoized
//! result instead. Every recomputed node is handed to the host in the
//! `HasNewLayout` state and must be acknowledged with
//! [`LayoutTree::mark_layout_seen`] before the next round of mutations.
//!
//! # Threading
//!
//! Everything is single-threaded and synchronous.
//! [`LayoutTree::calculate_layout`] runs to completion on the calling
//! thread, and measure callbacks execute inline on that thread, one at a
//! time.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]

mod computed;
mod math;
mod node;
mod solver;
mod style;
mod tree;

// Re-export all public types
pub use computed::ComputedLayout;
pub use math::{approx_eq, is_defined, is_undefined, UNDEFINED};
pub use node::{LayoutNode, LayoutState, MeasureFunc, MeasureOutput};
pub use style::{
    Align, Dim, DimValues, Direction, Edge, EdgeValues, FlexDirection, FlexWrap, JustifyContent,
    PositionType, Spacing, SpacingSlot, Style, StyleBuilder,
};
pub use tree::{LayoutError, LayoutResult, LayoutTree, NodeKey};

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use strut_layout::prelude::*;
/// ```
pub mod prelude {
    pub use crate::computed::ComputedLayout;
    pub use crate::node::{LayoutNode, LayoutState, MeasureFunc, MeasureOutput};
    pub use crate::style::{
        Align, Dim, Direction, Edge, FlexDirection, FlexWrap, JustifyContent, PositionType,
        Spacing, SpacingSlot, Style, StyleBuilder,
    };
    pub use crate::tree::{LayoutError, LayoutResult, LayoutTree, NodeKey};
}
