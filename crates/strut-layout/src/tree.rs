//! Layout tree management.
//!
//! [`LayoutTree`] owns every node in a slotmap arena and exposes the
//! host-facing API: structure mutation, style and measure configuration,
//! the dirty protocol, and [`calculate_layout`](LayoutTree::calculate_layout).

use std::fmt::Write as _;

use slotmap::{DefaultKey, SlotMap};
use thiserror::Error;
use tracing::trace;

use crate::computed::ComputedLayout;
use crate::math::UNDEFINED;
use crate::node::{LayoutNode, LayoutState, MeasureFunc, MeasureOutput};
use crate::solver::{self, LayoutContext};
use crate::style::{Style, StyleBuilder};

/// A key identifying a node in the layout tree.
pub type NodeKey = DefaultKey;

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors surfaced by tree and protocol operations.
///
/// Every variant is a caller bug rather than a transient condition; the
/// engine performs no I/O and never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The key does not refer to a live node in this tree.
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeKey),
    /// The child being inserted already has a parent.
    #[error("child is already attached to a parent")]
    ChildAlreadyAttached,
    /// The insertion would make a node its own ancestor.
    #[error("circular reference detected in the tree structure")]
    CircularReference,
    /// The recorded parent does not list the node as a child.
    #[error("node is not a child of the recorded parent")]
    NotAChild,
    /// A child index was past the end of the child list.
    #[error("child index {index} out of bounds for {len} children")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of children in the parent.
        len: usize,
    },
    /// A node was dirtied while holding an unconsumed layout.
    #[error("computed layout was never consumed; mark_layout_seen() was not called")]
    LayoutNotConsumed,
    /// `mark_layout_seen` was called without a fresh layout to consume.
    #[error("mark_layout_seen() called without a new layout")]
    NoNewLayout,
    /// `measure` was invoked on a node with no callback configured.
    #[error("no measure function configured for this node")]
    MeasureNotDefined,
}

/// A tree of layout nodes with flexbox solving and per-node memoization.
///
/// Nodes are created detached and wired up with
/// [`insert_child`](Self::insert_child) / [`add_child`](Self::add_child).
/// Any style or structure mutation marks the node and its ancestors dirty;
/// [`calculate_layout`](Self::calculate_layout) then recomputes exactly the
/// subtrees whose inputs changed.
#[derive(Default)]
pub struct LayoutTree {
    nodes: SlotMap<NodeKey, LayoutNode>,
}

impl LayoutTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::new(),
        }
    }

    /// Creates an empty tree with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity(capacity),
        }
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a detached node with the given style.
    pub fn create_node(&mut self, style: Style) -> NodeKey {
        self.nodes.insert(LayoutNode::new(style))
    }

    /// Creates a detached node with the default style.
    pub fn create_default_node(&mut self) -> NodeKey {
        self.create_node(Style::default())
    }

    /// Creates a detached node from a style builder.
    pub fn create_node_with_builder(&mut self, builder: StyleBuilder) -> NodeKey {
        self.create_node(builder.build())
    }

    /// Gets a reference to a node.
    #[must_use]
    pub fn get_node(&self, key: NodeKey) -> Option<&LayoutNode> {
        self.nodes.get(key)
    }

    /// Inserts `child` into `parent`'s child list at `index`, shifting later
    /// children right by one. The child must be detached.
    pub fn insert_child(
        &mut self,
        parent: NodeKey,
        index: usize,
        child: NodeKey,
    ) -> LayoutResult<()> {
        if !self.nodes.contains_key(parent) {
            return Err(LayoutError::NodeNotFound(parent));
        }
        let child_node = self
            .nodes
            .get(child)
            .ok_or(LayoutError::NodeNotFound(child))?;
        if child_node.parent.is_some() {
            return Err(LayoutError::ChildAlreadyAttached);
        }
        if self.is_ancestor(child, parent) {
            return Err(LayoutError::CircularReference);
        }
        let len = self.nodes[parent].children.len();
        if index > len {
            return Err(LayoutError::IndexOutOfBounds { index, len });
        }
        self.ensure_can_dirty(parent)?;

        self.nodes[parent].children.insert(index, child);
        self.nodes[child].parent = Some(parent);
        self.dirty(parent)
    }

    /// Appends `child` to `parent`'s child list. The child must be detached.
    pub fn add_child(&mut self, parent: NodeKey, child: NodeKey) -> LayoutResult<()> {
        let index = self
            .nodes
            .get(parent)
            .ok_or(LayoutError::NodeNotFound(parent))?
            .children
            .len();
        self.insert_child(parent, index, child)
    }

    /// Detaches and returns the child at `index`. The child stays in the
    /// tree as a detached node.
    pub fn remove_child_at(&mut self, parent: NodeKey, index: usize) -> LayoutResult<NodeKey> {
        let parent_node = self
            .nodes
            .get(parent)
            .ok_or(LayoutError::NodeNotFound(parent))?;
        let len = parent_node.children.len();
        if index >= len {
            return Err(LayoutError::IndexOutOfBounds { index, len });
        }
        self.ensure_can_dirty(parent)?;

        let child = self.nodes[parent].children.remove(index);
        self.nodes[child].parent = None;
        self.dirty(parent)?;
        Ok(child)
    }

    /// Detaches a node from its parent. A node with no parent is left as is;
    /// a recorded parent that does not list the node is a structure error.
    pub fn remove_from_parent(&mut self, child: NodeKey) -> LayoutResult<()> {
        let child_node = self
            .nodes
            .get(child)
            .ok_or(LayoutError::NodeNotFound(child))?;
        let Some(parent) = child_node.parent else {
            return Ok(());
        };
        let index = self.nodes[parent]
            .children
            .iter()
            .position(|&k| k == child)
            .ok_or(LayoutError::NotAChild)?;
        self.ensure_can_dirty(parent)?;

        self.nodes[parent].children.remove(index);
        self.nodes[child].parent = None;
        self.dirty(parent)
    }

    /// Detaches a node and drops it together with its whole subtree.
    pub fn remove_node(&mut self, key: NodeKey) -> LayoutResult<()> {
        self.remove_from_parent(key)?;

        let mut to_remove = vec![key];
        let mut i = 0;
        while i < to_remove.len() {
            if let Some(node) = self.nodes.get(to_remove[i]) {
                to_remove.extend(node.children.iter().copied());
            }
            i += 1;
        }
        for key in to_remove {
            self.nodes.remove(key);
        }
        Ok(())
    }

    /// Returns the number of children of a node.
    #[must_use]
    pub fn child_count(&self, key: NodeKey) -> usize {
        self.nodes.get(key).map_or(0, |n| n.children.len())
    }

    /// Returns the child at `index`, if present.
    #[must_use]
    pub fn child_at(&self, key: NodeKey, index: usize) -> Option<NodeKey> {
        self.nodes.get(key)?.children.get(index).copied()
    }

    /// Returns the parent of a node.
    #[must_use]
    pub fn parent(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key)?.parent
    }

    /// Returns all children of a node in layout order.
    #[must_use]
    pub fn children(&self, key: NodeKey) -> Option<&[NodeKey]> {
        self.nodes.get(key).map(|n| n.children.as_slice())
    }

    /// Returns the index of `child` within `parent`'s child list.
    #[must_use]
    pub fn index_of(&self, parent: NodeKey, child: NodeKey) -> Option<usize> {
        self.nodes
            .get(parent)?
            .children
            .iter()
            .position(|&k| k == child)
    }

    /// Returns a node's style.
    #[must_use]
    pub fn style(&self, key: NodeKey) -> Option<&Style> {
        self.nodes.get(key).map(|n| &n.style)
    }

    /// Replaces a node's style. Setting a tolerantly-equal style is a no-op;
    /// anything else dirties the node and its ancestors.
    pub fn set_style(&mut self, key: NodeKey, style: Style) -> LayoutResult<()> {
        let node = self
            .nodes
            .get_mut(key)
            .ok_or(LayoutError::NodeNotFound(key))?;
        if node.style.approx_eq(&style) {
            return Ok(());
        }
        self.ensure_can_dirty(key)?;
        self.nodes[key].style = style;
        self.dirty(key)
    }

    /// Installs or clears a node's measure callback.
    pub fn set_measure_func(
        &mut self,
        key: NodeKey,
        measure: Option<MeasureFunc>,
    ) -> LayoutResult<()> {
        if !self.nodes.contains_key(key) {
            return Err(LayoutError::NodeNotFound(key));
        }
        self.ensure_can_dirty(key)?;
        self.nodes[key].measure = measure;
        self.dirty(key)
    }

    /// Returns true if a measure callback is configured.
    #[must_use]
    pub fn is_measure_defined(&self, key: NodeKey) -> bool {
        self.nodes.get(key).is_some_and(LayoutNode::is_measure_defined)
    }

    /// Invokes a node's measure callback with the given available width.
    pub fn measure(&mut self, key: NodeKey, available_width: f32) -> LayoutResult<MeasureOutput> {
        let node = self
            .nodes
            .get_mut(key)
            .ok_or(LayoutError::NodeNotFound(key))?;
        let measure = node.measure.as_mut().ok_or(LayoutError::MeasureNotDefined)?;
        let mut output = MeasureOutput::default();
        measure(available_width, &mut output);
        Ok(output)
    }

    /// Returns a node's computed layout.
    #[must_use]
    pub fn layout(&self, key: NodeKey) -> Option<&ComputedLayout> {
        self.nodes.get(key).map(|n| &n.layout)
    }

    /// Returns true if the node's inputs changed since its last solve.
    #[must_use]
    pub fn is_dirty(&self, key: NodeKey) -> bool {
        self.nodes
            .get(key)
            .is_some_and(|n| n.state == LayoutState::Dirty)
    }

    /// Returns true if the node holds a layout the host has not consumed.
    #[must_use]
    pub fn has_new_layout(&self, key: NodeKey) -> bool {
        self.nodes
            .get(key)
            .is_some_and(|n| n.state == LayoutState::HasNewLayout)
    }

    /// Acknowledges a freshly computed layout.
    pub fn mark_layout_seen(&mut self, key: NodeKey) -> LayoutResult<()> {
        let node = self
            .nodes
            .get_mut(key)
            .ok_or(LayoutError::NodeNotFound(key))?;
        if node.state != LayoutState::HasNewLayout {
            return Err(LayoutError::NoNewLayout);
        }
        node.state = LayoutState::UpToDate;
        Ok(())
    }

    /// Forces a node (and its ancestors) dirty.
    pub fn mark_dirty(&mut self, key: NodeKey) -> LayoutResult<()> {
        if !self.nodes.contains_key(key) {
            return Err(LayoutError::NodeNotFound(key));
        }
        self.dirty(key)
    }

    /// Solves the subtree rooted at `key`.
    ///
    /// Clean subtrees whose cached inputs still match are copied from the
    /// memo instead of recomputed. Every recomputed node is left in the
    /// `HasNewLayout` state for the host to consume.
    pub fn calculate_layout(&mut self, key: NodeKey) -> LayoutResult<()> {
        let node = self
            .nodes
            .get_mut(key)
            .ok_or(LayoutError::NodeNotFound(key))?;
        trace!(?key, "calculate_layout");
        node.layout.reset();
        let mut ctx = LayoutContext::default();
        solver::layout_node(&mut self.nodes, &mut ctx, key, UNDEFINED, None);
        Ok(())
    }

    /// Returns the accumulated position of a node in the root's coordinate
    /// space, walking up the parent chain.
    #[must_use]
    pub fn world_position(&self, key: NodeKey) -> Option<(f32, f32)> {
        let node = self.nodes.get(key)?;
        let mut x = node.layout.x();
        let mut y = node.layout.y();
        let mut current = node.parent;
        while let Some(parent) = current {
            let parent_node = self.nodes.get(parent)?;
            x += parent_node.layout.x();
            y += parent_node.layout.y();
            current = parent_node.parent;
        }
        Some((x, y))
    }

    /// Iterates over all nodes in the tree.
    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &LayoutNode)> {
        self.nodes.iter()
    }

    /// Renders an indented dump of a subtree, one node per line, `__` per
    /// depth level so the structure survives whitespace-stripping tools.
    #[must_use]
    pub fn format_node(&self, key: NodeKey) -> String {
        let mut out = String::new();
        self.format_with_indentation(&mut out, key, 0);
        out
    }

    fn format_with_indentation(&self, out: &mut String, key: NodeKey, level: usize) {
        let Some(node) = self.nodes.get(key) else {
            return;
        };
        for _ in 0..level {
            out.push_str("__");
        }
        let _ = write!(
            out,
            "layout: {{left: {}, top: {}, width: {}, height: {}}}",
            node.layout.x(),
            node.layout.y(),
            node.layout.width(),
            node.layout.height()
        );
        if node.children.is_empty() {
            return;
        }
        out.push_str(", children: [\n");
        for &child in &node.children {
            self.format_with_indentation(out, child, level + 1);
            out.push('\n');
        }
        for _ in 0..level {
            out.push_str("__");
        }
        out.push(']');
    }

    /// Read-only probe of the dirty walk. Mutators call this before
    /// committing a structural change, so a protocol error surfaces with the
    /// tree untouched.
    fn ensure_can_dirty(&self, key: NodeKey) -> LayoutResult<()> {
        let mut current = Some(key);
        while let Some(key) = current {
            let node = self.nodes.get(key).ok_or(LayoutError::NodeNotFound(key))?;
            match node.state {
                LayoutState::Dirty => return Ok(()),
                LayoutState::HasNewLayout => return Err(LayoutError::LayoutNotConsumed),
                LayoutState::UpToDate => current = node.parent,
            }
        }
        Ok(())
    }

    /// Marks a node dirty and propagates up. A node already dirty stops the
    /// walk; a node holding an unconsumed layout is a protocol error.
    fn dirty(&mut self, key: NodeKey) -> LayoutResult<()> {
        let node = self
            .nodes
            .get_mut(key)
            .ok_or(LayoutError::NodeNotFound(key))?;
        match node.state {
            LayoutState::Dirty => Ok(()),
            LayoutState::HasNewLayout => Err(LayoutError::LayoutNotConsumed),
            LayoutState::UpToDate => {
                node.state = LayoutState::Dirty;
                let parent = node.parent;
                match parent {
                    Some(parent) => self.dirty(parent),
                    None => Ok(()),
                }
            }
        }
    }

    /// Checks whether `ancestor` appears on `descendant`'s parent chain.
    fn is_ancestor(&self, ancestor: NodeKey, descendant: NodeKey) -> bool {
        let mut current = Some(descendant);
        while let Some(key) = current {
            if key == ancestor {
                return true;
            }
            current = self.nodes.get(key).and_then(|n| n.parent);
        }
        false
    }
}

impl std::fmt::Debug for LayoutTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutTree")
            .field("node_count", &self.nodes.len())
            .finish()
    }
}
