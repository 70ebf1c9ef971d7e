//! Style types for the layout engine.
//!
//! A [`Style`] carries every input attribute the solver consumes: axis
//! configuration, alignment, flexibility, dimensions and bounds, position
//! offsets, and the three per-edge [`Spacing`] vectors (margin, padding,
//! border). Numeric fields default to [`UNDEFINED`](crate::math::UNDEFINED),
//! meaning "auto".

use std::ops::{Index, IndexMut};

use crate::math::{approx_eq, is_defined, UNDEFINED};

/// Writing direction of a subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Take the parent's resolved direction (left-to-right at the root).
    #[default]
    Inherit,
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    /// Resolves `Inherit` against the parent's already-resolved direction.
    #[must_use]
    pub(crate) fn resolve(self, parent: Option<Direction>) -> Direction {
        match self {
            Direction::Inherit => parent.unwrap_or(Direction::Ltr),
            resolved => resolved,
        }
    }
}

/// Direction of a flex container's main axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FlexDirection {
    /// Items are placed in a column from top to bottom.
    #[default]
    Column,
    /// Items are placed in a column from bottom to top.
    ColumnReverse,
    /// Items are placed in a row from start to end.
    Row,
    /// Items are placed in a row from end to start.
    RowReverse,
}

impl FlexDirection {
    /// Returns true for `Row` and `RowReverse`.
    #[must_use]
    pub fn is_row(self) -> bool {
        matches!(self, FlexDirection::Row | FlexDirection::RowReverse)
    }

    /// Returns true for `Column` and `ColumnReverse`.
    #[must_use]
    pub fn is_column(self) -> bool {
        matches!(self, FlexDirection::Column | FlexDirection::ColumnReverse)
    }

    /// Returns true for the reverse variants.
    #[must_use]
    pub fn is_reverse(self) -> bool {
        matches!(
            self,
            FlexDirection::ColumnReverse | FlexDirection::RowReverse
        )
    }

    /// The edge a child is stacked from on this axis.
    pub(crate) fn leading_edge(self) -> Edge {
        match self {
            FlexDirection::Column => Edge::Top,
            FlexDirection::ColumnReverse => Edge::Bottom,
            FlexDirection::Row => Edge::Left,
            FlexDirection::RowReverse => Edge::Right,
        }
    }

    /// The edge opposite [`leading_edge`](Self::leading_edge).
    pub(crate) fn trailing_edge(self) -> Edge {
        match self {
            FlexDirection::Column => Edge::Bottom,
            FlexDirection::ColumnReverse => Edge::Top,
            FlexDirection::Row => Edge::Right,
            FlexDirection::RowReverse => Edge::Left,
        }
    }

    /// The dimension measured along this axis.
    pub(crate) fn dimension(self) -> Dim {
        if self.is_row() {
            Dim::Width
        } else {
            Dim::Height
        }
    }

    /// Spacing slot consulted first for the leading side of this axis.
    ///
    /// Rows consult START so that logical-start spacing follows the resolved
    /// direction; columns map straight to their physical edge.
    pub(crate) fn leading_spacing(self) -> SpacingSlot {
        match self {
            FlexDirection::Column => SpacingSlot::Top,
            FlexDirection::ColumnReverse => SpacingSlot::Bottom,
            FlexDirection::Row | FlexDirection::RowReverse => SpacingSlot::Start,
        }
    }

    /// Spacing slot consulted first for the trailing side of this axis.
    pub(crate) fn trailing_spacing(self) -> SpacingSlot {
        match self {
            FlexDirection::Column => SpacingSlot::Bottom,
            FlexDirection::ColumnReverse => SpacingSlot::Top,
            FlexDirection::Row | FlexDirection::RowReverse => SpacingSlot::End,
        }
    }

    /// Applies the writing direction: under RTL the row axes swap.
    #[must_use]
    pub(crate) fn resolve(self, direction: Direction) -> FlexDirection {
        if direction == Direction::Rtl {
            match self {
                FlexDirection::Row => FlexDirection::RowReverse,
                FlexDirection::RowReverse => FlexDirection::Row,
                column => column,
            }
        } else {
            self
        }
    }

    /// The axis perpendicular to this one, resolved for the direction.
    #[must_use]
    pub(crate) fn cross(self, direction: Direction) -> FlexDirection {
        if self.is_column() {
            FlexDirection::Row.resolve(direction)
        } else {
            FlexDirection::Column
        }
    }
}

/// Alignment of children along the main axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum JustifyContent {
    /// Children are packed toward the leading edge.
    #[default]
    FlexStart,
    /// Children are centered.
    Center,
    /// Children are packed toward the trailing edge.
    FlexEnd,
    /// Remaining space is distributed between children.
    SpaceBetween,
    /// Remaining space is distributed around children.
    SpaceAround,
}

/// Alignment of children along the cross axis, of a single child
/// (`align_self`), and of lines (`align_content`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Align {
    /// For `align_self` only: inherit the parent's `align_items`.
    Auto,
    /// Align at the leading cross edge.
    FlexStart,
    /// Center along the cross axis.
    Center,
    /// Align at the trailing cross edge.
    FlexEnd,
    /// Stretch to fill the container's cross axis.
    Stretch,
}

/// Whether a child participates in flex flow or is positioned by offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PositionType {
    /// The child participates in normal flex flow.
    #[default]
    Relative,
    /// The child is placed by explicit offsets against the parent.
    Absolute,
}

/// Whether children wrap onto new lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FlexWrap {
    /// Children stay on a single line.
    #[default]
    NoWrap,
    /// Children wrap when they overflow the defined main dimension.
    Wrap,
}

/// A physical box edge. Doubles as the index into [`EdgeValues`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Left edge.
    Left = 0,
    /// Top edge.
    Top = 1,
    /// Right edge.
    Right = 2,
    /// Bottom edge.
    Bottom = 3,
}

/// A box dimension. Doubles as the index into [`DimValues`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dim {
    /// Horizontal extent.
    Width = 0,
    /// Vertical extent.
    Height = 1,
}

/// Four per-edge floats indexed by [`Edge`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeValues(pub [f32; 4]);

impl EdgeValues {
    /// All edges zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0.0; 4])
    }

    /// All edges unset.
    #[must_use]
    pub const fn undefined() -> Self {
        Self([UNDEFINED; 4])
    }

    pub(crate) fn approx_eq(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| approx_eq(*a, *b))
    }
}

impl Index<Edge> for EdgeValues {
    type Output = f32;

    fn index(&self, edge: Edge) -> &f32 {
        &self.0[edge as usize]
    }
}

impl IndexMut<Edge> for EdgeValues {
    fn index_mut(&mut self, edge: Edge) -> &mut f32 {
        &mut self.0[edge as usize]
    }
}

/// Two per-axis floats indexed by [`Dim`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimValues(pub [f32; 2]);

impl DimValues {
    /// Both dimensions unset.
    #[must_use]
    pub const fn undefined() -> Self {
        Self([UNDEFINED; 2])
    }

    pub(crate) fn approx_eq(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| approx_eq(*a, *b))
    }
}

impl Index<Dim> for DimValues {
    type Output = f32;

    fn index(&self, dim: Dim) -> &f32 {
        &self.0[dim as usize]
    }
}

impl IndexMut<Dim> for DimValues {
    fn index_mut(&mut self, dim: Dim) -> &mut f32 {
        &mut self.0[dim as usize]
    }
}

/// A storage slot in a [`Spacing`] vector.
///
/// The first four slots coincide with the physical edges; the rest are the
/// logical and shorthand slots resolved through the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingSlot {
    /// Left edge.
    Left = 0,
    /// Top edge.
    Top = 1,
    /// Right edge.
    Right = 2,
    /// Bottom edge.
    Bottom = 3,
    /// Logical start edge (left under LTR, right under RTL).
    Start = 4,
    /// Logical end edge.
    End = 5,
    /// Shorthand for both horizontal edges.
    Horizontal = 6,
    /// Shorthand for both vertical edges.
    Vertical = 7,
    /// Shorthand for all four edges.
    All = 8,
}

/// Per-edge value storage with shorthand fallbacks.
///
/// A read of an unset edge falls back in the order: physical edge →
/// horizontal/vertical shorthand → all-edges shorthand → zero. Logical
/// START/END slots are consulted before the physical edge by the axis
/// queries in the solver.
#[derive(Debug, Clone, Copy)]
pub struct Spacing {
    values: [f32; 9],
}

impl Default for Spacing {
    fn default() -> Self {
        Self::none()
    }
}

impl Spacing {
    /// A spacing vector with every slot unset.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            values: [UNDEFINED; 9],
        }
    }

    /// A spacing vector with the ALL shorthand set.
    #[must_use]
    pub fn all(value: f32) -> Self {
        let mut spacing = Self::none();
        spacing.set(SpacingSlot::All, value);
        spacing
    }

    /// Writes a slot. Passing an unset value clears the slot.
    pub fn set(&mut self, slot: SpacingSlot, value: f32) {
        self.values[slot as usize] = value;
    }

    /// Reads a slot without fallback resolution.
    #[must_use]
    pub fn raw(&self, slot: SpacingSlot) -> f32 {
        self.values[slot as usize]
    }

    /// Resolves a value for one edge of the box.
    ///
    /// `primary` is the logical slot consulted first (START/END for rows,
    /// the physical edge for columns); `secondary` is the physical edge the
    /// query is ultimately about, which also selects the horizontal or
    /// vertical shorthand.
    #[must_use]
    pub fn get_with_fallback(&self, primary: SpacingSlot, secondary: Edge) -> f32 {
        let value = self.values[primary as usize];
        if is_defined(value) {
            return value;
        }
        let value = self.values[secondary as usize];
        if is_defined(value) {
            return value;
        }
        let shorthand = match secondary {
            Edge::Top | Edge::Bottom => SpacingSlot::Vertical,
            Edge::Left | Edge::Right => SpacingSlot::Horizontal,
        };
        let value = self.values[shorthand as usize];
        if is_defined(value) {
            return value;
        }
        let value = self.values[SpacingSlot::All as usize];
        if is_defined(value) {
            value
        } else {
            0.0
        }
    }

    pub(crate) fn approx_eq(&self, other: &Self) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| approx_eq(*a, *b))
    }
}

/// Input attributes for one node.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    /// Writing direction of this subtree.
    pub direction: Direction,
    /// Main-axis orientation of this container.
    pub flex_direction: FlexDirection,
    /// Main-axis alignment of this container's children.
    pub justify_content: JustifyContent,
    /// Cross-axis alignment of this container's children.
    pub align_items: Align,
    /// Per-child override of the parent's `align_items`.
    pub align_self: Align,
    /// Cross-axis alignment of lines in a wrapping container.
    pub align_content: Align,
    /// Flow participation of this node within its parent.
    pub position_type: PositionType,
    /// Line wrapping behavior of this container.
    pub flex_wrap: FlexWrap,
    /// Flex weight; any positive value makes the node flexible.
    pub flex: f32,
    /// Requested width and height.
    pub dimensions: DimValues,
    /// Lower bounds for the dimensions.
    pub min_dimensions: DimValues,
    /// Upper bounds for the dimensions.
    pub max_dimensions: DimValues,
    /// Position offsets (left, top, right, bottom).
    pub position: EdgeValues,
    /// Outer spacing.
    pub margin: Spacing,
    /// Inner spacing.
    pub padding: Spacing,
    /// Border widths.
    pub border: Spacing,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            direction: Direction::Inherit,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::FlexStart,
            align_items: Align::Stretch,
            align_self: Align::Auto,
            align_content: Align::FlexStart,
            position_type: PositionType::Relative,
            flex_wrap: FlexWrap::NoWrap,
            flex: 0.0,
            dimensions: DimValues::undefined(),
            min_dimensions: DimValues::undefined(),
            max_dimensions: DimValues::undefined(),
            position: EdgeValues::undefined(),
            margin: Spacing::none(),
            padding: Spacing::none(),
            border: Spacing::none(),
        }
    }
}

impl Style {
    /// Starts a fluent [`StyleBuilder`].
    #[must_use]
    pub fn builder() -> StyleBuilder {
        StyleBuilder::new()
    }

    /// Tolerant structural equality, used to keep style setters idempotent.
    /// Unset floats compare equal to each other.
    #[must_use]
    pub fn approx_eq(&self, other: &Style) -> bool {
        self.direction == other.direction
            && self.flex_direction == other.flex_direction
            && self.justify_content == other.justify_content
            && self.align_items == other.align_items
            && self.align_self == other.align_self
            && self.align_content == other.align_content
            && self.position_type == other.position_type
            && self.flex_wrap == other.flex_wrap
            && approx_eq(self.flex, other.flex)
            && self.dimensions.approx_eq(&other.dimensions)
            && self.min_dimensions.approx_eq(&other.min_dimensions)
            && self.max_dimensions.approx_eq(&other.max_dimensions)
            && self.position.approx_eq(&other.position)
            && self.margin.approx_eq(&other.margin)
            && self.padding.approx_eq(&other.padding)
            && self.border.approx_eq(&other.border)
    }
}

/// Builder for [`Style`] with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    /// Creates a builder holding the default style.
    #[must_use]
    pub fn new() -> Self {
        Self {
            style: Style::default(),
        }
    }

    /// Sets the writing direction.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.style.direction = direction;
        self
    }

    /// Sets the main-axis orientation.
    #[must_use]
    pub fn flex_direction(mut self, direction: FlexDirection) -> Self {
        self.style.flex_direction = direction;
        self
    }

    /// Sets the main-axis alignment.
    #[must_use]
    pub fn justify_content(mut self, justify: JustifyContent) -> Self {
        self.style.justify_content = justify;
        self
    }

    /// Sets the cross-axis alignment of children.
    #[must_use]
    pub fn align_items(mut self, align: Align) -> Self {
        self.style.align_items = align;
        self
    }

    /// Sets the per-child cross-axis override.
    #[must_use]
    pub fn align_self(mut self, align: Align) -> Self {
        self.style.align_self = align;
        self
    }

    /// Sets the line alignment for wrapping containers.
    #[must_use]
    pub fn align_content(mut self, align: Align) -> Self {
        self.style.align_content = align;
        self
    }

    /// Sets the flow participation.
    #[must_use]
    pub fn position_type(mut self, position: PositionType) -> Self {
        self.style.position_type = position;
        self
    }

    /// Sets the wrapping behavior.
    #[must_use]
    pub fn flex_wrap(mut self, wrap: FlexWrap) -> Self {
        self.style.flex_wrap = wrap;
        self
    }

    /// Sets the flex weight.
    #[must_use]
    pub fn flex(mut self, flex: f32) -> Self {
        self.style.flex = flex;
        self
    }

    /// Sets the requested width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.style.dimensions[Dim::Width] = width;
        self
    }

    /// Sets the requested height.
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.style.dimensions[Dim::Height] = height;
        self
    }

    /// Sets the minimum width.
    #[must_use]
    pub fn min_width(mut self, width: f32) -> Self {
        self.style.min_dimensions[Dim::Width] = width;
        self
    }

    /// Sets the minimum height.
    #[must_use]
    pub fn min_height(mut self, height: f32) -> Self {
        self.style.min_dimensions[Dim::Height] = height;
        self
    }

    /// Sets the maximum width.
    #[must_use]
    pub fn max_width(mut self, width: f32) -> Self {
        self.style.max_dimensions[Dim::Width] = width;
        self
    }

    /// Sets the maximum height.
    #[must_use]
    pub fn max_height(mut self, height: f32) -> Self {
        self.style.max_dimensions[Dim::Height] = height;
        self
    }

    /// Sets the left position offset.
    #[must_use]
    pub fn left(mut self, left: f32) -> Self {
        self.style.position[Edge::Left] = left;
        self
    }

    /// Sets the top position offset.
    #[must_use]
    pub fn top(mut self, top: f32) -> Self {
        self.style.position[Edge::Top] = top;
        self
    }

    /// Sets the right position offset.
    #[must_use]
    pub fn right(mut self, right: f32) -> Self {
        self.style.position[Edge::Right] = right;
        self
    }

    /// Sets the bottom position offset.
    #[must_use]
    pub fn bottom(mut self, bottom: f32) -> Self {
        self.style.position[Edge::Bottom] = bottom;
        self
    }

    /// Sets one margin slot.
    #[must_use]
    pub fn margin(mut self, slot: SpacingSlot, value: f32) -> Self {
        self.style.margin.set(slot, value);
        self
    }

    /// Sets the margin on all edges.
    #[must_use]
    pub fn margin_all(mut self, value: f32) -> Self {
        self.style.margin.set(SpacingSlot::All, value);
        self
    }

    /// Sets one padding slot.
    #[must_use]
    pub fn padding(mut self, slot: SpacingSlot, value: f32) -> Self {
        self.style.padding.set(slot, value);
        self
    }

    /// Sets the padding on all edges.
    #[must_use]
    pub fn padding_all(mut self, value: f32) -> Self {
        self.style.padding.set(SpacingSlot::All, value);
        self
    }

    /// Sets one border slot.
    #[must_use]
    pub fn border(mut self, slot: SpacingSlot, value: f32) -> Self {
        self.style.border.set(slot, value);
        self
    }

    /// Sets the border width on all edges.
    #[must_use]
    pub fn border_all(mut self, value: f32) -> Self {
        self.style.border.set(SpacingSlot::All, value);
        self
    }

    /// Returns the style under construction.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Consumes the builder and returns the style.
    #[must_use]
    pub fn build(self) -> Style {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::is_undefined;

    #[test]
    fn test_default_style() {
        let style = Style::default();
        assert_eq!(style.direction, Direction::Inherit);
        assert_eq!(style.flex_direction, FlexDirection::Column);
        assert_eq!(style.justify_content, JustifyContent::FlexStart);
        assert_eq!(style.align_items, Align::Stretch);
        assert_eq!(style.align_self, Align::Auto);
        assert_eq!(style.align_content, Align::FlexStart);
        assert_eq!(style.flex, 0.0);
        assert!(is_undefined(style.dimensions[Dim::Width]));
        assert!(is_undefined(style.position[Edge::Left]));
    }

    #[test]
    fn test_spacing_fallback_chain() {
        let mut spacing = Spacing::none();
        assert_eq!(spacing.get_with_fallback(SpacingSlot::Start, Edge::Left), 0.0);

        spacing.set(SpacingSlot::All, 1.0);
        assert_eq!(spacing.get_with_fallback(SpacingSlot::Start, Edge::Left), 1.0);

        spacing.set(SpacingSlot::Horizontal, 2.0);
        assert_eq!(spacing.get_with_fallback(SpacingSlot::Start, Edge::Left), 2.0);
        // Vertical edges are not affected by the horizontal shorthand.
        assert_eq!(spacing.get_with_fallback(SpacingSlot::Top, Edge::Top), 1.0);

        spacing.set(SpacingSlot::Left, 3.0);
        assert_eq!(spacing.get_with_fallback(SpacingSlot::Start, Edge::Left), 3.0);

        spacing.set(SpacingSlot::Start, 4.0);
        assert_eq!(spacing.get_with_fallback(SpacingSlot::Start, Edge::Left), 4.0);
    }

    #[test]
    fn test_spacing_more_specific_slot_only_narrows() {
        // Defining a more specific slot changes the result to that slot and
        // leaves unrelated queries alone.
        let mut spacing = Spacing::all(5.0);
        spacing.set(SpacingSlot::Top, 9.0);
        assert_eq!(spacing.get_with_fallback(SpacingSlot::Top, Edge::Top), 9.0);
        assert_eq!(spacing.get_with_fallback(SpacingSlot::Bottom, Edge::Bottom), 5.0);
        assert_eq!(spacing.get_with_fallback(SpacingSlot::Start, Edge::Left), 5.0);
    }

    #[test]
    fn test_axis_resolution_rtl() {
        assert_eq!(
            FlexDirection::Row.resolve(Direction::Rtl),
            FlexDirection::RowReverse
        );
        assert_eq!(
            FlexDirection::RowReverse.resolve(Direction::Rtl),
            FlexDirection::Row
        );
        assert_eq!(
            FlexDirection::Column.resolve(Direction::Rtl),
            FlexDirection::Column
        );
        assert_eq!(
            FlexDirection::Row.resolve(Direction::Ltr),
            FlexDirection::Row
        );
    }

    #[test]
    fn test_cross_axis() {
        assert_eq!(
            FlexDirection::Column.cross(Direction::Ltr),
            FlexDirection::Row
        );
        assert_eq!(
            FlexDirection::Column.cross(Direction::Rtl),
            FlexDirection::RowReverse
        );
        assert_eq!(
            FlexDirection::Row.cross(Direction::Ltr),
            FlexDirection::Column
        );
        assert_eq!(
            FlexDirection::RowReverse.cross(Direction::Rtl),
            FlexDirection::Column
        );
    }

    #[test]
    fn test_edge_tables() {
        assert_eq!(FlexDirection::Row.leading_edge(), Edge::Left);
        assert_eq!(FlexDirection::RowReverse.leading_edge(), Edge::Right);
        assert_eq!(FlexDirection::ColumnReverse.trailing_edge(), Edge::Top);
        assert_eq!(FlexDirection::Row.dimension(), Dim::Width);
        assert_eq!(FlexDirection::Column.dimension(), Dim::Height);
        assert_eq!(FlexDirection::RowReverse.leading_spacing(), SpacingSlot::Start);
        assert_eq!(FlexDirection::Column.leading_spacing(), SpacingSlot::Top);
    }

    #[test]
    fn test_direction_resolve() {
        assert_eq!(Direction::Inherit.resolve(None), Direction::Ltr);
        assert_eq!(Direction::Inherit.resolve(Some(Direction::Rtl)), Direction::Rtl);
        assert_eq!(Direction::Ltr.resolve(Some(Direction::Rtl)), Direction::Ltr);
    }

    #[test]
    fn test_builder_chaining() {
        let style = Style::builder()
            .flex_direction(FlexDirection::Row)
            .justify_content(JustifyContent::Center)
            .width(100.0)
            .height(50.0)
            .padding_all(5.0)
            .flex(1.0)
            .build();

        assert_eq!(style.flex_direction, FlexDirection::Row);
        assert_eq!(style.justify_content, JustifyContent::Center);
        assert_eq!(style.dimensions[Dim::Width], 100.0);
        assert_eq!(style.dimensions[Dim::Height], 50.0);
        assert_eq!(style.flex, 1.0);
        assert_eq!(style.padding.get_with_fallback(SpacingSlot::Top, Edge::Top), 5.0);
    }

    #[test]
    fn test_style_approx_eq() {
        let a = Style::builder().width(10.0).build();
        let b = Style::builder().width(10.0 + 1e-5).build();
        let c = Style::builder().width(11.0).build();
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&c));
        assert!(Style::default().approx_eq(&Style::default()));
    }
}
