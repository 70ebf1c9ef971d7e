//! The recursive flexbox solver.
//!
//! [`layout_node`] is the recursion entry: it consults the per-node memo and
//! either restores the cached result or runs [`layout_node_impl`], which
//! performs the passes over the children of one node:
//!
//! - Loop A sizes and classifies children one line at a time,
//! - Loop B distributes the remaining main-axis space to flexible children,
//! - Loop C positions children along the main axis,
//! - Loop D positions children along the cross axis,
//! - Loop E aligns lines when the container wrapped,
//! - Loop F backfills trailing positions for reverse axes,
//! - Loop G finalizes absolutely positioned children.
//!
//! All numeric work runs on the NaN-sentinel semantics from
//! [`math`](crate::math): an unset operand makes the result unset, and
//! ordered comparisons against an unset value are false.

use slotmap::SlotMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::math::{approx_eq, is_defined, is_undefined, UNDEFINED};
use crate::node::{LayoutNode, LayoutState, MeasureOutput};
use crate::style::{
    Align, Dim, Direction, Edge, FlexDirection, FlexWrap, JustifyContent, PositionType, Style,
};
use crate::tree::NodeKey;

/// Per-solve scratch carried by reference through the recursion.
///
/// Holds the single [`MeasureOutput`] buffer lent to measure callbacks so a
/// deep tree does not allocate one per leaf.
#[derive(Default)]
pub(crate) struct LayoutContext {
    pub(crate) measure_output: MeasureOutput,
}

/// Recursion entry: memo check, bookkeeping, and the solve itself.
pub(crate) fn layout_node(
    nodes: &mut SlotMap<NodeKey, LayoutNode>,
    ctx: &mut LayoutContext,
    key: NodeKey,
    parent_max_width: f32,
    parent_direction: Option<Direction>,
) {
    let node = &mut nodes[key];
    let needs_relayout = node.state == LayoutState::Dirty
        || !approx_eq(
            node.layout.dimensions[Dim::Width],
            node.cache.requested_width,
        )
        || !approx_eq(
            node.layout.dimensions[Dim::Height],
            node.cache.requested_height,
        )
        || !approx_eq(parent_max_width, node.cache.parent_max_width);

    if !needs_relayout {
        trace!(?key, "layout_node: cache hit");
        node.layout = node.cache.result;
        return;
    }

    trace!(?key, "layout_node: recompute");
    node.cache.requested_width = node.layout.dimensions[Dim::Width];
    node.cache.requested_height = node.layout.dimensions[Dim::Height];
    node.cache.parent_max_width = parent_max_width;

    layout_node_impl(nodes, ctx, key, parent_max_width, parent_direction);

    let node = &mut nodes[key];
    node.cache.result = node.layout;
    node.state = LayoutState::HasNewLayout;
}

#[allow(clippy::too_many_lines, clippy::cast_precision_loss)]
fn layout_node_impl(
    nodes: &mut SlotMap<NodeKey, LayoutNode>,
    ctx: &mut LayoutContext,
    key: NodeKey,
    parent_max_width: f32,
    parent_direction: Option<Direction>,
) {
    let style = nodes[key].style;
    let children: Vec<NodeKey> = nodes[key].children.clone();
    let child_count = children.len();

    for &child in &children {
        nodes[child].layout.reset();
    }

    let direction = style.direction.resolve(parent_direction);
    let main_axis = style.flex_direction.resolve(direction);
    let cross_axis = main_axis.cross(direction);
    let resolved_row_axis = FlexDirection::Row.resolve(direction);

    set_dimension_from_style(&mut nodes[key], main_axis);
    set_dimension_from_style(&mut nodes[key], cross_axis);

    nodes[key].layout.direction = direction;

    // The position is set by the parent; complete it with the delta from the
    // margin and the relative offsets, which the parent's positioning passes
    // later absorb.
    for axis in [main_axis, cross_axis] {
        let relative = relative_position(&style, axis);
        let node = &mut nodes[key];
        node.layout.position[axis.leading_edge()] += leading_margin(&style, axis) + relative;
        node.layout.position[axis.trailing_edge()] += trailing_margin(&style, axis) + relative;
    }

    let padding_and_border_axis_resolved_row = padding_and_border_axis(&style, resolved_row_axis);

    if nodes[key].is_measure_defined() {
        let is_resolved_row_dim_defined = is_layout_dim_defined(&nodes[key], resolved_row_axis);

        let mut width = if is_style_dim_defined(&style, resolved_row_axis) {
            style.dimensions[Dim::Width]
        } else if is_resolved_row_dim_defined {
            nodes[key].layout.dimensions[resolved_row_axis.dimension()]
        } else {
            parent_max_width - margin_axis(&style, resolved_row_axis)
        };
        width -= padding_and_border_axis_resolved_row;

        // A dimension can already be known from the style or from the node
        // being flexible; only measure for the ones still missing.
        let is_row_undefined =
            !is_style_dim_defined(&style, resolved_row_axis) && !is_resolved_row_dim_defined;
        let is_column_undefined = !is_style_dim_defined(&style, FlexDirection::Column)
            && is_undefined(nodes[key].layout.dimensions[Dim::Height]);

        if is_row_undefined || is_column_undefined {
            ctx.measure_output = MeasureOutput::default();
            let node = &mut nodes[key];
            if let Some(measure) = node.measure.as_mut() {
                measure(width, &mut ctx.measure_output);
            }
            if is_row_undefined {
                nodes[key].layout.dimensions[Dim::Width] =
                    ctx.measure_output.width + padding_and_border_axis_resolved_row;
            }
            if is_column_undefined {
                nodes[key].layout.dimensions[Dim::Height] = ctx.measure_output.height
                    + padding_and_border_axis(&style, FlexDirection::Column);
            }
        }
        if child_count == 0 {
            return;
        }
    }

    let is_node_flex_wrap = style.flex_wrap == FlexWrap::Wrap;
    let justify_content = style.justify_content;

    let leading_padding_and_border_main = leading_padding_and_border(&style, main_axis);
    let leading_padding_and_border_cross = leading_padding_and_border(&style, cross_axis);
    let padding_and_border_axis_main = padding_and_border_axis(&style, main_axis);
    let padding_and_border_axis_cross = padding_and_border_axis(&style, cross_axis);

    let is_main_dim_defined = is_layout_dim_defined(&nodes[key], main_axis);
    let is_cross_dim_defined = is_layout_dim_defined(&nodes[key], cross_axis);
    let is_main_row_direction = main_axis.is_row();

    // The node's own dimensions do not change again until the intrinsic
    // sizing step, so snapshot them for the child loops.
    let node_dims = nodes[key].layout.dimensions;
    let node_main_dim = node_dims[main_axis.dimension()];
    let node_cross_dim = node_dims[cross_axis.dimension()];
    let node_row_dim = node_dims[resolved_row_axis.dimension()];

    let mut absolute_children: SmallVec<[NodeKey; 4]> = SmallVec::new();

    let mut defined_main_dim = UNDEFINED;
    if is_main_dim_defined {
        defined_main_dim = node_main_dim - padding_and_border_axis_main;
    }

    // Lines are processed one at a time; without wrapping there is exactly
    // one spanning all children.
    let mut start_line = 0usize;
    let mut end_line = 0usize;
    let mut already_computed_next_layout = false;
    let mut lines_cross_dim = 0.0f32;
    let mut lines_main_dim = 0.0f32;
    let mut lines_count = 0usize;

    while end_line < child_count {
        // <Loop A> Lay out non-flexible children, count children by type,
        // and stack the trivially positioned ones inline.

        // Accumulated size and margin of the non-flexible children; used to
        // size the node when it has no dimension, or to compute the space
        // left for the flexible ones.
        let mut main_content_dim = 0.0f32;

        let mut flexible_children_count = 0i32;
        let mut total_flexible = 0.0f32;
        let mut non_flexible_children_count = 0i32;

        // Children keep their simple stacking position from this loop for as
        // long as no absolute or flexible child shows up; the rest are
        // re-positioned by <Loop C> / <Loop D>.
        let mut is_simple_stack_main = (is_main_dim_defined
            && justify_content == JustifyContent::FlexStart)
            || (!is_main_dim_defined && justify_content != JustifyContent::Center);
        let mut first_complex_main = if is_simple_stack_main {
            child_count
        } else {
            start_line
        };

        let mut is_simple_stack_cross = true;
        let mut first_complex_cross = child_count;

        let mut flex_children: SmallVec<[NodeKey; 8]> = SmallVec::new();

        let mut main_dim = leading_padding_and_border_main;
        let mut cross_dim = 0.0f32;

        for i in start_line..child_count {
            let child_key = children[i];
            nodes[child_key].line_index = lines_count;
            let child_style = nodes[child_key].style;

            let align = align_item(&style, &child_style);

            // Pre-fill the cross dimension of stretched children before the
            // recursive layout pass.
            if align == Align::Stretch
                && child_style.position_type == PositionType::Relative
                && is_cross_dim_defined
                && !is_style_dim_defined(&child_style, cross_axis)
            {
                nodes[child_key].layout.dimensions[cross_axis.dimension()] = f32::max(
                    bound_axis(
                        &child_style,
                        cross_axis,
                        node_cross_dim
                            - padding_and_border_axis_cross
                            - margin_axis(&child_style, cross_axis),
                    ),
                    // A child never shrinks below its own padding and border.
                    padding_and_border_axis(&child_style, cross_axis),
                );
            } else if child_style.position_type == PositionType::Absolute {
                absolute_children.push(child_key);

                // Pre-fill the dimension on each axis where both offsets pin
                // the child against a known parent dimension.
                for axis in [FlexDirection::Column, FlexDirection::Row] {
                    let parent_dim = node_dims[axis.dimension()];
                    if is_defined(parent_dim)
                        && parent_dim >= 0.0
                        && !is_style_dim_defined(&child_style, axis)
                        && is_pos_defined(&child_style, axis.leading_edge())
                        && is_pos_defined(&child_style, axis.trailing_edge())
                    {
                        nodes[child_key].layout.dimensions[axis.dimension()] = f32::max(
                            bound_axis(
                                &child_style,
                                axis,
                                parent_dim
                                    - padding_and_border_axis(&style, axis)
                                    - margin_axis(&child_style, axis)
                                    - position_value(&child_style, axis.leading_edge())
                                    - position_value(&child_style, axis.trailing_edge()),
                            ),
                            padding_and_border_axis(&child_style, axis),
                        );
                    }
                }
            }

            let mut next_content_dim = 0.0f32;

            // A child only counts as flexible when the node has a computed
            // main dimension to distribute.
            if is_main_dim_defined && is_flex(&child_style) {
                flexible_children_count += 1;
                total_flexible += child_style.flex;
                flex_children.push(child_key);

                // The exact size is not known yet, but the padding, border
                // and margin are; this smallest-possible footprint feeds the
                // remaining-space computation.
                next_content_dim = padding_and_border_axis(&child_style, main_axis)
                    + margin_axis(&child_style, main_axis);
            } else {
                let mut max_width = UNDEFINED;
                if !is_main_row_direction {
                    max_width = if is_style_dim_defined(&style, resolved_row_axis) {
                        node_row_dim - padding_and_border_axis_resolved_row
                    } else {
                        parent_max_width
                            - margin_axis(&style, resolved_row_axis)
                            - padding_and_border_axis_resolved_row
                    };
                }

                // This is the main recursive call; non-flexible children get
                // their layout here.
                if !already_computed_next_layout {
                    layout_node(nodes, ctx, child_key, max_width, Some(direction));
                }

                // Absolutely positioned children do not take part in the
                // flow, so they contribute nothing to the content dimension.
                if child_style.position_type == PositionType::Relative {
                    non_flexible_children_count += 1;
                    next_content_dim = dim_with_margin(&nodes[child_key], main_axis);
                }
            }

            // The child we just sized would overflow the line. A lone child
            // is bigger than the line and keeps it to itself.
            if is_node_flex_wrap
                && is_main_dim_defined
                && main_content_dim + next_content_dim > defined_main_dim
                && i != start_line
            {
                non_flexible_children_count -= 1;
                already_computed_next_layout = true;
                break;
            }

            if is_simple_stack_main
                && (child_style.position_type != PositionType::Relative || is_flex(&child_style))
            {
                is_simple_stack_main = false;
                first_complex_main = i;
            }

            if is_simple_stack_cross
                && (child_style.position_type != PositionType::Relative
                    || (align != Align::Stretch && align != Align::FlexStart)
                    || (align == Align::Stretch && !is_cross_dim_defined))
            {
                is_simple_stack_cross = false;
                first_complex_cross = i;
            }

            if is_simple_stack_main {
                {
                    let child = &mut nodes[child_key];
                    child.layout.position[main_axis.leading_edge()] += main_dim;
                    if is_main_dim_defined {
                        child.layout.position[main_axis.trailing_edge()] = node_main_dim
                            - child.layout.dimensions[main_axis.dimension()]
                            - child.layout.position[main_axis.leading_edge()];
                    }
                }

                main_dim += dim_with_margin(&nodes[child_key], main_axis);
                cross_dim = f32::max(
                    cross_dim,
                    bound_axis(
                        &child_style,
                        cross_axis,
                        dim_with_margin(&nodes[child_key], cross_axis),
                    ),
                );
            }

            if is_simple_stack_cross {
                let child = &mut nodes[child_key];
                child.layout.position[cross_axis.leading_edge()] +=
                    lines_cross_dim + leading_padding_and_border_cross;
                if is_cross_dim_defined {
                    child.layout.position[cross_axis.trailing_edge()] = node_cross_dim
                        - child.layout.dimensions[cross_axis.dimension()]
                        - child.layout.position[cross_axis.leading_edge()];
                }
            }

            already_computed_next_layout = false;
            main_content_dim += next_content_dim;
            end_line = i + 1;
        }

        // <Loop B> Lay out flexible children and allocate the empty space.

        // Two controls position the children along the main axis: the space
        // before the first child and the space between each pair.
        let mut leading_main_dim = 0.0f32;
        let mut between_main_dim = 0.0f32;

        let mut remaining_main_dim = if is_main_dim_defined {
            defined_main_dim - main_content_dim
        } else {
            f32::max(main_content_dim, 0.0) - main_content_dim
        };

        if flexible_children_count != 0 {
            let mut flexible_main_dim = remaining_main_dim / total_flexible;

            // A child whose flex share misses its min/max bounds is fixed at
            // the bound and leaves the distribution.
            for &flex_key in &flex_children {
                let flex_style = nodes[flex_key].style;
                let base_main_dim = flexible_main_dim * flex_style.flex
                    + padding_and_border_axis(&flex_style, main_axis);
                let bound_main_dim = bound_axis(&flex_style, main_axis, base_main_dim);
                if base_main_dim != bound_main_dim {
                    remaining_main_dim -= bound_main_dim;
                    total_flexible -= flex_style.flex;
                }
            }
            flexible_main_dim = remaining_main_dim / total_flexible;

            // Non-flexible children can overflow the container; treat that
            // as no space available.
            if flexible_main_dim < 0.0 {
                flexible_main_dim = 0.0;
            }

            for &flex_key in &flex_children {
                let flex_style = nodes[flex_key].style;

                // The final main size of this child is now known.
                nodes[flex_key].layout.dimensions[main_axis.dimension()] = bound_axis(
                    &flex_style,
                    main_axis,
                    flexible_main_dim * flex_style.flex
                        + padding_and_border_axis(&flex_style, main_axis),
                );

                let mut max_width = UNDEFINED;
                if is_style_dim_defined(&style, resolved_row_axis) {
                    max_width = node_row_dim - padding_and_border_axis_resolved_row;
                } else if !is_main_row_direction {
                    max_width = parent_max_width
                        - margin_axis(&style, resolved_row_axis)
                        - padding_and_border_axis_resolved_row;
                }

                layout_node(nodes, ctx, flex_key, max_width, Some(direction));
            }
        } else if justify_content != JustifyContent::FlexStart {
            // No flexible children: justify-content decides how the
            // remaining space is allocated.
            match justify_content {
                JustifyContent::Center => leading_main_dim = remaining_main_dim / 2.0,
                JustifyContent::FlexEnd => leading_main_dim = remaining_main_dim,
                JustifyContent::SpaceBetween => {
                    remaining_main_dim = f32::max(remaining_main_dim, 0.0);
                    let divisor = flexible_children_count + non_flexible_children_count - 1;
                    between_main_dim = if divisor == 0 {
                        0.0
                    } else {
                        remaining_main_dim / divisor as f32
                    };
                }
                JustifyContent::SpaceAround => {
                    // The space on the edges is half the space between children.
                    between_main_dim = remaining_main_dim
                        / (flexible_children_count + non_flexible_children_count) as f32;
                    leading_main_dim = between_main_dim / 2.0;
                }
                JustifyContent::FlexStart => {}
            }
        }

        // <Loop C> Position children along the main axis. The accumulated
        // values double as the node's content dimensions.
        main_dim += leading_main_dim;

        for i in first_complex_main..end_line {
            let child_key = children[i];
            let child_style = nodes[child_key].style;

            if child_style.position_type == PositionType::Absolute
                && is_pos_defined(&child_style, main_axis.leading_edge())
            {
                // An absolute child with an explicit leading offset is
                // positioned from the parent's border box, overriding the
                // accumulated offset.
                nodes[child_key].layout.position[main_axis.leading_edge()] =
                    position_value(&child_style, main_axis.leading_edge())
                        + leading_border(&style, main_axis)
                        + leading_margin(&child_style, main_axis);
            } else {
                // Relative children, and absolute ones without an offset,
                // sit at the current accumulated position.
                {
                    let child = &mut nodes[child_key];
                    child.layout.position[main_axis.leading_edge()] += main_dim;
                    if is_main_dim_defined {
                        child.layout.position[main_axis.trailing_edge()] = node_main_dim
                            - child.layout.dimensions[main_axis.dimension()]
                            - child.layout.position[main_axis.leading_edge()];
                    }
                }

                // Only relative children advance the flow.
                if child_style.position_type == PositionType::Relative {
                    main_dim += between_main_dim + dim_with_margin(&nodes[child_key], main_axis);
                    cross_dim = f32::max(
                        cross_dim,
                        bound_axis(
                            &child_style,
                            cross_axis,
                            dim_with_margin(&nodes[child_key], cross_axis),
                        ),
                    );
                }
            }
        }

        let mut container_cross_axis = node_cross_dim;
        if !is_cross_dim_defined {
            container_cross_axis = f32::max(
                // Both sides are added at the end because the aggregate runs
                // through a max; intermediate negative values would skew it.
                bound_axis(
                    &style,
                    cross_axis,
                    cross_dim + padding_and_border_axis_cross,
                ),
                padding_and_border_axis_cross,
            );
        }

        // <Loop D> Position children along the cross axis.
        for i in first_complex_cross..end_line {
            let child_key = children[i];
            let child_style = nodes[child_key].style;

            if child_style.position_type == PositionType::Absolute
                && is_pos_defined(&child_style, cross_axis.leading_edge())
            {
                nodes[child_key].layout.position[cross_axis.leading_edge()] =
                    position_value(&child_style, cross_axis.leading_edge())
                        + leading_border(&style, cross_axis)
                        + leading_margin(&child_style, cross_axis);
            } else {
                let mut leading_cross_dim = leading_padding_and_border_cross;

                // Relative children align by the parent's align-items or
                // their own align-self.
                if child_style.position_type == PositionType::Relative {
                    let align = align_item(&style, &child_style);
                    if align == Align::Stretch {
                        // Stretching only applies when the dimension was not
                        // set beforehand.
                        if !is_style_dim_defined(&child_style, cross_axis) {
                            nodes[child_key].layout.dimensions[cross_axis.dimension()] = f32::max(
                                bound_axis(
                                    &child_style,
                                    cross_axis,
                                    container_cross_axis
                                        - padding_and_border_axis_cross
                                        - margin_axis(&child_style, cross_axis),
                                ),
                                padding_and_border_axis(&child_style, cross_axis),
                            );
                        }
                    } else if align != Align::FlexStart {
                        // Space left between the container's inner box and
                        // the child's outer box.
                        let remaining_cross_dim = container_cross_axis
                            - padding_and_border_axis_cross
                            - dim_with_margin(&nodes[child_key], cross_axis);

                        if align == Align::Center {
                            leading_cross_dim += remaining_cross_dim / 2.0;
                        } else {
                            leading_cross_dim += remaining_cross_dim;
                        }
                    }
                }

                let child = &mut nodes[child_key];
                child.layout.position[cross_axis.leading_edge()] +=
                    lines_cross_dim + leading_cross_dim;

                if is_cross_dim_defined {
                    child.layout.position[cross_axis.trailing_edge()] = node_cross_dim
                        - child.layout.dimensions[cross_axis.dimension()]
                        - child.layout.position[cross_axis.leading_edge()];
                }
            }
        }

        lines_cross_dim += cross_dim;
        lines_main_dim = f32::max(lines_main_dim, main_dim);
        lines_count += 1;
        start_line = end_line;
    }

    // <Loop E> Multi-line containers distribute their lines along the cross
    // axis according to align-content.
    if lines_count > 1 && is_cross_dim_defined {
        let node_cross_axis_inner_size = node_cross_dim - padding_and_border_axis_cross;
        let remaining_align_content_dim = node_cross_axis_inner_size - lines_cross_dim;

        let mut cross_dim_lead = 0.0f32;
        let mut current_lead = leading_padding_and_border_cross;

        match style.align_content {
            Align::FlexEnd => current_lead += remaining_align_content_dim,
            Align::Center => current_lead += remaining_align_content_dim / 2.0,
            Align::Stretch => {
                if node_cross_axis_inner_size > lines_cross_dim {
                    cross_dim_lead = remaining_align_content_dim / lines_count as f32;
                }
            }
            Align::FlexStart | Align::Auto => {}
        }

        let mut end_index = 0usize;
        for line in 0..lines_count {
            let start_index = end_index;

            // Find this line's extent and height.
            let mut line_height = 0.0f32;
            let mut ii = start_index;
            while ii < child_count {
                let child_key = children[ii];
                if nodes[child_key].style.position_type != PositionType::Relative {
                    ii += 1;
                    continue;
                }
                if nodes[child_key].line_index != line {
                    break;
                }
                if is_layout_dim_defined(&nodes[child_key], cross_axis) {
                    let child_style = nodes[child_key].style;
                    line_height = f32::max(
                        line_height,
                        nodes[child_key].layout.dimensions[cross_axis.dimension()]
                            + margin_axis(&child_style, cross_axis),
                    );
                }
                ii += 1;
            }
            end_index = ii;
            line_height += cross_dim_lead;

            for ii in start_index..end_index {
                let child_key = children[ii];
                let child_style = nodes[child_key].style;
                if child_style.position_type != PositionType::Relative {
                    continue;
                }

                match align_item(&style, &child_style) {
                    Align::FlexStart => {
                        nodes[child_key].layout.position[cross_axis.leading_edge()] =
                            current_lead + leading_margin(&child_style, cross_axis);
                    }
                    Align::FlexEnd => {
                        nodes[child_key].layout.position[cross_axis.leading_edge()] = current_lead
                            + line_height
                            - trailing_margin(&child_style, cross_axis)
                            - nodes[child_key].layout.dimensions[cross_axis.dimension()];
                    }
                    Align::Center => {
                        let child_cross =
                            nodes[child_key].layout.dimensions[cross_axis.dimension()];
                        nodes[child_key].layout.position[cross_axis.leading_edge()] =
                            current_lead + (line_height - child_cross) / 2.0;
                    }
                    Align::Stretch => {
                        nodes[child_key].layout.position[cross_axis.leading_edge()] =
                            current_lead + leading_margin(&child_style, cross_axis);
                        // TODO: size stretch-aligned children that still have
                        // an auto cross dimension.
                    }
                    Align::Auto => {}
                }
            }

            current_lead += line_height;
        }
    }

    let mut needs_main_trailing_pos = false;
    let mut needs_cross_trailing_pos = false;

    // When neither the style nor the parent supplied a dimension, take it
    // from the children.
    if !is_main_dim_defined {
        nodes[key].layout.dimensions[main_axis.dimension()] = f32::max(
            // The accumulated main dimension is still missing the trailing
            // padding and border.
            bound_axis(
                &style,
                main_axis,
                lines_main_dim + trailing_padding_and_border(&style, main_axis),
            ),
            padding_and_border_axis_main,
        );

        if main_axis.is_reverse() {
            needs_main_trailing_pos = true;
        }
    }

    if !is_cross_dim_defined {
        nodes[key].layout.dimensions[cross_axis.dimension()] = f32::max(
            bound_axis(
                &style,
                cross_axis,
                lines_cross_dim + padding_and_border_axis_cross,
            ),
            padding_and_border_axis_cross,
        );

        if cross_axis.is_reverse() {
            needs_cross_trailing_pos = true;
        }
    }

    // <Loop F> Reverse axes measure from the trailing edge, so their
    // children's trailing positions can only be filled in now.
    if needs_main_trailing_pos || needs_cross_trailing_pos {
        let final_main_dim = nodes[key].layout.dimensions[main_axis.dimension()];
        let final_cross_dim = nodes[key].layout.dimensions[cross_axis.dimension()];

        for &child_key in &children {
            if needs_main_trailing_pos {
                let child = &mut nodes[child_key];
                child.layout.position[main_axis.trailing_edge()] = final_main_dim
                    - child.layout.dimensions[main_axis.dimension()]
                    - child.layout.position[main_axis.leading_edge()];
            }
            if needs_cross_trailing_pos {
                let child = &mut nodes[child_key];
                child.layout.position[cross_axis.trailing_edge()] = final_cross_dim
                    - child.layout.dimensions[cross_axis.dimension()]
                    - child.layout.position[cross_axis.leading_edge()];
            }
        }
    }

    // <Loop G> Size and place absolutely positioned children against the
    // node's final dimensions.
    let final_dims = nodes[key].layout.dimensions;
    for &abs_key in &absolute_children {
        let child_style = nodes[abs_key].style;

        for axis in [FlexDirection::Column, FlexDirection::Row] {
            let parent_dim = final_dims[axis.dimension()];

            if is_defined(parent_dim)
                && parent_dim >= 0.0
                && !is_style_dim_defined(&child_style, axis)
                && is_pos_defined(&child_style, axis.leading_edge())
                && is_pos_defined(&child_style, axis.trailing_edge())
            {
                nodes[abs_key].layout.dimensions[axis.dimension()] = f32::max(
                    bound_axis(
                        &child_style,
                        axis,
                        parent_dim
                            - border_axis(&style, axis)
                            - margin_axis(&child_style, axis)
                            - position_value(&child_style, axis.leading_edge())
                            - position_value(&child_style, axis.trailing_edge()),
                    ),
                    padding_and_border_axis(&child_style, axis),
                );
            }

            // Only a trailing offset: derive the leading position from it.
            if is_pos_defined(&child_style, axis.trailing_edge())
                && !is_pos_defined(&child_style, axis.leading_edge())
            {
                let child = &mut nodes[abs_key];
                child.layout.position[axis.leading_edge()] = parent_dim
                    - child.layout.dimensions[axis.dimension()]
                    - position_value(&child_style, axis.trailing_edge());
            }
        }
    }
}

fn leading_margin(style: &Style, axis: FlexDirection) -> f32 {
    style
        .margin
        .get_with_fallback(axis.leading_spacing(), axis.leading_edge())
}

fn trailing_margin(style: &Style, axis: FlexDirection) -> f32 {
    style
        .margin
        .get_with_fallback(axis.trailing_spacing(), axis.trailing_edge())
}

fn leading_padding(style: &Style, axis: FlexDirection) -> f32 {
    style
        .padding
        .get_with_fallback(axis.leading_spacing(), axis.leading_edge())
}

fn trailing_padding(style: &Style, axis: FlexDirection) -> f32 {
    style
        .padding
        .get_with_fallback(axis.trailing_spacing(), axis.trailing_edge())
}

fn leading_border(style: &Style, axis: FlexDirection) -> f32 {
    style
        .border
        .get_with_fallback(axis.leading_spacing(), axis.leading_edge())
}

fn trailing_border(style: &Style, axis: FlexDirection) -> f32 {
    style
        .border
        .get_with_fallback(axis.trailing_spacing(), axis.trailing_edge())
}

fn margin_axis(style: &Style, axis: FlexDirection) -> f32 {
    leading_margin(style, axis) + trailing_margin(style, axis)
}

fn border_axis(style: &Style, axis: FlexDirection) -> f32 {
    leading_border(style, axis) + trailing_border(style, axis)
}

fn leading_padding_and_border(style: &Style, axis: FlexDirection) -> f32 {
    leading_padding(style, axis) + leading_border(style, axis)
}

fn trailing_padding_and_border(style: &Style, axis: FlexDirection) -> f32 {
    trailing_padding(style, axis) + trailing_border(style, axis)
}

fn padding_and_border_axis(style: &Style, axis: FlexDirection) -> f32 {
    leading_padding_and_border(style, axis) + trailing_padding_and_border(style, axis)
}

fn is_pos_defined(style: &Style, edge: Edge) -> bool {
    is_defined(style.position[edge])
}

fn position_value(style: &Style, edge: Edge) -> f32 {
    let value = style.position[edge];
    if is_defined(value) {
        value
    } else {
        0.0
    }
}

/// The delta a relative position contributes on an axis: the leading offset
/// when set, otherwise the negated trailing offset.
fn relative_position(style: &Style, axis: FlexDirection) -> f32 {
    let leading = style.position[axis.leading_edge()];
    if is_defined(leading) {
        leading
    } else {
        -position_value(style, axis.trailing_edge())
    }
}

fn is_style_dim_defined(style: &Style, axis: FlexDirection) -> bool {
    let value = style.dimensions[axis.dimension()];
    is_defined(value) && value >= 0.0
}

fn is_layout_dim_defined(node: &LayoutNode, axis: FlexDirection) -> bool {
    let value = node.layout.dimensions[axis.dimension()];
    is_defined(value) && value >= 0.0
}

/// Fills a layout dimension from the style, unless the parent already
/// pre-sized the node on that axis.
fn set_dimension_from_style(node: &mut LayoutNode, axis: FlexDirection) {
    if is_layout_dim_defined(node, axis) || !is_style_dim_defined(&node.style, axis) {
        return;
    }
    let style = node.style;
    node.layout.dimensions[axis.dimension()] = f32::max(
        bound_axis(&style, axis, style.dimensions[axis.dimension()]),
        // The padding and border are a floor for the dimension.
        padding_and_border_axis(&style, axis),
    );
}

/// Clamps a value into the node's min/max bounds on an axis. The max clamp
/// is applied first, so a min above the max wins on conflict.
fn bound_axis(style: &Style, axis: FlexDirection, value: f32) -> f32 {
    let dim = axis.dimension();
    let min = style.min_dimensions[dim];
    let max = style.max_dimensions[dim];

    let mut bound = value;
    if is_defined(max) && max >= 0.0 && bound > max {
        bound = max;
    }
    if is_defined(min) && min >= 0.0 && bound < min {
        bound = min;
    }
    bound
}

fn dim_with_margin(node: &LayoutNode, axis: FlexDirection) -> f32 {
    node.layout.dimensions[axis.dimension()]
        + leading_margin(&node.style, axis)
        + trailing_margin(&node.style, axis)
}

fn is_flex(style: &Style) -> bool {
    style.position_type == PositionType::Relative && style.flex > 0.0
}

/// The effective cross alignment for a child: its own `align_self` unless
/// that is `Auto`, then the parent's `align_items`.
fn align_item(parent: &Style, child: &Style) -> Align {
    if child.align_self == Align::Auto {
        parent.align_items
    } else {
        child.align_self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::style::SpacingSlot;
    use crate::tree::LayoutTree;

    fn rect(tree: &LayoutTree, key: NodeKey) -> (f32, f32, f32, f32) {
        let layout = tree.layout(key).unwrap();
        (layout.x(), layout.y(), layout.width(), layout.height())
    }

    #[test]
    fn test_two_equal_flex_children_split_the_row() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .flex_direction(FlexDirection::Row)
                .width(200.0)
                .height(50.0)
                .build(),
        );
        let a = tree.create_node(Style::builder().flex(1.0).build());
        let b = tree.create_node(Style::builder().flex(1.0).build());
        tree.add_child(root, a).unwrap();
        tree.add_child(root, b).unwrap();

        tree.calculate_layout(root).unwrap();

        assert_eq!(rect(&tree, a), (0.0, 0.0, 100.0, 50.0));
        assert_eq!(rect(&tree, b), (100.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn test_flex_child_fills_padded_parent() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .width(100.0)
                .height(100.0)
                .padding_all(10.0)
                .build(),
        );
        let child = tree.create_node(Style::builder().flex(1.0).build());
        tree.add_child(root, child).unwrap();

        tree.calculate_layout(root).unwrap();

        assert_eq!(rect(&tree, child), (10.0, 10.0, 80.0, 80.0));
    }

    #[test]
    fn test_justify_space_between() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .flex_direction(FlexDirection::Row)
                .justify_content(JustifyContent::SpaceBetween)
                .width(300.0)
                .height(50.0)
                .build(),
        );
        let mut children = Vec::new();
        for _ in 0..3 {
            let child = tree.create_node(Style::builder().width(50.0).build());
            tree.add_child(root, child).unwrap();
            children.push(child);
        }

        tree.calculate_layout(root).unwrap();

        assert_eq!(tree.layout(children[0]).unwrap().x(), 0.0);
        assert_eq!(tree.layout(children[1]).unwrap().x(), 125.0);
        assert_eq!(tree.layout(children[2]).unwrap().x(), 250.0);
    }

    #[test]
    fn test_justify_space_between_single_child_stays_leading() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .flex_direction(FlexDirection::Row)
                .justify_content(JustifyContent::SpaceBetween)
                .width(100.0)
                .height(50.0)
                .build(),
        );
        let child = tree.create_node(Style::builder().width(40.0).build());
        tree.add_child(root, child).unwrap();

        tree.calculate_layout(root).unwrap();

        assert_eq!(tree.layout(child).unwrap().x(), 0.0);
    }

    #[test]
    fn test_justify_space_around_single_child_is_centered() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .flex_direction(FlexDirection::Row)
                .justify_content(JustifyContent::SpaceAround)
                .width(100.0)
                .height(50.0)
                .build(),
        );
        let child = tree.create_node(Style::builder().width(40.0).build());
        tree.add_child(root, child).unwrap();

        tree.calculate_layout(root).unwrap();

        assert_eq!(tree.layout(child).unwrap().x(), 30.0);
    }

    #[test]
    fn test_justify_center_and_align_center() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .flex_direction(FlexDirection::Row)
                .justify_content(JustifyContent::Center)
                .align_items(Align::Center)
                .width(100.0)
                .height(100.0)
                .build(),
        );
        let child = tree.create_node(Style::builder().width(40.0).height(20.0).build());
        tree.add_child(root, child).unwrap();

        tree.calculate_layout(root).unwrap();

        assert_eq!(rect(&tree, child), (30.0, 40.0, 40.0, 20.0));
    }

    #[test]
    fn test_wrap_breaks_into_two_lines() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .flex_direction(FlexDirection::Row)
                .flex_wrap(FlexWrap::Wrap)
                .width(130.0)
                .height(200.0)
                .build(),
        );
        let mut children = Vec::new();
        for _ in 0..4 {
            let child = tree.create_node(Style::builder().width(60.0).height(20.0).build());
            tree.add_child(root, child).unwrap();
            children.push(child);
        }

        tree.calculate_layout(root).unwrap();

        let xs: Vec<f32> = children.iter().map(|&c| tree.layout(c).unwrap().x()).collect();
        let ys: Vec<f32> = children.iter().map(|&c| tree.layout(c).unwrap().y()).collect();
        assert_eq!(xs, vec![0.0, 60.0, 0.0, 60.0]);
        assert_eq!(ys, vec![0.0, 0.0, 20.0, 20.0]);
    }

    #[test]
    fn test_wrap_never_breaks_first_child_of_a_line() {
        // Children wider than the container each keep a line to themselves.
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .flex_direction(FlexDirection::Row)
                .flex_wrap(FlexWrap::Wrap)
                .width(100.0)
                .height(200.0)
                .build(),
        );
        let mut children = Vec::new();
        for _ in 0..4 {
            let child = tree.create_node(Style::builder().width(60.0).height(20.0).build());
            tree.add_child(root, child).unwrap();
            children.push(child);
        }

        tree.calculate_layout(root).unwrap();

        let ys: Vec<f32> = children.iter().map(|&c| tree.layout(c).unwrap().y()).collect();
        assert_eq!(ys, vec![0.0, 20.0, 40.0, 60.0]);
        for &child in &children {
            assert_eq!(tree.layout(child).unwrap().x(), 0.0);
        }
    }

    #[test]
    fn test_absolute_child_sized_by_offsets() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(Style::builder().width(200.0).height(200.0).build());
        let child = tree.create_node(
            Style::builder()
                .position_type(PositionType::Absolute)
                .left(10.0)
                .right(20.0)
                .build(),
        );
        tree.add_child(root, child).unwrap();

        tree.calculate_layout(root).unwrap();

        let layout = tree.layout(child).unwrap();
        assert_eq!(layout.x(), 10.0);
        assert_eq!(layout.width(), 170.0);
    }

    #[test]
    fn test_absolute_child_offsets_against_border_box() {
        // The final absolute pass subtracts the parent's border (not its
        // padding) and positions from inside the border edge.
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .width(200.0)
                .height(200.0)
                .padding_all(7.0)
                .border_all(5.0)
                .build(),
        );
        let child = tree.create_node(
            Style::builder()
                .position_type(PositionType::Absolute)
                .left(10.0)
                .right(20.0)
                .build(),
        );
        tree.add_child(root, child).unwrap();

        tree.calculate_layout(root).unwrap();

        let layout = tree.layout(child).unwrap();
        assert_eq!(layout.x(), 15.0);
        assert_eq!(layout.width(), 160.0);
    }

    #[test]
    fn test_absolute_child_with_only_trailing_offset() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(Style::builder().width(200.0).height(100.0).build());
        let child = tree.create_node(
            Style::builder()
                .position_type(PositionType::Absolute)
                .width(50.0)
                .height(30.0)
                .right(10.0)
                .bottom(5.0)
                .build(),
        );
        tree.add_child(root, child).unwrap();

        tree.calculate_layout(root).unwrap();

        let layout = tree.layout(child).unwrap();
        assert_eq!(layout.x(), 140.0);
        assert_eq!(layout.y(), 65.0);
    }

    #[test]
    fn test_rtl_row_mirrors_children() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .direction(Direction::Rtl)
                .flex_direction(FlexDirection::Row)
                .width(200.0)
                .height(50.0)
                .build(),
        );
        let first = tree.create_node(Style::builder().width(50.0).build());
        let second = tree.create_node(Style::builder().width(50.0).build());
        tree.add_child(root, first).unwrap();
        tree.add_child(root, second).unwrap();

        tree.calculate_layout(root).unwrap();

        assert_eq!(tree.layout(first).unwrap().x(), 150.0);
        assert_eq!(tree.layout(second).unwrap().x(), 100.0);
        assert_eq!(tree.layout(root).unwrap().direction, Direction::Rtl);
    }

    #[test]
    fn test_rtl_mirrors_ltr_positions() {
        let widths = [50.0, 30.0];
        let mut positions = Vec::new();
        for direction in [Direction::Ltr, Direction::Rtl] {
            let mut tree = LayoutTree::new();
            let root = tree.create_node(
                Style::builder()
                    .direction(direction)
                    .flex_direction(FlexDirection::Row)
                    .width(200.0)
                    .height(50.0)
                    .build(),
            );
            let mut children = Vec::new();
            for width in widths {
                let child = tree.create_node(Style::builder().width(width).build());
                tree.add_child(root, child).unwrap();
                children.push(child);
            }
            tree.calculate_layout(root).unwrap();
            positions.push(
                children
                    .iter()
                    .map(|&c| tree.layout(c).unwrap().x())
                    .collect::<Vec<f32>>(),
            );
        }

        for (i, width) in widths.iter().enumerate() {
            assert_eq!(positions[1][i], 200.0 - positions[0][i] - width);
        }
    }

    #[test]
    fn test_margin_start_follows_rtl() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .direction(Direction::Rtl)
                .flex_direction(FlexDirection::Row)
                .width(200.0)
                .height(50.0)
                .build(),
        );
        let child = tree.create_node(
            Style::builder()
                .width(50.0)
                .margin(SpacingSlot::Start, 10.0)
                .build(),
        );
        tree.add_child(root, child).unwrap();

        tree.calculate_layout(root).unwrap();

        // The logical start is the right edge under RTL.
        assert_eq!(tree.layout(child).unwrap().x(), 140.0);
    }

    #[test]
    fn test_column_reverse_stacks_from_bottom() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .flex_direction(FlexDirection::ColumnReverse)
                .width(100.0)
                .height(100.0)
                .build(),
        );
        let first = tree.create_node(Style::builder().height(20.0).build());
        let second = tree.create_node(Style::builder().height(30.0).build());
        tree.add_child(root, first).unwrap();
        tree.add_child(root, second).unwrap();

        tree.calculate_layout(root).unwrap();

        assert_eq!(tree.layout(first).unwrap().y(), 80.0);
        assert_eq!(tree.layout(second).unwrap().y(), 50.0);
    }

    #[test]
    fn test_stretch_preserves_styled_cross_dimension() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .flex_direction(FlexDirection::Row)
                .width(100.0)
                .height(100.0)
                .build(),
        );
        let child = tree.create_node(Style::builder().width(30.0).height(40.0).build());
        tree.add_child(root, child).unwrap();

        tree.calculate_layout(root).unwrap();

        assert_eq!(tree.layout(child).unwrap().height(), 40.0);
    }

    #[test]
    fn test_min_max_clamp_redistributes_flex_space() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .flex_direction(FlexDirection::Row)
                .width(200.0)
                .height(50.0)
                .build(),
        );
        let clamped = tree.create_node(Style::builder().flex(1.0).max_width(50.0).build());
        let flexible = tree.create_node(Style::builder().flex(1.0).build());
        tree.add_child(root, clamped).unwrap();
        tree.add_child(root, flexible).unwrap();

        tree.calculate_layout(root).unwrap();

        assert_eq!(rect(&tree, clamped), (0.0, 0.0, 50.0, 50.0));
        assert_eq!(rect(&tree, flexible), (50.0, 0.0, 150.0, 50.0));
    }

    #[test]
    fn test_unstyled_node_sizes_to_padding_and_border() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder().padding_all(4.0).border_all(1.0).build(),
        );

        tree.calculate_layout(root).unwrap();

        let layout = tree.layout(root).unwrap();
        assert_eq!(layout.width(), 10.0);
        assert_eq!(layout.height(), 10.0);
    }

    #[test]
    fn test_styled_dimension_never_drops_below_padding_and_border() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .width(4.0)
                .height(4.0)
                .padding_all(5.0)
                .build(),
        );

        tree.calculate_layout(root).unwrap();

        let layout = tree.layout(root).unwrap();
        assert_eq!(layout.width(), 10.0);
        assert_eq!(layout.height(), 10.0);
    }

    #[test]
    fn test_resolved_edges_sum_to_parent_dimension() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .flex_direction(FlexDirection::Row)
                .width(200.0)
                .height(100.0)
                .build(),
        );
        let child = tree.create_node(Style::builder().width(50.0).height(30.0).build());
        tree.add_child(root, child).unwrap();

        tree.calculate_layout(root).unwrap();

        let layout = *tree.layout(child).unwrap();
        assert_eq!(
            layout.position[Edge::Left] + layout.width() + layout.position[Edge::Right],
            200.0
        );
        assert_eq!(
            layout.position[Edge::Top] + layout.height() + layout.position[Edge::Bottom],
            100.0
        );
    }

    #[test]
    fn test_second_calculate_is_a_pure_cache_hit() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .flex_direction(FlexDirection::Row)
                .width(200.0)
                .height(50.0)
                .build(),
        );
        let a = tree.create_node(Style::builder().flex(1.0).build());
        let b = tree.create_node(Style::builder().flex(1.0).build());
        tree.add_child(root, a).unwrap();
        tree.add_child(root, b).unwrap();

        tree.calculate_layout(root).unwrap();
        let first: Vec<_> = [root, a, b]
            .iter()
            .map(|&k| *tree.layout(k).unwrap())
            .collect();
        for key in [root, a, b] {
            tree.mark_layout_seen(key).unwrap();
        }

        tree.calculate_layout(root).unwrap();

        for (i, key) in [root, a, b].into_iter().enumerate() {
            assert!(!tree.has_new_layout(key));
            assert!(!tree.is_dirty(key));
            assert_eq!(*tree.layout(key).unwrap(), first[i]);
        }
    }

    #[test]
    fn test_measure_function_sizes_leaf_height() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(Style::builder().width(100.0).build());
        let text = tree.create_default_node();
        tree.set_measure_func(
            text,
            Some(Box::new(|width, output| {
                // Fixed amount of content re-flowed into the given width.
                output.width = width;
                output.height = 1000.0 / width;
            })),
        )
        .unwrap();
        tree.add_child(root, text).unwrap();

        tree.calculate_layout(root).unwrap();

        let layout = tree.layout(text).unwrap();
        assert_eq!(layout.width(), 100.0);
        assert_eq!(layout.height(), 10.0);
        assert_eq!(tree.layout(root).unwrap().height(), 10.0);
    }

    #[test]
    fn test_measure_unconstrained_uses_intrinsic_size() {
        let mut tree = LayoutTree::new();
        let root = tree.create_default_node();
        let leaf = tree.create_default_node();
        tree.set_measure_func(
            leaf,
            Some(Box::new(|width, output| {
                output.width = if width.is_nan() { 43.0 } else { width };
                output.height = 13.0;
            })),
        )
        .unwrap();
        tree.add_child(root, leaf).unwrap();

        tree.calculate_layout(root).unwrap();

        assert_eq!(rect(&tree, leaf), (0.0, 0.0, 43.0, 13.0));
        assert_eq!(rect(&tree, root), (0.0, 0.0, 43.0, 13.0));
    }

    #[test]
    fn test_align_content_center_positions_lines() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .flex_direction(FlexDirection::Row)
                .flex_wrap(FlexWrap::Wrap)
                .align_content(Align::Center)
                .width(100.0)
                .height(90.0)
                .build(),
        );
        let mut children = Vec::new();
        for _ in 0..4 {
            let child = tree.create_node(Style::builder().width(40.0).height(20.0).build());
            tree.add_child(root, child).unwrap();
            children.push(child);
        }

        tree.calculate_layout(root).unwrap();

        let xs: Vec<f32> = children.iter().map(|&c| tree.layout(c).unwrap().x()).collect();
        let ys: Vec<f32> = children.iter().map(|&c| tree.layout(c).unwrap().y()).collect();
        assert_eq!(xs, vec![0.0, 40.0, 0.0, 40.0]);
        assert_eq!(ys, vec![25.0, 25.0, 45.0, 45.0]);
    }

    #[test]
    fn test_align_self_overrides_align_items() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .flex_direction(FlexDirection::Row)
                .align_items(Align::FlexStart)
                .width(100.0)
                .height(100.0)
                .build(),
        );
        let child = tree.create_node(
            Style::builder()
                .width(40.0)
                .height(20.0)
                .align_self(Align::FlexEnd)
                .build(),
        );
        tree.add_child(root, child).unwrap();

        tree.calculate_layout(root).unwrap();

        assert_eq!(tree.layout(child).unwrap().y(), 80.0);
    }

    #[test]
    fn test_direction_inherits_into_children() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .direction(Direction::Rtl)
                .width(100.0)
                .height(100.0)
                .build(),
        );
        let child = tree.create_node(Style::builder().height(10.0).build());
        tree.add_child(root, child).unwrap();

        tree.calculate_layout(root).unwrap();

        assert_eq!(tree.layout(child).unwrap().direction, Direction::Rtl);
    }

    #[test]
    fn test_relative_offset_shifts_child() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(Style::builder().width(100.0).height(100.0).build());
        let child = tree.create_node(
            Style::builder().width(10.0).height(10.0).left(5.0).top(7.0).build(),
        );
        tree.add_child(root, child).unwrap();

        tree.calculate_layout(root).unwrap();

        assert_eq!(tree.layout(child).unwrap().x(), 5.0);
        assert_eq!(tree.layout(child).unwrap().y(), 7.0);
    }

    #[test]
    fn test_bound_axis_is_idempotent() {
        let style = Style::builder().min_width(10.0).max_width(50.0).build();
        for value in [-5.0, 0.0, 10.0, 30.0, 50.0, 80.0] {
            let once = bound_axis(&style, FlexDirection::Row, value);
            assert_eq!(bound_axis(&style, FlexDirection::Row, once), once);
        }
    }

    #[test]
    fn test_bound_axis_max_applied_first() {
        // A min above the max wins because the max clamp runs first.
        let style = Style::builder().min_width(60.0).max_width(50.0).build();
        assert_eq!(bound_axis(&style, FlexDirection::Row, 100.0), 60.0);
    }

    #[test]
    fn test_all_dimensions_finite_after_layout() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(
            Style::builder()
                .flex_direction(FlexDirection::Row)
                .width(120.0)
                .height(80.0)
                .padding_all(3.0)
                .build(),
        );
        let flexed = tree.create_node(Style::builder().flex(1.0).build());
        let fixed = tree.create_node(Style::builder().width(20.0).build());
        let absolute = tree.create_node(
            Style::builder()
                .position_type(PositionType::Absolute)
                .left(2.0)
                .top(2.0)
                .build(),
        );
        let nested = tree.create_node(Style::builder().height(10.0).build());
        tree.add_child(root, flexed).unwrap();
        tree.add_child(root, fixed).unwrap();
        tree.add_child(root, absolute).unwrap();
        tree.add_child(fixed, nested).unwrap();

        tree.calculate_layout(root).unwrap();

        for (key, _) in tree.iter() {
            let layout = tree.layout(key).unwrap();
            assert!(layout.width().is_finite(), "width of {key:?}");
            assert!(layout.height().is_finite(), "height of {key:?}");
            assert!(layout.width() >= 0.0);
            assert!(layout.height() >= 0.0);
        }
    }
}
