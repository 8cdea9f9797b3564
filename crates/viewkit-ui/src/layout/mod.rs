//! Measurement and placement of display trees.
//!
//! Layout runs in two steps, as in most retained UI toolkits: `measure`
//! walks the tree top-down with [`Constraints`] and returns sizes plus child
//! offsets, then `place` turns the offsets into absolute rects and numbers
//! each box in pre-order.

use viewkit_graphics::{Color, Font, Point, Rect, Shape, Size};
use viewkit_layout::{
    Alignment, Arrangement, Axis, Constraints, HorizontalAlignment, LinearArrangement,
    VerticalAlignment,
};

use crate::modifier::StyleOp;
use crate::node::{Action, DisplayNode};
use crate::widgets::{GridSpec, DEFAULT_STACK_SPACING};

/// Pre-order index of a box within one layout pass.
pub type NodeId = usize;

/// Extent of a shape on an axis with no upper bound.
pub const DEFAULT_SHAPE_EXTENT: f32 = 10.0;

/// What a laid-out box shows.
#[derive(Clone, Debug, PartialEq)]
pub enum BoxContent {
    Empty,
    Text { value: String, font: Font },
    Button { label: String, font: Font, action: Action },
    Image { name: String },
    Shape { shape: Shape, fill: Option<Color> },
    Spacer,
    Stack(Axis),
    Grid { rows: usize, columns: usize },
    /// Implicit vertical stack around a group or several root views.
    Group,
    Style(StyleOp),
}

/// Layout information for a single node.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutBox {
    pub node_id: NodeId,
    pub rect: Rect,
    pub content: BoxContent,
    pub children: Vec<LayoutBox>,
}

impl LayoutBox {
    pub fn new(node_id: NodeId, rect: Rect, content: BoxContent, children: Vec<LayoutBox>) -> Self {
        Self {
            node_id,
            rect,
            content,
            children,
        }
    }

    /// This box and all descendants in pre-order.
    pub fn descendants(&self) -> Vec<&LayoutBox> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a LayoutBox>) {
        out.push(self);
        for child in &self.children {
            child.collect(out);
        }
    }

    pub fn find(&self, predicate: impl Fn(&LayoutBox) -> bool) -> Option<&LayoutBox> {
        self.descendants().into_iter().find(|candidate| predicate(*candidate))
    }

    /// First text or button box showing `value`.
    pub fn find_text(&self, value: &str) -> Option<&LayoutBox> {
        self.find(|candidate| match &candidate.content {
            BoxContent::Text { value: text, .. } => text == value,
            BoxContent::Button { label, .. } => label == value,
            _ => false,
        })
    }

    /// Walks single-child style boxes down to the content they wrap.
    pub fn unwrap_styles(&self) -> &LayoutBox {
        let mut current = self;
        while let (BoxContent::Style(_), [only]) = (&current.content, current.children.as_slice()) {
            current = only;
        }
        current
    }
}

/// Result of running layout for a display tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTree {
    root: LayoutBox,
}

impl LayoutTree {
    pub fn new(root: LayoutBox) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &LayoutBox {
        &self.root
    }

    pub fn find_text(&self, value: &str) -> Option<&LayoutBox> {
        self.root.find_text(value)
    }

    pub fn node_count(&self) -> usize {
        self.root.descendants().len()
    }
}

/// Extension trait that equips display trees with layout computation.
pub trait LayoutEngine {
    fn compute_layout(&self, max_size: Size) -> LayoutTree;
}

impl LayoutEngine for DisplayNode {
    fn compute_layout(&self, max_size: Size) -> LayoutTree {
        let constraints = Constraints::loose(max_size.width, max_size.height);
        let env = LayoutEnvironment::default();
        let roots = self.flatten();
        let measured = match roots.as_slice() {
            [single] => measure(single, constraints, env),
            _ => measure_stack(
                StackLayout::group(),
                &roots,
                constraints,
                env,
                BoxContent::Group,
            ),
        };
        let origin = Point::new(
            center_offset(max_size.width, measured.size.width),
            center_offset(max_size.height, measured.size.height),
        );
        let mut next_id = 0;
        LayoutTree::new(place(measured, origin, &mut next_id))
    }
}

/// Values inherited from ancestors during measurement.
#[derive(Clone, Copy, Debug, Default)]
struct LayoutEnvironment {
    font: Font,
}

struct MeasuredNode {
    size: Size,
    content: BoxContent,
    children: Vec<(Point, MeasuredNode)>,
}

impl MeasuredNode {
    fn leaf(size: Size, content: BoxContent) -> Self {
        Self {
            size,
            content,
            children: Vec::new(),
        }
    }

    fn wrap(size: Size, content: BoxContent, offset: Point, child: MeasuredNode) -> Self {
        Self {
            size,
            content,
            children: vec![(offset, child)],
        }
    }
}

#[derive(Clone, Copy)]
struct StackLayout {
    axis: Axis,
    arrangement: LinearArrangement,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
}

impl StackLayout {
    fn vertical(arrangement: LinearArrangement, alignment: HorizontalAlignment) -> Self {
        Self {
            axis: Axis::Vertical,
            arrangement,
            horizontal: alignment,
            vertical: VerticalAlignment::Top,
        }
    }

    fn horizontal(arrangement: LinearArrangement, alignment: VerticalAlignment) -> Self {
        Self {
            axis: Axis::Horizontal,
            arrangement,
            horizontal: HorizontalAlignment::Leading,
            vertical: alignment,
        }
    }

    /// Implicit vertical stack used for groups and multi-view roots.
    fn group() -> Self {
        Self::vertical(
            LinearArrangement::spaced_by(DEFAULT_STACK_SPACING),
            HorizontalAlignment::Center,
        )
    }

    /// Main-axis length the stack occupies.
    ///
    /// Fixed spacing hugs the children. Any other arrangement distributes
    /// them over the offered length when that length is bounded.
    fn main_extent(&self, constraints: Constraints, content: f32) -> f32 {
        if let LinearArrangement::SpacedBy(_) = self.arrangement {
            return content;
        }
        let offered = match self.axis {
            Axis::Horizontal => constraints.max_width,
            Axis::Vertical => constraints.max_height,
        };
        bounded_or(offered, content).max(content)
    }

    fn main(&self, size: Size) -> f32 {
        if self.axis.is_horizontal() {
            size.width
        } else {
            size.height
        }
    }

    fn cross(&self, size: Size) -> f32 {
        if self.axis.is_horizontal() {
            size.height
        } else {
            size.width
        }
    }

    fn offset(&self, main: f32, cross_total: f32, child: Size) -> Point {
        match self.axis {
            Axis::Horizontal => Point::new(main, self.vertical.align(cross_total, child.height)),
            Axis::Vertical => Point::new(self.horizontal.align(cross_total, child.width), main),
        }
    }

    fn size(&self, main: f32, cross: f32) -> Size {
        match self.axis {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }
}

fn measure(node: &DisplayNode, constraints: Constraints, env: LayoutEnvironment) -> MeasuredNode {
    match node {
        DisplayNode::Empty => MeasuredNode::leaf(Size::ZERO, BoxContent::Empty),
        DisplayNode::Text { value } => MeasuredNode::leaf(
            env.font.measure(value),
            BoxContent::Text {
                value: value.clone(),
                font: env.font,
            },
        ),
        DisplayNode::Button { label, action } => MeasuredNode::leaf(
            env.font.measure(label),
            BoxContent::Button {
                label: label.clone(),
                font: env.font,
                action: action.clone(),
            },
        ),
        DisplayNode::Image { name, size } => {
            MeasuredNode::leaf(*size, BoxContent::Image { name: name.clone() })
        }
        DisplayNode::Shape { shape, fill } => {
            let width = bounded_or(constraints.max_width, DEFAULT_SHAPE_EXTENT);
            let height = bounded_or(constraints.max_height, DEFAULT_SHAPE_EXTENT);
            MeasuredNode::leaf(
                Size::new(width, height),
                BoxContent::Shape {
                    shape: *shape,
                    fill: *fill,
                },
            )
        }
        DisplayNode::Spacer { size } => MeasuredNode::leaf(*size, BoxContent::Spacer),
        DisplayNode::VStack { spec, children } => measure_stack(
            StackLayout::vertical(spec.arrangement, spec.alignment),
            children,
            constraints,
            env,
            BoxContent::Stack(Axis::Vertical),
        ),
        DisplayNode::HStack { spec, children } => measure_stack(
            StackLayout::horizontal(spec.arrangement, spec.alignment),
            children,
            constraints,
            env,
            BoxContent::Stack(Axis::Horizontal),
        ),
        DisplayNode::Group(children) => measure_stack(
            StackLayout::group(),
            children,
            constraints,
            env,
            BoxContent::Group,
        ),
        DisplayNode::Grid(spec) => measure_grid(spec, constraints, env),
        DisplayNode::Styled { op, content } => measure_styled(*op, content, constraints, env),
    }
}

fn measure_stack(
    layout: StackLayout,
    children: &[DisplayNode],
    constraints: Constraints,
    env: LayoutEnvironment,
    content: BoxContent,
) -> MeasuredNode {
    let flat: Vec<DisplayNode> = children.iter().flat_map(DisplayNode::flatten).collect();
    let measured: Vec<MeasuredNode> = flat
        .iter()
        .map(|child| measure(child, constraints.loosen(), env))
        .collect();
    let main_sizes: Vec<f32> = measured.iter().map(|child| layout.main(child.size)).collect();
    let arrangement = layout.arrangement;
    let main_total = layout.main_extent(constraints, arrangement.content_size(&main_sizes));
    let cross_total = measured
        .iter()
        .map(|child| layout.cross(child.size))
        .fold(0.0, f32::max);
    let mut positions = vec![0.0; main_sizes.len()];
    arrangement.arrange(main_total, &main_sizes, &mut positions);
    let children = measured
        .into_iter()
        .zip(positions)
        .map(|(child, main)| (layout.offset(main, cross_total, child.size), child))
        .collect();
    MeasuredNode {
        size: layout.size(main_total, cross_total),
        content,
        children,
    }
}

fn measure_grid(spec: &GridSpec, constraints: Constraints, env: LayoutEnvironment) -> MeasuredNode {
    let content = BoxContent::Grid {
        rows: spec.rows(),
        columns: spec.columns(),
    };
    if spec.is_empty() {
        return MeasuredNode::leaf(Size::ZERO, content);
    }
    let columns = spec.columns();
    let cells: Vec<MeasuredNode> = spec
        .cells()
        .map(|cell| measure(&cell, constraints.loosen(), env))
        .collect();
    let mut column_widths = vec![0.0_f32; columns];
    let mut row_heights = vec![0.0_f32; spec.rows()];
    for (index, cell) in cells.iter().enumerate() {
        let (row, column) = (index / columns, index % columns);
        column_widths[column] = column_widths[column].max(cell.size.width);
        row_heights[row] = row_heights[row].max(cell.size.height);
    }
    let arrangement = LinearArrangement::spaced_by(spec.gap());
    let width = arrangement.content_size(&column_widths);
    let height = arrangement.content_size(&row_heights);
    let mut column_x = vec![0.0; column_widths.len()];
    let mut row_y = vec![0.0; row_heights.len()];
    arrangement.arrange(width, &column_widths, &mut column_x);
    arrangement.arrange(height, &row_heights, &mut row_y);

    let children = cells
        .into_iter()
        .enumerate()
        .map(|(index, cell)| {
            let (row, column) = (index / columns, index % columns);
            let dx = HorizontalAlignment::Center.align(column_widths[column], cell.size.width);
            let dy = VerticalAlignment::Center.align(row_heights[row], cell.size.height);
            let offset = Point::new(column_x[column] + dx, row_y[row] + dy);
            (offset, cell)
        })
        .collect();
    MeasuredNode {
        size: Size::new(width, height),
        content,
        children,
    }
}

fn measure_styled(
    op: StyleOp,
    content: &DisplayNode,
    constraints: Constraints,
    env: LayoutEnvironment,
) -> MeasuredNode {
    let boxed = BoxContent::Style(op);
    match op {
        StyleOp::Font(font) => {
            let child = measure(content, constraints, LayoutEnvironment { font });
            MeasuredNode::wrap(child.size, boxed, Point::ZERO, child)
        }
        StyleOp::Padding(insets) => {
            let child = measure(content, constraints.deflate(insets), env);
            let size = Size::new(
                child.size.width + insets.horizontal_sum(),
                child.size.height + insets.vertical_sum(),
            );
            MeasuredNode::wrap(size, boxed, Point::new(insets.left, insets.top), child)
        }
        StyleOp::Frame {
            width,
            height,
            alignment,
        } => {
            let proposal = Constraints::loose(
                width.unwrap_or(constraints.max_width),
                height.unwrap_or(constraints.max_height),
            );
            let child = measure(content, proposal, env);
            let size = Size::new(
                width.unwrap_or(child.size.width),
                height.unwrap_or(child.size.height),
            );
            let offset = align_within(alignment, size, child.size);
            MeasuredNode::wrap(size, boxed, offset, child)
        }
        StyleOp::MaxFrame {
            max_width,
            max_height,
            alignment,
        } => {
            let proposal = Constraints::loose(
                cap(constraints.max_width, max_width),
                cap(constraints.max_height, max_height),
            );
            let child = measure(content, proposal, env);
            let size = Size::new(
                resolve_max(max_width, constraints.max_width, child.size.width),
                resolve_max(max_height, constraints.max_height, child.size.height),
            );
            let offset = align_within(alignment, size, child.size);
            MeasuredNode::wrap(size, boxed, offset, child)
        }
        StyleOp::Foreground(_)
        | StyleOp::Background(_)
        | StyleOp::ClipShape(_)
        | StyleOp::Blur(_) => {
            let child = measure(content, constraints, env);
            MeasuredNode::wrap(child.size, boxed, Point::ZERO, child)
        }
    }
}

fn place(measured: MeasuredNode, origin: Point, next_id: &mut NodeId) -> LayoutBox {
    let node_id = *next_id;
    *next_id += 1;
    let rect = Rect::from_origin_size(origin, measured.size);
    let children = measured
        .children
        .into_iter()
        .map(|(offset, child)| place(child, origin + offset, next_id))
        .collect();
    LayoutBox::new(node_id, rect, measured.content, children)
}

fn align_within(alignment: Alignment, outer: Size, inner: Size) -> Point {
    Point::new(
        alignment.horizontal.align(outer.width, inner.width),
        alignment.vertical.align(outer.height, inner.height),
    )
}

fn bounded_or(max: f32, fallback: f32) -> f32 {
    if max.is_finite() {
        max
    } else {
        fallback
    }
}

fn center_offset(available: f32, size: f32) -> f32 {
    if available.is_finite() {
        ((available - size) / 2.0).max(0.0)
    } else {
        0.0
    }
}

fn cap(offered: f32, max: Option<f32>) -> f32 {
    match max {
        Some(max) => offered.min(max),
        None => offered,
    }
}

fn resolve_max(max: Option<f32>, offered: f32, child: f32) -> f32 {
    match max {
        Some(max) if max.is_infinite() => {
            if offered.is_finite() {
                offered.max(child)
            } else {
                child
            }
        }
        Some(max) => child.min(max),
        None => child,
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
