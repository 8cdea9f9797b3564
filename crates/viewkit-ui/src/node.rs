//! Immutable description of a UI tree.

use std::fmt;
use std::rc::Rc;

use viewkit_graphics::{Color, Shape, Size};

use crate::modifier::StyleOp;
use crate::widgets::{GridSpec, HStackSpec, VStackSpec};

/// Callback invoked when a button is pressed.
#[derive(Clone)]
pub struct Action(Rc<dyn Fn()>);

impl Action {
    pub fn new(action: impl Fn() + 'static) -> Self {
        Self(Rc::new(action))
    }

    /// Action that does nothing.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn perform(&self) {
        (self.0)()
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// Something to render. Built fresh on every pass and never mutated.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DisplayNode {
    #[default]
    Empty,
    Text {
        value: String,
    },
    Button {
        label: String,
        action: Action,
    },
    Image {
        name: String,
        size: Size,
    },
    Shape {
        shape: Shape,
        fill: Option<Color>,
    },
    Spacer {
        size: Size,
    },
    VStack {
        spec: VStackSpec,
        children: Vec<DisplayNode>,
    },
    HStack {
        spec: HStackSpec,
        children: Vec<DisplayNode>,
    },
    /// Cells are built by the [`GridSpec`] when the grid is laid out.
    Grid(GridSpec),
    /// Transparent container: children join the enclosing container.
    Group(Vec<DisplayNode>),
    Styled {
        op: StyleOp,
        content: Box<DisplayNode>,
    },
}

impl DisplayNode {
    /// Wraps this node in a single style operation.
    pub fn styled(self, op: StyleOp) -> Self {
        DisplayNode::Styled {
            op,
            content: Box::new(self),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DisplayNode::Empty)
    }

    /// Expands groups into the sequence of nodes a container actually holds.
    ///
    /// A style operation applied to a group is applied to each of its children.
    pub fn flatten(&self) -> Vec<DisplayNode> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<DisplayNode>) {
        match self {
            DisplayNode::Empty => {}
            DisplayNode::Group(children) => {
                for child in children {
                    child.flatten_into(out);
                }
            }
            DisplayNode::Styled { op, content } if content.is_group_like() => {
                for child in content.flatten() {
                    out.push(child.styled(*op));
                }
            }
            other => out.push(other.clone()),
        }
    }

    fn is_group_like(&self) -> bool {
        match self {
            DisplayNode::Group(_) => true,
            DisplayNode::Styled { content, .. } => content.is_group_like(),
            _ => false,
        }
    }

    /// Text and button labels in tree order, with grid cells expanded.
    pub fn text_values(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            DisplayNode::Text { value } => out.push(value.clone()),
            DisplayNode::Button { label, .. } => out.push(label.clone()),
            DisplayNode::VStack { children, .. }
            | DisplayNode::HStack { children, .. }
            | DisplayNode::Group(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
            DisplayNode::Grid(spec) => {
                for cell in spec.cells() {
                    cell.collect_text(out);
                }
            }
            DisplayNode::Styled { content, .. } => content.collect_text(out),
            DisplayNode::Empty
            | DisplayNode::Image { .. }
            | DisplayNode::Shape { .. }
            | DisplayNode::Spacer { .. } => {}
        }
    }

    /// Style operations wrapping this node, outermost first.
    pub fn style_ops(&self) -> Vec<StyleOp> {
        let mut ops = Vec::new();
        let mut current = self;
        while let DisplayNode::Styled { op, content } = current {
            ops.push(*op);
            current = content;
        }
        ops
    }
}
