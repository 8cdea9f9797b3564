//! Explicit child builders used in place of result-builder syntax.

#![allow(non_snake_case)]

use crate::node::DisplayNode;

/// Boxed producer of one child.
pub type ChildFn = Box<dyn FnOnce() -> DisplayNode>;

/// Anything that can produce the ordered children of a container.
pub trait ViewBuilder {
    fn build(self) -> Vec<DisplayNode>;
}

impl ViewBuilder for Vec<DisplayNode> {
    fn build(self) -> Vec<DisplayNode> {
        self
    }
}

impl<const N: usize> ViewBuilder for [DisplayNode; N] {
    fn build(self) -> Vec<DisplayNode> {
        self.into_iter().collect()
    }
}

impl ViewBuilder for Vec<ChildFn> {
    fn build(self) -> Vec<DisplayNode> {
        self.into_iter().map(|produce| produce()).collect()
    }
}

impl ViewBuilder for DisplayNode {
    fn build(self) -> Vec<DisplayNode> {
        vec![self]
    }
}

/// Children collected imperatively, for content that needs `if` or loops.
#[derive(Debug, Default)]
pub struct Children(Vec<DisplayNode>);

impl Children {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: DisplayNode) -> &mut Self {
        self.0.push(node);
        self
    }

    pub fn add_if(&mut self, condition: bool, node: impl FnOnce() -> DisplayNode) -> &mut Self {
        if condition {
            self.0.push(node());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ViewBuilder for Children {
    fn build(self) -> Vec<DisplayNode> {
        self.0
    }
}

/// Evaluates a list of child producers in order.
pub fn build_children(producers: Vec<ChildFn>) -> Vec<DisplayNode> {
    producers.build()
}

/// Fills a [`Children`] list through a closure.
pub fn Content(fill: impl FnOnce(&mut Children)) -> Children {
    let mut children = Children::new();
    fill(&mut children);
    children
}

/// One child per item, in iteration order.
pub fn ForEach<I, F>(items: I, row: F) -> Vec<DisplayNode>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> DisplayNode,
{
    items.into_iter().map(row).collect()
}

/// Groups children without adding a container of its own.
pub fn Group(content: impl ViewBuilder) -> DisplayNode {
    DisplayNode::Group(content.build())
}

/// Several views returned side by side; laid out like a group.
pub fn TupleView(content: impl ViewBuilder) -> DisplayNode {
    Group(content)
}
