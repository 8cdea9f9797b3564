//! Display nodes, style modifiers, containers and layout for viewkit.
//!
//! Views are functions returning a [`DisplayNode`]. Trees are rebuilt from
//! state on every pass, laid out with [`LayoutEngine`], and painted by the
//! [`HeadlessRenderer`] into a [`RecordedRenderScene`].

mod debug;
mod layout;
mod modifier;
mod node;
mod renderer;
pub mod widgets;

pub use layout::{BoxContent, LayoutBox, LayoutEngine, LayoutTree, NodeId, DEFAULT_SHAPE_EXTENT};
pub use modifier::{
    chain, CapsuleStyle, Chain, Modifier, StyleModifier, StyleOp, TitleStyle, DEFAULT_PADDING,
};
pub use node::{Action, DisplayNode};
pub use renderer::{Clip, HeadlessRenderer, HitRegion, RecordedRenderScene, RenderOp};
pub use viewkit_core::{Binding, Runtime, Scope, ToggleState};
pub use viewkit_graphics::{Color, CornerRadii, EdgeInsets, Font, Point, Rect, Shape, Size};
pub use viewkit_layout::{
    Alignment, Arrangement, Axis, HorizontalAlignment, LinearArrangement, VerticalAlignment,
};
pub use widgets::{
    build_children, Button, ChildFn, Children, Conditional, Content, FilledShape, ForEach, Grid,
    GridSpec, Group, HStack, HStackSpec, If, Image, ShapeView, Spacer, Text, TupleView, VStack,
    VStackSpec, ViewBuilder, DEFAULT_STACK_SPACING,
};

// Debug utilities
pub use debug::{format_layout_tree, format_render_scene, log_layout_tree, log_render_scene};

/// Lays out `root` in `viewport` and paints it.
pub fn render_scene(root: &DisplayNode, viewport: Size) -> (LayoutTree, RecordedRenderScene) {
    let tree = root.compute_layout(viewport);
    let scene = HeadlessRenderer::new().render(&tree);
    (tree, scene)
}

#[cfg(test)]
#[path = "tests/primitives_tests.rs"]
mod tests;
