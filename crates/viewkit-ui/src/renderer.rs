use viewkit_graphics::{Color, Font, Rect, Shape};

use crate::layout::{BoxContent, LayoutBox, LayoutTree, NodeId};
use crate::modifier::StyleOp;
use crate::node::Action;

/// Clip applied by the innermost enclosing clip-shape modifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clip {
    pub shape: Shape,
    pub rect: Rect,
}

/// A rendered operation emitted by the headless renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    Fill {
        node_id: NodeId,
        rect: Rect,
        color: Color,
        shape: Shape,
        blur: f32,
        clip: Option<Clip>,
    },
    Text {
        node_id: NodeId,
        rect: Rect,
        value: String,
        font: Font,
        color: Color,
        blur: f32,
        clip: Option<Clip>,
    },
    Image {
        node_id: NodeId,
        rect: Rect,
        name: String,
        blur: f32,
        clip: Option<Clip>,
    },
}

impl RenderOp {
    pub fn node_id(&self) -> NodeId {
        match self {
            RenderOp::Fill { node_id, .. }
            | RenderOp::Text { node_id, .. }
            | RenderOp::Image { node_id, .. } => *node_id,
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            RenderOp::Fill { rect, .. }
            | RenderOp::Text { rect, .. }
            | RenderOp::Image { rect, .. } => *rect,
        }
    }

    pub fn blur(&self) -> f32 {
        match self {
            RenderOp::Fill { blur, .. }
            | RenderOp::Text { blur, .. }
            | RenderOp::Image { blur, .. } => *blur,
        }
    }

    pub fn clip(&self) -> Option<Clip> {
        match self {
            RenderOp::Fill { clip, .. }
            | RenderOp::Text { clip, .. }
            | RenderOp::Image { clip, .. } => *clip,
        }
    }
}

/// Pressable area recorded for a button.
#[derive(Clone, Debug, PartialEq)]
pub struct HitRegion {
    pub node_id: NodeId,
    pub rect: Rect,
    pub label: String,
    pub action: Action,
}

impl HitRegion {
    pub fn dispatch(&self) {
        self.action.perform();
    }
}

/// A collection of render operations for a laid-out scene.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedRenderScene {
    operations: Vec<RenderOp>,
    hit_regions: Vec<HitRegion>,
}

impl RecordedRenderScene {
    pub fn new(operations: Vec<RenderOp>, hit_regions: Vec<HitRegion>) -> Self {
        Self {
            operations,
            hit_regions,
        }
    }

    /// Returns a slice of recorded render operations in paint order.
    pub fn operations(&self) -> &[RenderOp] {
        &self.operations
    }

    pub fn hit_regions(&self) -> &[HitRegion] {
        &self.hit_regions
    }

    pub fn fills(&self) -> impl Iterator<Item = &RenderOp> {
        self.operations
            .iter()
            .filter(|op| matches!(op, RenderOp::Fill { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &RenderOp> {
        self.operations
            .iter()
            .filter(|op| matches!(op, RenderOp::Text { .. }))
    }

    /// First text op showing `value`.
    pub fn find_text(&self, value: &str) -> Option<&RenderOp> {
        self.texts().find(|op| match op {
            RenderOp::Text { value: text, .. } => text == value,
            _ => false,
        })
    }

    /// Topmost button containing the point.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<&HitRegion> {
        self.hit_regions
            .iter()
            .rev()
            .find(|region| region.rect.contains(x, y))
    }

    pub fn button(&self, label: &str) -> Option<&HitRegion> {
        self.hit_regions.iter().find(|region| region.label == label)
    }

    pub fn clear(&mut self) {
        self.operations.clear();
        self.hit_regions.clear();
    }
}

/// Values that flow from ancestors to descendants while painting.
#[derive(Clone, Copy, Debug, Default)]
struct PaintEnvironment {
    foreground: Option<Color>,
    blur: f32,
    clip: Option<Clip>,
}

/// A lightweight renderer that walks the layout tree and materialises paint commands.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    scene: RecordedRenderScene,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, tree: &LayoutTree) -> RecordedRenderScene {
        self.scene.clear();
        self.render_box(tree.root(), PaintEnvironment::default());
        std::mem::take(&mut self.scene)
    }

    fn render_box(&mut self, layout: &LayoutBox, env: PaintEnvironment) {
        let node_id = layout.node_id;
        let rect = layout.rect;
        let mut child_env = env;
        match &layout.content {
            BoxContent::Text { value, font } => {
                self.scene.operations.push(RenderOp::Text {
                    node_id,
                    rect,
                    value: value.clone(),
                    font: *font,
                    color: env.foreground.unwrap_or(Color::PRIMARY),
                    blur: env.blur,
                    clip: env.clip,
                });
            }
            BoxContent::Button {
                label,
                font,
                action,
            } => {
                self.scene.operations.push(RenderOp::Text {
                    node_id,
                    rect,
                    value: label.clone(),
                    font: *font,
                    color: env.foreground.unwrap_or(Color::ACCENT),
                    blur: env.blur,
                    clip: env.clip,
                });
                self.scene.hit_regions.push(HitRegion {
                    node_id,
                    rect,
                    label: label.clone(),
                    action: action.clone(),
                });
            }
            BoxContent::Image { name } => {
                self.scene.operations.push(RenderOp::Image {
                    node_id,
                    rect,
                    name: name.clone(),
                    blur: env.blur,
                    clip: env.clip,
                });
            }
            BoxContent::Shape { shape, fill } => {
                self.scene.operations.push(RenderOp::Fill {
                    node_id,
                    rect: shape.bounds(rect),
                    color: fill.or(env.foreground).unwrap_or(Color::PRIMARY),
                    shape: *shape,
                    blur: env.blur,
                    clip: env.clip,
                });
            }
            BoxContent::Style(op) => match op {
                StyleOp::Background(color) => {
                    self.scene.operations.push(RenderOp::Fill {
                        node_id,
                        rect,
                        color: *color,
                        shape: Shape::Rectangle,
                        blur: env.blur,
                        clip: env.clip,
                    });
                }
                StyleOp::ClipShape(shape) => {
                    child_env.clip = Some(Clip {
                        shape: *shape,
                        rect: shape.bounds(rect),
                    });
                }
                StyleOp::Foreground(color) => child_env.foreground = Some(*color),
                StyleOp::Blur(radius) => child_env.blur += radius,
                StyleOp::Font(_)
                | StyleOp::Padding(_)
                | StyleOp::Frame { .. }
                | StyleOp::MaxFrame { .. } => {}
            },
            BoxContent::Empty
            | BoxContent::Spacer
            | BoxContent::Stack(_)
            | BoxContent::Grid { .. }
            | BoxContent::Group => {}
        }
        for child in &layout.children {
            self.render_box(child, child_env);
        }
    }
}

#[cfg(test)]
#[path = "tests/renderer_tests.rs"]
mod tests;
