//! Debug utilities for inspecting layout trees and render scenes.

use std::fmt::Write;

use crate::layout::{BoxContent, LayoutBox, LayoutTree};
use crate::renderer::{RecordedRenderScene, RenderOp};

/// Formats the layout tree as an indented outline.
pub fn format_layout_tree(tree: &LayoutTree) -> String {
    let mut out = String::new();
    format_box(tree.root(), 0, &mut out);
    out
}

fn format_box(layout: &LayoutBox, depth: usize, out: &mut String) {
    let rect = layout.rect;
    let _ = writeln!(
        out,
        "{:indent$}#{} {} [{:.1}, {:.1}, {:.1}x{:.1}]",
        "",
        layout.node_id,
        describe(&layout.content),
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        indent = depth * 2,
    );
    for child in &layout.children {
        format_box(child, depth + 1, out);
    }
}

fn describe(content: &BoxContent) -> String {
    match content {
        BoxContent::Empty => "Empty".to_string(),
        BoxContent::Text { value, font } => format!("Text({value:?}, {font:?})"),
        BoxContent::Button { label, .. } => format!("Button({label:?})"),
        BoxContent::Image { name } => format!("Image({name:?})"),
        BoxContent::Shape { shape, .. } => format!("Shape({shape:?})"),
        BoxContent::Spacer => "Spacer".to_string(),
        BoxContent::Stack(axis) => format!("Stack({axis:?})"),
        BoxContent::Grid { rows, columns } => format!("Grid({rows}x{columns})"),
        BoxContent::Group => "Group".to_string(),
        BoxContent::Style(op) => format!("{op:?}"),
    }
}

/// Formats every render operation on its own line.
pub fn format_render_scene(scene: &RecordedRenderScene) -> String {
    let mut out = String::new();
    for op in scene.operations() {
        let rect = op.rect();
        let _ = match op {
            RenderOp::Fill { color, shape, .. } => writeln!(
                out,
                "#{} fill {shape:?} {color:?} [{:.1}, {:.1}, {:.1}x{:.1}] blur={:.1}",
                op.node_id(),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                op.blur(),
            ),
            RenderOp::Text { value, color, .. } => writeln!(
                out,
                "#{} text {value:?} {color:?} [{:.1}, {:.1}, {:.1}x{:.1}] blur={:.1}",
                op.node_id(),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                op.blur(),
            ),
            RenderOp::Image { name, .. } => writeln!(
                out,
                "#{} image {name:?} [{:.1}, {:.1}, {:.1}x{:.1}]",
                op.node_id(),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
            ),
        };
    }
    out
}

pub fn log_layout_tree(tree: &LayoutTree) {
    log::info!("layout tree ({} nodes):\n{}", tree.node_count(), format_layout_tree(tree));
}

pub fn log_render_scene(scene: &RecordedRenderScene) {
    log::info!(
        "render scene ({} ops, {} buttons):\n{}",
        scene.operations().len(),
        scene.hit_regions().len(),
        format_render_scene(scene)
    );
}

#[cfg(test)]
#[path = "tests/debug_tests.rs"]
mod tests;
