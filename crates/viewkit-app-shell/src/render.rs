//! Rendering contracts between the shell and a backend.

use std::convert::Infallible;

use viewkit_graphics::Size;
use viewkit_ui::{HeadlessRenderer, HitRegion, LayoutTree, RecordedRenderScene};

/// Minimal surface the shell needs from a rendered frame.
pub trait RenderScene {
    fn clear(&mut self);
    fn hit_test(&self, x: f32, y: f32) -> Option<HitRegion>;
    fn button(&self, label: &str) -> Option<HitRegion>;
}

impl RenderScene for RecordedRenderScene {
    fn clear(&mut self) {
        RecordedRenderScene::clear(self);
    }

    fn hit_test(&self, x: f32, y: f32) -> Option<HitRegion> {
        RecordedRenderScene::hit_test(self, x, y).cloned()
    }

    fn button(&self, label: &str) -> Option<HitRegion> {
        RecordedRenderScene::button(self, label).cloned()
    }
}

/// Abstraction implemented by concrete renderer backends.
pub trait Renderer {
    type Scene: RenderScene;
    type Error;

    fn scene(&self) -> &Self::Scene;
    fn scene_mut(&mut self) -> &mut Self::Scene;

    fn rebuild_scene(&mut self, layout_tree: &LayoutTree, viewport: Size)
        -> Result<(), Self::Error>;
}

/// Renderer that keeps the recorded operations in memory.
#[derive(Debug, Default)]
pub struct HeadlessSceneRenderer {
    renderer: HeadlessRenderer,
    scene: RecordedRenderScene,
}

impl HeadlessSceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessSceneRenderer {
    type Scene = RecordedRenderScene;
    type Error = Infallible;

    fn scene(&self) -> &Self::Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Self::Scene {
        &mut self.scene
    }

    fn rebuild_scene(
        &mut self,
        layout_tree: &LayoutTree,
        _viewport: Size,
    ) -> Result<(), Self::Error> {
        self.scene = self.renderer.render(layout_tree);
        Ok(())
    }
}
