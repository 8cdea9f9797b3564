use viewkit_app_shell::{AppShell, HeadlessSceneRenderer, RenderScene, Renderer, ShellConfig};
use viewkit_graphics::Size;
use viewkit_ui::{HitRegion, LayoutTree, Text, VStack, VStackSpec};

#[derive(Debug, Default)]
struct DummyScene;

impl RenderScene for DummyScene {
    fn clear(&mut self) {}

    fn hit_test(&self, _x: f32, _y: f32) -> Option<HitRegion> {
        None
    }

    fn button(&self, _label: &str) -> Option<HitRegion> {
        None
    }
}

#[derive(Debug, Default)]
struct DummyRenderer {
    scene: DummyScene,
    rebuilds: usize,
}

impl Renderer for DummyRenderer {
    type Scene = DummyScene;
    type Error = ();

    fn scene(&self) -> &Self::Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Self::Scene {
        &mut self.scene
    }

    fn rebuild_scene(
        &mut self,
        _layout_tree: &LayoutTree,
        _viewport: Size,
    ) -> Result<(), Self::Error> {
        self.rebuilds += 1;
        Ok(())
    }
}

#[test]
fn static_app_renders_once_and_settles() {
    let mut shell = AppShell::new(DummyRenderer::default(), |_| {
        VStack(VStackSpec::default(), [Text("Hello"), Text("World")])
    });
    assert_eq!(shell.render_count(), 1);
    assert!(!shell.should_render());
    assert_eq!(shell.update(), Ok(0));
    assert_eq!(shell.renderer().rebuilds, 1);
    assert!(shell.layout().and_then(|tree| tree.find_text("World")).is_some());
}

#[test]
fn resize_re_renders_with_new_viewport() {
    let config = ShellConfig::new().viewport(200.0, 100.0);
    let mut shell = AppShell::with_config(HeadlessSceneRenderer::new(), config, |_| Text("Hi"));
    let before = shell.scene().find_text("Hi").map(|op| op.rect());
    shell.set_viewport(400.0, 300.0);
    let after = shell.scene().find_text("Hi").map(|op| op.rect());

    assert_eq!(shell.render_count(), 2);
    assert_eq!(shell.config().viewport, Size::new(400.0, 300.0));
    assert_ne!(before, after);
}

#[test]
fn negative_viewport_is_clamped() {
    let config = ShellConfig::new().viewport(-10.0, 50.0).max_passes(0);
    assert_eq!(config.viewport, Size::new(0.0, 50.0));
    assert_eq!(config.max_passes, 1);
}
