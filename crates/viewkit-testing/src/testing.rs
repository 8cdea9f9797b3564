use viewkit_app_shell::{AppShell, DispatchError, HeadlessSceneRenderer, ShellConfig};
use viewkit_core::Scope;
use viewkit_graphics::{Color, Rect, Size};
use viewkit_ui::{format_layout_tree, DisplayNode, LayoutTree, RecordedRenderScene, RenderOp};

/// Headless harness for exercising views in tests.
///
/// `ViewTester` drives an [`AppShell`] backed by the in-memory renderer and
/// exposes lookups over the last recorded scene.
pub struct ViewTester {
    shell: AppShell<HeadlessSceneRenderer>,
}

impl ViewTester {
    /// Renders `content` in the default 800x600 viewport.
    pub fn new(content: impl FnMut(&Scope<'_>) -> DisplayNode + 'static) -> Self {
        Self::with_config(ShellConfig::default(), content)
    }

    pub fn with_viewport(
        size: Size,
        content: impl FnMut(&Scope<'_>) -> DisplayNode + 'static,
    ) -> Self {
        Self::with_config(ShellConfig::new().viewport(size.width, size.height), content)
    }

    pub fn with_config(
        config: ShellConfig,
        content: impl FnMut(&Scope<'_>) -> DisplayNode + 'static,
    ) -> Self {
        Self {
            shell: AppShell::with_config(HeadlessSceneRenderer::new(), config, content),
        }
    }

    pub fn scene(&self) -> &RecordedRenderScene {
        self.shell.scene()
    }

    pub fn layout(&self) -> Option<&LayoutTree> {
        self.shell.layout()
    }

    pub fn render_count(&self) -> u64 {
        self.shell.render_count()
    }

    pub fn press(&mut self, label: &str) -> Result<(), DispatchError> {
        self.shell.press(label)
    }

    pub fn press_at(&mut self, x: f32, y: f32) -> Result<(), DispatchError> {
        self.shell.press_at(x, y)
    }

    /// Runs pending passes and reports how many ran.
    pub fn pump_until_idle(&mut self) -> Result<usize, DispatchError> {
        self.shell.update()
    }

    pub fn has_text(&self, value: &str) -> bool {
        self.scene().find_text(value).is_some()
    }

    /// Every painted string, in paint order.
    pub fn texts(&self) -> Vec<String> {
        self.scene()
            .texts()
            .filter_map(|op| match op {
                RenderOp::Text { value, .. } => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn text_rect(&self, value: &str) -> Option<Rect> {
        self.scene().find_text(value).map(RenderOp::rect)
    }

    pub fn text_color(&self, value: &str) -> Option<Color> {
        match self.scene().find_text(value)? {
            RenderOp::Text { color, .. } => Some(*color),
            _ => None,
        }
    }

    /// Fill colors in paint order.
    pub fn fill_colors(&self) -> Vec<Color> {
        self.scene()
            .fills()
            .filter_map(|op| match op {
                RenderOp::Fill { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    pub fn dump_layout(&self) -> String {
        self.layout().map(format_layout_tree).unwrap_or_default()
    }

    pub fn shell(&mut self) -> &mut AppShell<HeadlessSceneRenderer> {
        &mut self.shell
    }
}

/// Convenience helper for tests that only need temporary access to a
/// `ViewTester`.
pub fn run_test_view<R>(
    content: impl FnMut(&Scope<'_>) -> DisplayNode + 'static,
    f: impl FnOnce(&mut ViewTester) -> R,
) -> R {
    let mut tester = ViewTester::new(content);
    f(&mut tester)
}
