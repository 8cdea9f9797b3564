//! Single-threaded event dispatch for viewkit views.
//!
//! The shell owns the runtime and the root view. A press is routed to the
//! button under it, the button's action writes state, and [`AppShell::update`]
//! re-runs the root view until the runtime is valid again.

use std::fmt::Debug;

use viewkit_core::{Runtime, Scope};
use viewkit_graphics::Size;
use viewkit_ui::{log_layout_tree, DisplayNode, LayoutEngine, LayoutTree};

mod error;
mod render;

pub use error::DispatchError;
pub use render::{HeadlessSceneRenderer, RenderScene, Renderer};

/// Shell settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellConfig {
    pub viewport: Size,
    /// Passes allowed per update before the tree is reported as unsettled.
    pub max_passes: usize,
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Size::new(width.max(0.0), height.max(0.0));
        self
    }

    pub fn max_passes(mut self, passes: usize) -> Self {
        self.max_passes = passes.max(1);
        self
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(800.0, 600.0),
            max_passes: 8,
        }
    }
}

type RootView = Box<dyn FnMut(&Scope<'_>) -> DisplayNode>;

pub struct AppShell<R>
where
    R: Renderer,
{
    runtime: Runtime,
    content: RootView,
    renderer: R,
    config: ShellConfig,
    last_layout: Option<LayoutTree>,
}

impl<R> AppShell<R>
where
    R: Renderer,
    R::Error: Debug,
{
    pub fn new(renderer: R, content: impl FnMut(&Scope<'_>) -> DisplayNode + 'static) -> Self {
        Self::with_config(renderer, ShellConfig::default(), content)
    }

    pub fn with_config(
        renderer: R,
        config: ShellConfig,
        content: impl FnMut(&Scope<'_>) -> DisplayNode + 'static,
    ) -> Self {
        let mut shell = Self {
            runtime: Runtime::new(),
            content: Box::new(content),
            renderer,
            config,
            last_layout: None,
        };
        if let Err(err) = shell.update() {
            log::error!("initial render failed: {err}");
        }
        shell
    }

    pub fn config(&self) -> ShellConfig {
        self.config
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn scene(&self) -> &R::Scene {
        self.renderer.scene()
    }

    pub fn renderer(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn layout(&self) -> Option<&LayoutTree> {
        self.last_layout.as_ref()
    }

    /// Completed render passes so far.
    pub fn render_count(&self) -> u64 {
        self.runtime.pass_count()
    }

    pub fn should_render(&self) -> bool {
        self.runtime.is_invalid()
    }

    /// Re-renders with a new viewport.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.config = self.config.viewport(width, height);
        self.runtime.invalidate();
        if let Err(err) = self.update() {
            log::error!("render after resize failed: {err}");
        }
    }

    /// Runs render passes until state settles; returns how many ran.
    pub fn update(&mut self) -> Result<usize, DispatchError> {
        let mut passes = 0;
        while self.runtime.is_invalid() {
            if passes == self.config.max_passes {
                log::warn!("tree did not settle after {passes} passes");
                return Err(DispatchError::Unsettled { passes });
            }
            self.render_pass();
            passes += 1;
        }
        Ok(passes)
    }

    /// Presses the topmost button at a point.
    pub fn press_at(&mut self, x: f32, y: f32) -> Result<(), DispatchError> {
        let Some(target) = self.renderer.scene().hit_test(x, y) else {
            log::warn!("press at ({x}, {y}) hit no button");
            return Err(DispatchError::NoTarget { x, y });
        };
        log::debug!("press on {:?}", target.label);
        target.dispatch();
        self.update().map(|_| ())
    }

    /// Presses the first button with the given label.
    pub fn press(&mut self, label: &str) -> Result<(), DispatchError> {
        let Some(target) = self.renderer.scene().button(label) else {
            log::warn!("no button labelled {label:?}");
            return Err(DispatchError::NoButton {
                label: label.to_string(),
            });
        };
        target.dispatch();
        self.update().map(|_| ())
    }

    pub fn log_debug_info(&self) {
        match &self.last_layout {
            Some(tree) => log_layout_tree(tree),
            None => log::info!("no layout available"),
        }
    }

    fn render_pass(&mut self) {
        let content = &mut self.content;
        let root = self.runtime.compose(|scope| content(scope));
        let tree = root.compute_layout(self.config.viewport);
        self.renderer.scene_mut().clear();
        if let Err(err) = self.renderer.rebuild_scene(&tree, self.config.viewport) {
            log::error!("renderer rebuild failed: {err:?}");
        }
        self.last_layout = Some(tree);
    }
}
