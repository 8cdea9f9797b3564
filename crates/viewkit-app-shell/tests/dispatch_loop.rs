use viewkit_app_shell::{AppShell, DispatchError, HeadlessSceneRenderer, ShellConfig};
use viewkit_ui::{Button, Conditional, DisplayNode, Text, VStack, VStackSpec};

fn toggle_app() -> AppShell<HeadlessSceneRenderer> {
    AppShell::new(HeadlessSceneRenderer::new(), |scope| {
        let state = scope.use_toggle();
        let toggle = state.clone();
        VStack(
            VStackSpec::default(),
            vec![
                Conditional::new(state, |_| Text("Off"), |_| Text("On")).into(),
                Button("Toggle", move || toggle.toggle()),
            ],
        )
    })
}

#[test]
fn press_by_label_flips_branch() {
    let mut shell = toggle_app();
    assert!(shell.scene().find_text("Off").is_some());

    shell.press("Toggle").expect("press");
    assert!(shell.scene().find_text("On").is_some());
    assert!(shell.scene().find_text("Off").is_none());
    assert_eq!(shell.render_count(), 2);

    shell.press("Toggle").expect("press");
    assert!(shell.scene().find_text("Off").is_some());
    assert_eq!(shell.render_count(), 3);
}

#[test]
fn press_at_hits_button_rect() {
    let mut shell = toggle_app();
    let center = shell
        .scene()
        .button("Toggle")
        .map(|region| region.rect)
        .expect("button region");
    let x = center.x + center.width / 2.0;
    let y = center.y + center.height / 2.0;

    shell.press_at(x, y).expect("press");
    assert!(shell.scene().find_text("On").is_some());
}

#[test]
fn press_misses_are_errors() {
    let mut shell = toggle_app();
    assert_eq!(
        shell.press_at(-5.0, -5.0),
        Err(DispatchError::NoTarget { x: -5.0, y: -5.0 })
    );
    assert_eq!(
        shell.press("Missing"),
        Err(DispatchError::NoButton {
            label: "Missing".into()
        })
    );
    assert_eq!(shell.render_count(), 1);
}

#[test]
fn state_written_every_pass_is_unsettled() {
    let config = ShellConfig::new().max_passes(3);
    let mut shell = AppShell::with_config(HeadlessSceneRenderer::new(), config, |scope| {
        let counter = scope.use_state(|| 0u32);
        counter.update(|value| *value += 1);
        Text(format!("{}", counter.get()))
    });
    assert_eq!(shell.render_count(), 3);

    let err = shell.update().unwrap_err();
    assert_eq!(err, DispatchError::Unsettled { passes: 3 });
    assert_eq!(err.to_string(), "state still invalid after 3 render passes");
}

#[test]
fn empty_root_renders_nothing() {
    let shell = AppShell::new(HeadlessSceneRenderer::new(), |_| DisplayNode::Empty);
    assert!(shell.scene().operations().is_empty());
    assert!(shell.scene().hit_regions().is_empty());
}
