//! One function per demonstration view.
//!
//! Every view is independent. Views that look alike are separate on purpose
//! so each one can be rendered and inspected alone.

use viewkit_core::Scope;
use viewkit_ui::{
    Button, CapsuleStyle, Color, Conditional, DisplayNode, Font, Grid, GridSpec, Group, Shape,
    Text, ToggleState, TupleView, VStack, VStackSpec,
};

pub const MOTTO_FIRST: &str = "Draco dormiens";
pub const MOTTO_SECOND: &str = "nunquam titllandus";
pub const HELLO: &str = "Hello, world!";
pub const HOUSES: [&str; 4] = ["Gryffindor", "Hufflepuff", "Ravenclaw", "Slytherin"];

/// Large text on a blue capsule.
pub fn capsule_text(text: &str) -> DisplayNode {
    Text(text).modifier(CapsuleStyle::default())
}

/// Two capsules sharing one modifier, tinted by their callers.
pub fn capsule_text_view(_: &Scope<'_>) -> DisplayNode {
    VStack(
        VStackSpec::new().spacing(10.0),
        [
            capsule_text("First").foreground_color(Color::WHITE),
            capsule_text("Second").foreground_color(Color::YELLOW),
        ],
    )
}

/// The same styling written out twice by hand.
pub fn duplicate_modifiers_view(_: &Scope<'_>) -> DisplayNode {
    VStack(
        VStackSpec::new().spacing(10.0),
        [
            Text("First")
                .font(Font::LargeTitle)
                .padding_default()
                .foreground_color(Color::WHITE)
                .background(Color::BLUE)
                .clip_shape(Shape::Capsule),
            Text("Second")
                .font(Font::LargeTitle)
                .padding_default()
                .foreground_color(Color::WHITE)
                .background(Color::BLUE)
                .clip_shape(Shape::Capsule),
        ],
    )
}

fn spell_lines() -> [DisplayNode; 2] {
    [
        Text(MOTTO_FIRST).foreground_color(Color::RED),
        Text(MOTTO_SECOND).foreground_color(Color::BLUE),
    ]
}

/// Several root views returned from a builder; the root stacks them.
pub fn spells_builder_view(_: &Scope<'_>) -> DisplayNode {
    TupleView(spell_lines())
}

pub fn spells_group_view(_: &Scope<'_>) -> DisplayNode {
    Group(spell_lines())
}

pub fn spells_vstack_view(_: &Scope<'_>) -> DisplayNode {
    VStack(VStackSpec::default(), spell_lines())
}

/// Views stored as values before being styled.
struct Mottos {
    first: DisplayNode,
    second: DisplayNode,
}

impl Mottos {
    fn new() -> Self {
        Self {
            first: Text(MOTTO_FIRST),
            second: Text(MOTTO_SECOND),
        }
    }
}

pub fn views_as_properties_view(_: &Scope<'_>) -> DisplayNode {
    let mottos = Mottos::new();
    VStack(
        VStackSpec::default(),
        [
            mottos.first.foreground_color(Color::RED),
            mottos.second.foreground_color(Color::BLUE),
        ],
    )
}

/// Blur on the stack adds to blur on each child.
pub fn regular_blur_view(_: &Scope<'_>) -> DisplayNode {
    let [gryffindor, hufflepuff, ravenclaw, slytherin] = HOUSES;
    VStack(
        VStackSpec::default(),
        [
            Text(gryffindor),
            Text(hufflepuff).blur(0.0),
            Text(ravenclaw).blur(2.0),
            Text(slytherin),
        ],
    )
    .blur(2.0)
}

/// Font on the stack is overridden by the child's own font.
pub fn environment_font_view(_: &Scope<'_>) -> DisplayNode {
    let [gryffindor, hufflepuff, ravenclaw, slytherin] = HOUSES;
    VStack(
        VStackSpec::default(),
        [
            Text(gryffindor),
            Text(hufflepuff).font(Font::LargeTitle),
            Text(ravenclaw),
            Text(slytherin),
        ],
    )
    .font(Font::Title)
}

fn toggle_button(state: &ToggleState) -> DisplayNode {
    let state = state.clone();
    Button("Hello World", move || state.toggle())
}

/// Two whole buttons, only one of which is built per pass.
pub fn conditional_if_view(scope: &Scope<'_>) -> DisplayNode {
    let use_red_text = scope.use_toggle();
    Conditional::new(
        use_red_text,
        |state| toggle_button(state).foreground_color(Color::BLUE),
        |state| toggle_button(state).foreground_color(Color::RED),
    )
    .into()
}

/// One button whose color is picked from the state.
pub fn conditional_ternary_view(scope: &Scope<'_>) -> DisplayNode {
    let use_red_text = scope.use_toggle();
    toggle_button(&use_red_text).foreground_color(use_red_text.select(Color::RED, Color::BLUE))
}

pub fn tuple_view(_: &Scope<'_>) -> DisplayNode {
    TupleView([Text(HELLO), Text(HELLO), Text(HELLO), Text(HELLO)])
}

pub fn text_view(_: &Scope<'_>) -> DisplayNode {
    Text(HELLO)
}

/// Each padding/background pair wraps everything before it.
pub fn padding_background_view(_: &Scope<'_>) -> DisplayNode {
    [Color::RED, Color::BLUE, Color::GREEN, Color::YELLOW]
        .into_iter()
        .fold(Text(HELLO), |node, color| node.padding_default().background(color))
}

fn hello_button() -> DisplayNode {
    Button(HELLO, || log::info!("pressed {HELLO:?}"))
}

/// Background fills the whole 200x200 frame.
pub fn button_frame_background_view(_: &Scope<'_>) -> DisplayNode {
    hello_button().frame(200.0, 200.0).background(Color::RED)
}

/// Background only covers the label, centered in the frame.
pub fn button_background_frame_view(_: &Scope<'_>) -> DisplayNode {
    hello_button().background(Color::RED).frame(200.0, 200.0)
}

pub fn max_frame_view(_: &Scope<'_>) -> DisplayNode {
    Text(HELLO).fill_max_size().background(Color::RED)
}

pub const GRID_SIDE: usize = 4;

pub fn grid_cell_label(row: usize, column: usize) -> String {
    format!("R{row}C{column}")
}

pub fn grid_view(_: &Scope<'_>) -> DisplayNode {
    Grid(GridSpec::new(GRID_SIDE, GRID_SIDE, |row, column| {
        Text(grid_cell_label(row, column))
            .padding(4.0)
            .background(Color::GRAY)
    }))
}

#[cfg(test)]
#[path = "tests/views_tests.rs"]
mod tests;
