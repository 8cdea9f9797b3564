use super::*;
use std::cell::Cell;
use std::rc::Rc;

fn cell_label(row: usize, column: usize) -> DisplayNode {
    Text(format!("({row},{column})"))
}

#[test]
fn four_by_four_grid_is_row_major() {
    let spec = GridSpec::new(4, 4, cell_label);
    let labels: Vec<String> = spec.cells().flat_map(|cell| cell.text_values()).collect();
    let expected: Vec<String> = (0..4)
        .flat_map(|row| (0..4).map(move |column| format!("({row},{column})")))
        .collect();
    assert_eq!(spec.cell_count(), 16);
    assert_eq!(labels, expected);
    assert_eq!(labels[4], "(1,0)");
}

#[test]
fn zero_sized_grids_are_empty() {
    for (rows, columns) in [(0, 0), (0, 3), (3, 0)] {
        let spec = GridSpec::new(rows, columns, cell_label);
        assert!(spec.is_empty());
        assert_eq!(spec.cells().count(), 0);
    }
}

#[test]
fn negative_dimensions_degrade_to_empty() {
    let spec = GridSpec::from_signed(-2, 5, cell_label);
    assert_eq!(spec.rows(), 0);
    assert_eq!(spec.columns(), 5);
    assert!(spec.is_empty());
    let (tree, scene) = render_scene(&Grid(spec), Size::new(100.0, 100.0));
    assert!(tree.root().children.is_empty());
    assert!(scene.operations().is_empty());
}

#[test]
fn huge_row_count_without_columns_finishes_immediately() {
    let node = Grid(GridSpec::from_signed(i64::MAX, 0, cell_label));
    let started = std::time::Instant::now();
    assert!(node.text_values().is_empty());
    match &node {
        DisplayNode::Grid(spec) => assert_eq!(spec.cells().count(), 0),
        other => panic!("unexpected node {other:?}"),
    }
    assert!(started.elapsed() < std::time::Duration::from_secs(1));
}

#[test]
fn grid_cells_are_built_lazily_once_per_layout() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let node = Grid(GridSpec::new(2, 2, move |row, column| {
        counter.set(counter.get() + 1);
        cell_label(row, column)
    }));
    assert_eq!(calls.get(), 0);
    node.compute_layout(Size::new(300.0, 300.0));
    assert_eq!(calls.get(), 4);
}

#[test]
fn conditional_follows_toggle_parity() {
    let state = ToggleState::detached(false);
    let conditional = Conditional::new(state.clone(), |_| Text("A"), |_| Text("B"));
    assert_eq!(conditional.render(), Text("A"));
    state.toggle();
    assert_eq!(conditional.render(), Text("B"));
    state.toggle();
    assert_eq!(conditional.render(), Text("A"));
    for _ in 0..6 {
        state.toggle();
    }
    assert_eq!(conditional.render(), Text("A"));
}

#[test]
fn conditional_evaluates_only_active_branch() {
    let off_calls = Rc::new(Cell::new(0));
    let on_calls = Rc::new(Cell::new(0));
    let state = ToggleState::detached(false);
    let conditional = {
        let off_calls = Rc::clone(&off_calls);
        let on_calls = Rc::clone(&on_calls);
        Conditional::new(
            state.clone(),
            move |_| {
                off_calls.set(off_calls.get() + 1);
                Button("Hello World", || {}).foreground_color(Color::BLUE)
            },
            move |_| {
                on_calls.set(on_calls.get() + 1);
                Button("Hello World", || {}).foreground_color(Color::RED)
            },
        )
    };
    let off = conditional.render();
    assert_eq!((off_calls.get(), on_calls.get()), (1, 0));
    assert_eq!(off.style_ops(), vec![StyleOp::Foreground(Color::BLUE)]);

    state.toggle();
    let on = conditional.render();
    assert_eq!((off_calls.get(), on_calls.get()), (1, 1));
    assert_eq!(on.style_ops(), vec![StyleOp::Foreground(Color::RED)]);
}

#[test]
fn branch_button_toggles_its_own_state() {
    let state = ToggleState::detached(false);
    let conditional = Conditional::new(
        state.clone(),
        |toggle| {
            let toggle = toggle.clone();
            Button("Hello World", move || toggle.toggle())
        },
        |toggle| {
            let toggle = toggle.clone();
            Button("Hello World", move || toggle.toggle())
        },
    );
    let (_, scene) = render_scene(&conditional.render(), Size::new(200.0, 100.0));
    scene.button("Hello World").expect("button").dispatch();
    assert!(state.is_on());
}

#[test]
fn if_evaluates_one_branch() {
    let evaluated = Cell::new(false);
    let node = If(
        true,
        || Text("then"),
        || {
            evaluated.set(true);
            Text("otherwise")
        },
    );
    assert_eq!(node, Text("then"));
    assert!(!evaluated.get());
}

#[test]
fn builders_accept_closures_nodes_and_content() {
    let producers: Vec<ChildFn> = vec![
        Box::new(|| Text("Draco dormiens").foreground_color(Color::RED)),
        Box::new(|| Text("nunquam titillandus").foreground_color(Color::BLUE)),
    ];
    let from_closures = VStack(VStackSpec::default(), producers);
    let from_nodes = VStack(
        VStackSpec::default(),
        vec![
            Text("Draco dormiens").foreground_color(Color::RED),
            Text("nunquam titillandus").foreground_color(Color::BLUE),
        ],
    );
    assert_eq!(from_closures, from_nodes);

    let show_second = false;
    let content = Content(|children| {
        children
            .add(Text("first"))
            .add_if(show_second, || Text("second"));
    });
    assert_eq!(content.len(), 1);
    assert_eq!(HStack(HStackSpec::default(), content).text_values(), vec!["first"]);
}

#[test]
fn for_each_builds_in_order() {
    let rows = ForEach(1..=3, |index| Text(format!("Row {index}")));
    assert_eq!(
        Group(rows).text_values(),
        vec!["Row 1", "Row 2", "Row 3"]
    );
}

#[test]
fn tuple_view_flattens_like_group() {
    let tuple = TupleView([Text("a"), Text("b")]);
    assert_eq!(tuple.flatten().len(), 2);
    let nested = Group([Group([Text("a")]).blur(1.0), Text("b")]).foreground_color(Color::RED);
    let flat = nested.flatten();
    assert_eq!(flat.len(), 2);
    assert_eq!(
        flat[0].style_ops(),
        vec![StyleOp::Foreground(Color::RED), StyleOp::Blur(1.0)]
    );
    assert!(DisplayNode::Empty.flatten().is_empty());
}

#[test]
fn render_scene_returns_matching_tree_and_ops() {
    let (tree, scene) = render_scene(
        &VStack(VStackSpec::new().spacing(10.0), [Text("First"), Text("Second")]),
        Size::new(320.0, 480.0),
    );
    assert_eq!(tree.node_count(), 3);
    assert_eq!(scene.texts().count(), 2);
    let first = tree.find_text("First").expect("first");
    assert_eq!(scene.find_text("First").expect("op").rect(), first.rect);
}
