use super::*;
use crate::modifier::StyleOp;
use crate::widgets::{
    build_children, ChildFn, FilledShape, Grid, GridSpec, Group, HStack, HStackSpec, Image,
    Spacer, Text, VStack, VStackSpec,
};
use viewkit_graphics::{Color, EdgeInsets, Font, Rect, Shape, Size};

const UNBOUNDED: Size = Size {
    width: f32::INFINITY,
    height: f32::INFINITY,
};

// Glyphs are 5pt wide and lines 12.5pt high at this size.
const SMALL: Font = Font::Custom(10.0);

fn background_rect(tree: &LayoutTree) -> Rect {
    tree.root()
        .find(|candidate| matches!(candidate.content, BoxContent::Style(StyleOp::Background(_))))
        .expect("background box")
        .rect
}

#[test]
fn padding_then_background_differs_from_background_then_padding() {
    let padded_first = Text("abcd").font(SMALL).padding(5.0).background(Color::RED);
    let background_first = Text("abcd").font(SMALL).background(Color::RED).padding(5.0);

    let a = padded_first.compute_layout(UNBOUNDED);
    let b = background_first.compute_layout(UNBOUNDED);

    assert_eq!(background_rect(&a), Rect::new(0.0, 0.0, 30.0, 22.5));
    assert_eq!(background_rect(&b), Rect::new(5.0, 5.0, 20.0, 12.5));
    assert_eq!(a.root().rect.size(), b.root().rect.size());
}

#[test]
fn text_takes_font_metrics() {
    let tree = Text("abcd").font(SMALL).compute_layout(UNBOUNDED);
    let text = tree.find_text("abcd").expect("text box");
    assert_eq!(text.rect.size(), Size::new(20.0, 12.5));
    assert_eq!(
        text.content,
        BoxContent::Text {
            value: "abcd".into(),
            font: SMALL,
        }
    );
}

#[test]
fn vstack_sums_heights_with_spacing_and_centers_children() {
    let tree = VStack(
        VStackSpec::new().spacing(10.0),
        [Text("ab"), Text("abcd")],
    )
    .font(SMALL)
    .compute_layout(UNBOUNDED);
    assert_eq!(tree.root().rect.size(), Size::new(20.0, 35.0));
    assert_eq!(tree.find_text("ab").expect("ab").rect, Rect::new(5.0, 0.0, 10.0, 12.5));
    assert_eq!(
        tree.find_text("abcd").expect("abcd").rect,
        Rect::new(0.0, 22.5, 20.0, 12.5)
    );
}

#[test]
fn hstack_respects_vertical_alignment() {
    let tree = HStack(
        HStackSpec::new().spacing(0.0).alignment(VerticalAlignment::Bottom),
        [Text("a").font(Font::Custom(20.0)), Text("b")],
    )
    .font(SMALL)
    .compute_layout(UNBOUNDED);
    assert_eq!(tree.root().rect.size(), Size::new(15.0, 25.0));
    assert_eq!(tree.find_text("b").expect("b").rect, Rect::new(10.0, 12.5, 5.0, 12.5));
}

#[test]
fn inner_font_overrides_outer_font() {
    let tree = VStack(
        VStackSpec::default(),
        [Text("outer"), Text("inner").font(Font::Custom(20.0))],
    )
    .font(SMALL)
    .compute_layout(UNBOUNDED);
    assert_eq!(tree.find_text("outer").expect("outer").rect.height, 12.5);
    assert_eq!(tree.find_text("inner").expect("inner").rect.height, 25.0);
}

#[test]
fn fixed_frame_centers_child() {
    let tree = Text("ab").font(SMALL).frame(100.0, 50.0).compute_layout(UNBOUNDED);
    assert_eq!(tree.root().rect.size(), Size::new(100.0, 50.0));
    assert_eq!(
        tree.find_text("ab").expect("text").rect,
        Rect::new(45.0, 18.75, 10.0, 12.5)
    );
}

#[test]
fn max_frame_fills_viewport() {
    let tree = Text("ab")
        .font(SMALL)
        .fill_max_size()
        .compute_layout(Size::new(200.0, 100.0));
    assert_eq!(tree.root().rect, Rect::new(0.0, 0.0, 200.0, 100.0));
}

#[test]
fn finite_max_frame_caps_only_when_larger() {
    let narrow = Text("abcdefghij").font(SMALL).max_frame(Some(20.0), None);
    let tree = narrow.compute_layout(UNBOUNDED);
    assert_eq!(tree.root().rect.size(), Size::new(20.0, 12.5));

    let wide = Text("ab").font(SMALL).max_frame(Some(80.0), None);
    let tree = wide.compute_layout(UNBOUNDED);
    assert_eq!(tree.root().rect.size(), Size::new(10.0, 12.5));
}

#[test]
fn empty_grid_has_no_children() {
    let tree = Grid(GridSpec::new(0, 0, |_, _| Text("never"))).compute_layout(UNBOUNDED);
    let root = tree.root();
    assert_eq!(root.content, BoxContent::Grid { rows: 0, columns: 0 });
    assert!(root.children.is_empty());
    assert_eq!(root.rect.size(), Size::ZERO);
}

#[test]
fn grid_sizes_rows_and_columns_with_spacing() {
    let spec = GridSpec::new(2, 3, |row, column| Text(format!("{row}{column}"))).spacing(4.0);
    let tree = Grid(spec).font(SMALL).compute_layout(UNBOUNDED);
    let grid = tree.root().unwrap_styles();
    assert_eq!(grid.rect.size(), Size::new(38.0, 29.0));
    assert_eq!(grid.children.len(), 6);
    assert_eq!(
        tree.find_text("12").expect("cell").rect,
        Rect::new(28.0, 16.5, 10.0, 12.5)
    );
}

#[test]
fn several_root_views_form_an_implicit_stack() {
    let tree = Group([Text("a"), Text("b"), Text("c")]).compute_layout(UNBOUNDED);
    assert_eq!(tree.root().content, BoxContent::Group);
    assert_eq!(tree.root().children.len(), 3);
}

#[test]
fn modifier_on_group_applies_to_each_child() {
    let tree = VStack(
        VStackSpec::default(),
        [Group([Text("a"), Text("b")]).foreground_color(Color::RED)],
    )
    .compute_layout(UNBOUNDED);
    let stack = tree.root();
    assert_eq!(stack.children.len(), 2);
    for child in &stack.children {
        assert_eq!(child.content, BoxContent::Style(StyleOp::Foreground(Color::RED)));
    }
}

#[test]
fn shapes_fill_offered_space() {
    let bounded = FilledShape(Shape::Capsule, Color::RED).compute_layout(Size::new(100.0, 40.0));
    assert_eq!(bounded.root().rect.size(), Size::new(100.0, 40.0));

    let unbounded = FilledShape(Shape::Capsule, Color::RED).compute_layout(UNBOUNDED);
    assert_eq!(
        unbounded.root().rect.size(),
        Size::new(DEFAULT_SHAPE_EXTENT, DEFAULT_SHAPE_EXTENT)
    );
}

#[test]
fn root_is_centered_in_viewport() {
    let tree = Text("ab").font(SMALL).compute_layout(Size::new(100.0, 100.0));
    assert_eq!(tree.root().rect.origin(), Point::new(45.0, 43.75));
}

#[test]
fn padding_insets_offset_child() {
    let tree = Text("ab")
        .font(SMALL)
        .padding_insets(EdgeInsets::from_components(1.0, 2.0, 3.0, 4.0))
        .compute_layout(UNBOUNDED);
    assert_eq!(tree.root().rect.size(), Size::new(14.0, 18.5));
    assert_eq!(tree.find_text("ab").expect("text").rect.origin(), Point::new(1.0, 2.0));
}

#[test]
fn node_ids_follow_pre_order() {
    let tree = VStack(VStackSpec::default(), [Text("a"), Text("b").blur(1.0)])
        .compute_layout(UNBOUNDED);
    let ids: Vec<NodeId> = tree.root().descendants().iter().map(|node| node.node_id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
    assert_eq!(tree.find_text("b").expect("b").node_id, 3);
}

#[test]
fn frame_smaller_than_child_centers_the_overflow() {
    let tree = Text("abcdefghij")
        .font(SMALL)
        .frame(20.0, 10.0)
        .compute_layout(UNBOUNDED);
    assert_eq!(tree.root().rect, Rect::new(0.0, 0.0, 20.0, 10.0));
    assert_eq!(
        tree.find_text("abcdefghij").expect("text").rect,
        Rect::new(-15.0, -1.25, 50.0, 12.5)
    );
}

#[test]
fn space_between_spreads_children_over_offered_height() {
    let tree = VStack(
        VStackSpec::new().arrangement(LinearArrangement::SpaceBetween),
        [Text("a"), Text("b")],
    )
    .font(SMALL)
    .compute_layout(Size::new(50.0, 100.0));
    assert_eq!(tree.root().rect, Rect::new(22.5, 0.0, 5.0, 100.0));
    assert_eq!(tree.find_text("a").expect("a").rect.y, 0.0);
    assert_eq!(tree.find_text("b").expect("b").rect.y, 87.5);
}

#[test]
fn space_evenly_in_hstack_splits_free_width() {
    let tree = HStack(
        HStackSpec::new().arrangement(LinearArrangement::SpaceEvenly),
        [Text("a"), Text("b"), Text("c")],
    )
    .font(SMALL)
    .compute_layout(Size::new(40.0, 20.0));
    let xs: Vec<f32> = ["a", "b", "c"]
        .iter()
        .map(|value| tree.find_text(value).expect("text").rect.x)
        .collect();
    assert_eq!(xs, vec![6.25, 17.5, 28.75]);
}

#[test]
fn distributed_arrangement_hugs_content_when_unbounded() {
    let tree = VStack(
        VStackSpec::new().arrangement(LinearArrangement::Center),
        [Text("a"), Text("b")],
    )
    .font(SMALL)
    .compute_layout(UNBOUNDED);
    assert_eq!(tree.root().rect.size(), Size::new(5.0, 25.0));
}

#[test]
fn images_and_spacers_keep_their_sizes() {
    let tree = VStack(
        VStackSpec::new().spacing(0.0),
        [Image("logo", Size::new(30.0, 20.0)), Spacer(Size::new(0.0, 15.0))],
    )
    .compute_layout(UNBOUNDED);
    assert_eq!(tree.root().rect.size(), Size::new(30.0, 35.0));
    let spacer = tree
        .root()
        .find(|candidate| candidate.content == BoxContent::Spacer)
        .expect("spacer box");
    assert_eq!(spacer.rect, Rect::new(15.0, 20.0, 0.0, 15.0));
}

#[test]
fn child_producers_run_in_order() {
    let producers = vec![
        Box::new(|| Text("first")) as ChildFn,
        Box::new(|| Text("second")) as ChildFn,
    ];
    let tree = VStack(VStackSpec::default(), build_children(producers))
        .compute_layout(UNBOUNDED);
    let first = tree.find_text("first").expect("first").rect;
    let second = tree.find_text("second").expect("second").rect;
    assert!(first.y < second.y);
}
