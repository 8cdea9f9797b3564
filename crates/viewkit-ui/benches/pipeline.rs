use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use viewkit_ui::{
    CapsuleStyle, Color, DisplayNode, Grid, GridSpec, HeadlessRenderer, LayoutEngine, Size, Text,
    VStack, VStackSpec,
};

const GRID_SIDES: &[usize] = &[4, 16, 32, 64];
const ROOT_SIZE: Size = Size {
    width: 1080.0,
    height: 1920.0,
};

fn pipeline_content(side: usize) -> DisplayNode {
    VStack(
        VStackSpec::new().spacing(10.0),
        vec![
            Text("Header").modifier(CapsuleStyle::new(Color::BLUE)),
            Grid(
                GridSpec::new(side, side, |row, column| {
                    Text(format!("{row}:{column}"))
                        .padding(2.0)
                        .background(Color::GRAY)
                })
                .spacing(4.0),
            ),
        ],
    )
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &side in GRID_SIDES {
        let content = pipeline_content(side);
        group.bench_with_input(BenchmarkId::from_parameter(side), &content, |b, content| {
            b.iter(|| black_box(content.compute_layout(ROOT_SIZE)));
        });
    }
    group.finish();
}

fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_layout_render");
    for &side in GRID_SIDES {
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            let mut renderer = HeadlessRenderer::new();
            b.iter(|| {
                let tree = pipeline_content(side).compute_layout(ROOT_SIZE);
                black_box(renderer.render(&tree))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_full_pass);
criterion_main!(benches);
