//! Grid-template compilation benchmarks.

use criterion::{criterion_group, criterion_main, Criterion, black_box};
use trellis_core::Axis;
use trellis_grid::{GridPanel, SplitterHandle, TrackDefinition};

fn panel(track_count: usize) -> GridPanel {
    let mut grid = GridPanel::new();
    for i in 0..track_count {
        let definition = match i % 3 {
            0 => TrackDefinition::new("auto"),
            1 => TrackDefinition::new("120").with_min_size(40.0).with_max_size(400.0),
            _ => TrackDefinition::new("0.2*").with_name(format!("col{i}")),
        };
        grid.add_column(definition);
    }
    grid
}

fn compile_columns(c: &mut Criterion) {
    let grid = panel(32);
    c.bench_function("compile_columns", |b| {
        b.iter(|| black_box(&grid).grid_template_columns_css())
    });
}

fn compile_columns_with_splitters(c: &mut Criterion) {
    let mut grid = panel(32);
    grid.add_splitter(SplitterHandle::new(Axis::Column, Some("col2")));
    grid.add_splitter(SplitterHandle::new(Axis::Column, Some("16")));
    c.bench_function("compile_columns_with_splitters", |b| {
        b.iter(|| black_box(&grid).grid_template_columns_css())
    });
}

fn ingest_resize(c: &mut Criterion) {
    let mut grid = panel(8);
    let template = "120px 1fr 80px 1fr 120px 1fr 80px 1fr";
    c.bench_function("ingest_resize", |b| {
        b.iter(|| grid.splitter_resized(Axis::Column, black_box(template)))
    });
}

criterion_group!(benches, compile_columns, compile_columns_with_splitters, ingest_resize);
criterion_main!(benches);
