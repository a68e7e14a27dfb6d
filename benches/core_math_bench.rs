use animated_line_chart::api::{
    AxisRangeOptions, ChartConfig, FixedContainer, LineChartEngine, RevealOptions,
};
use animated_line_chart::core::{
    BoxSize, DataRow, DataSet, LinePath, LinearScale, Point, SeriesDefinition, ticks,
};
use animated_line_chart::render::{NullRenderer, scene_to_svg};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((1990.0, 2024.0), (0.0, 1_840.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.project(black_box(2_007.25));
            let _ = scale.invert(px);
        })
    });
}

fn bench_nice_ticks(c: &mut Criterion) {
    c.bench_function("nice_ticks_year_domain", |b| {
        b.iter(|| ticks(black_box(1990.0), black_box(2024.0), black_box(10)))
    });
}

fn bench_monotone_path_10k(c: &mut Criterion) {
    let samples: Vec<Option<Point>> = (0..10_000)
        .map(|i| {
            let x = i as f64 * 0.2;
            (i % 997 != 0).then(|| Point::new(x, 300.0 + (x / 40.0).sin() * 120.0))
        })
        .collect();

    c.bench_function("monotone_path_10k", |b| {
        b.iter(|| {
            let path = LinePath::monotone_x(black_box(samples.iter().copied()));
            black_box(path.total_length())
        })
    });
}

fn engine_with_series(count: usize) -> LineChartEngine<NullRenderer> {
    let series: Vec<SeriesDefinition> = (0..count)
        .map(|i| SeriesDefinition::new(format!("s{i}"), format!("Series_{i}"), "#377eb8"))
        .collect();
    let rows = (1990..=2024)
        .map(|year| {
            let mut row = DataRow::new(year);
            for (i, definition) in series.iter().enumerate() {
                let t = f64::from(year - 1990);
                row.values
                    .insert(definition.key.clone(), Some(10.0 + i as f64 + (t / 4.0).cos() * 5.0));
            }
            row
        })
        .collect();
    let config = ChartConfig::default().with_series(series);
    LineChartEngine::from_data_set(
        config,
        FixedContainer::new("bench", BoxSize::new(1_600.0, 900.0)),
        DataSet::from_rows(rows),
        NullRenderer::default(),
    )
    .expect("engine init")
}

fn bench_rebuild_40_series(c: &mut Criterion) {
    let mut engine = engine_with_series(40);
    c.bench_function("rebuild_40_series", |b| {
        b.iter(|| engine.redraw().expect("rebuild should succeed"))
    });
}

fn bench_domain_transition_frames(c: &mut Criterion) {
    let mut engine = engine_with_series(20);
    for i in 0..20 {
        engine
            .reveal(&format!("s{i}"), RevealOptions::default().with_duration_ms(0.0))
            .expect("reveal");
    }
    let mut now = 0.0;
    engine.advance_to(now).expect("advance");

    c.bench_function("domain_transition_60_frames", |b| {
        b.iter(|| {
            engine
                .set_axis_ranges(AxisRangeOptions::x((2000.0, 2020.0)))
                .expect("rescale");
            for _ in 0..60 {
                now += 1000.0 / 60.0;
                engine.advance_to(now).expect("advance");
            }
        })
    });
}

fn bench_scene_to_svg(c: &mut Criterion) {
    let engine = engine_with_series(40);
    c.bench_function("scene_to_svg_40_series", |b| {
        b.iter(|| scene_to_svg(black_box(engine.scene())))
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_nice_ticks,
    bench_monotone_path_10k,
    bench_rebuild_40_series,
    bench_domain_transition_frames,
    bench_scene_to_svg
);
criterion_main!(benches);
