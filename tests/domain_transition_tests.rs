use animated_line_chart::api::{
    AxisRangeOptions, ChartConfig, FixedContainer, LabelOptions, LabelPoint, LineChartEngine,
    RevealOptions,
};
use animated_line_chart::core::{BoxSize, DataRow, DataSet, SeriesDefinition};
use animated_line_chart::render::NullRenderer;
use approx::assert_relative_eq;

fn build_engine() -> LineChartEngine<NullRenderer> {
    let rows = (1990..=2024)
        .map(|year| {
            let mut row = DataRow::new(year);
            let offset = f64::from(year - 1990);
            row.values.insert("USA".to_owned(), Some(20.0 - offset * 0.2));
            row.values.insert("Japan".to_owned(), Some(8.0 + offset * 0.1));
            row
        })
        .collect();
    let config = ChartConfig::default().with_series(vec![
        SeriesDefinition::new("USA", "USA", "#e41a1c"),
        SeriesDefinition::new("Japan", "Japan", "#4daf4a"),
    ]);
    LineChartEngine::from_data_set(
        config,
        FixedContainer::new("chart", BoxSize::new(900.0, 500.0)),
        DataSet::from_rows(rows),
        NullRenderer::default(),
    )
    .expect("engine init")
}

#[test]
fn rescale_keeps_concealed_lines_hidden_every_frame() {
    let mut engine = build_engine();
    engine
        .reveal("USA", RevealOptions::default())
        .expect("reveal");
    engine.advance_to(700.0).expect("advance");

    let before = engine.scene().line("Japan").expect("line").total_length;
    engine
        .set_axis_ranges(AxisRangeOptions::x((2010.0, 2020.0)))
        .expect("rescale");

    let japan = engine.scene().line("Japan").expect("line");
    assert!(japan.is_fully_masked());
    assert!((japan.total_length - before).abs() > 1e-6);

    for step in 1..=10 {
        engine
            .advance_to(700.0 + f64::from(step) * 100.0)
            .expect("advance");
        assert!(engine.scene().line("Japan").expect("line").is_fully_masked());
        assert_eq!(engine.scene().line("USA").expect("line").dash, None);
    }
    assert!(!engine.is_domain_transition_active());
    assert_eq!(engine.x_domain(), (2010.0, 2020.0));
    assert_eq!(engine.config().x_domain, (2010.0, 2020.0));
}

#[test]
fn revealed_line_morphs_to_new_geometry() {
    let mut engine = build_engine();
    engine
        .reveal("USA", RevealOptions::default().with_duration_ms(0.0))
        .expect("reveal");
    engine.advance_to(0.0).expect("advance");
    let start = engine.scene().line("USA").expect("line").path.clone();

    engine
        .set_axis_ranges(AxisRangeOptions::y((0.0, 25.0)).with_duration_ms(1_000.0))
        .expect("rescale");
    engine.advance_to(500.0).expect("advance");
    let middle = engine.scene().line("USA").expect("line").path.clone();
    engine.advance_to(1_000.0).expect("advance");
    let end = engine.scene().line("USA").expect("line").path.clone();

    assert_ne!(start, middle);
    assert_ne!(middle, end);
    assert!(start.is_compatible_with(&end));
}

#[test]
fn axis_ticks_enter_and_exit() {
    let mut engine = build_engine();
    let initial: Vec<f64> = engine.scene().x_axis.ticks.iter().map(|t| t.value).collect();
    assert_eq!(initial.first(), Some(&1990.0));

    engine
        .set_axis_ranges(AxisRangeOptions::x((2010.0, 2020.0)))
        .expect("rescale");
    let entering = engine.scene().x_axis.tick(2011.0).expect("entering tick");
    assert_eq!(entering.opacity, 0.0);
    assert!(engine.scene().x_axis.tick(1990.0).is_some());

    engine.advance_to(500.0).expect("advance");
    let leaving = engine.scene().x_axis.tick(1990.0).expect("exiting tick");
    assert!(leaving.opacity > 0.0 && leaving.opacity < 1.0);

    engine.advance_to(1_000.0).expect("advance");
    let settled: Vec<f64> = engine.scene().x_axis.ticks.iter().map(|t| t.value).collect();
    assert_eq!(settled.len(), 11);
    assert_eq!(settled.first(), Some(&2010.0));
    assert_eq!(settled.last(), Some(&2020.0));
    assert!(engine.scene().x_axis.ticks.iter().all(|t| t.opacity == 1.0));
    assert_eq!(engine.scene().x_grid.ticks.len(), 11);
}

#[test]
fn labels_follow_the_new_scale() {
    let mut engine = build_engine();
    engine
        .add_label("mark", LabelOptions::new(LabelPoint::new(2015.0, 10.0, "Mark")))
        .expect("add label");
    engine
        .set_axis_ranges(AxisRangeOptions::x((2010.0, 2020.0)).with_y_domain((0.0, 20.0)))
        .expect("rescale");
    engine.advance_to(1_000.0).expect("advance");

    let node = engine.scene().label("mark").expect("label");
    assert_relative_eq!(node.x, engine.x_scale().project(2015.0), epsilon = 1e-9);
    assert_relative_eq!(node.y, engine.y_scale().project(10.0), epsilon = 1e-9);
}

#[test]
fn zero_duration_rescale_settles_immediately() {
    let mut engine = build_engine();
    engine
        .set_axis_ranges(AxisRangeOptions::x((2000.0, 2010.0)).with_duration_ms(0.0))
        .expect("rescale");
    assert!(!engine.is_domain_transition_active());
    assert_eq!(
        engine.scene().x_axis.ticks.first().map(|tick| tick.value),
        Some(2000.0)
    );
}

#[test]
fn rebuild_settles_running_rescale() {
    let mut engine = build_engine();
    engine
        .set_axis_ranges(AxisRangeOptions::x((2010.0, 2020.0)))
        .expect("rescale");
    engine.advance_to(300.0).expect("advance");
    engine.redraw().expect("redraw");

    assert!(!engine.is_domain_transition_active());
    assert_eq!(engine.scene().x_axis.ticks.len(), 11);
    assert!(engine.scene().line("USA").expect("line").is_fully_masked());
}

#[test]
fn non_finite_domain_is_rejected() {
    let mut engine = build_engine();
    let err = engine
        .set_axis_ranges(AxisRangeOptions::y((0.0, f64::INFINITY)))
        .expect_err("infinite domain");
    assert!(err.to_string().contains("y domain"));
    assert_eq!(engine.y_domain(), (0.0, 50.0));
}
