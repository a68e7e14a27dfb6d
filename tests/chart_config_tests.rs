use animated_line_chart::ChartError;
use animated_line_chart::api::{
    AxisRangeOptions, ChartConfig, FixedContainer, LabelOptions, LineChartEngine,
    RemoveLabelOptions, RevealOptions, TickThinningBehavior,
};
use animated_line_chart::core::{BoxSize, DataRow, DataSet, Margin, SeriesDefinition};
use animated_line_chart::data::InMemoryDataLoader;
use animated_line_chart::render::{NullRenderer, TextAnchor};

fn series() -> Vec<SeriesDefinition> {
    vec![
        SeriesDefinition::new("USA", "USA", "#e41a1c"),
        SeriesDefinition::new("China", "China", "#377eb8"),
    ]
}

fn data() -> DataSet {
    let mut row = DataRow::new(2000);
    row.values.insert("USA".to_owned(), Some(20.0));
    DataSet::from_rows(vec![row])
}

fn container() -> FixedContainer {
    FixedContainer::new("chart", BoxSize::new(800.0, 400.0))
}

#[test]
fn json_round_trip_uses_camel_case_keys() {
    let config = ChartConfig::new("data/co2.csv", series())
        .with_margin(Margin::new(10.0, 20.0, 30.0, 40.0))
        .with_resize_debounce_ms(150.0)
        .with_tick_thinning(TickThinningBehavior {
            max_ticks: 5,
            narrow_width_px: 600.0,
            delay_ms: 250.0,
        });

    let json = config.to_json_pretty().expect("serialize config");
    assert!(json.contains("\"dataUrl\""));
    assert!(json.contains("\"xDomain\""));
    assert!(json.contains("\"resizeDebounceMs\""));
    assert!(json.contains("\"narrowWidthPx\""));
    assert!(json.contains("\"lineStrokeWidth\""));

    let restored = ChartConfig::from_json_str(&json).expect("parse config");
    assert_eq!(restored, config);
}

#[test]
fn omitted_fields_take_defaults() {
    let config = ChartConfig::from_json_str(
        r##"{"dataUrl":"co2.csv","series":[{"key":"USA","color":"#e41a1c"}]}"##,
    )
    .expect("parse config");

    assert_eq!(config.x_domain, (1990.0, 2024.0));
    assert_eq!(config.y_domain, (0.0, 50.0));
    assert_eq!(config.margin, Margin::new(30.0, 30.0, 30.0, 50.0));
    assert_eq!(config.resize_debounce_ms, 200.0);
    assert_eq!(config.tick_thinning, TickThinningBehavior::default());
    assert_eq!(config.tick_thinning.max_ticks, 7);
    assert_eq!(config.line_stroke_width, 2.0);
    assert_eq!(config.series[0].label, "");
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = ChartConfig::from_json_str("{\"series\": 3}").expect_err("bad json");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn call_options_parse_from_host_json() {
    let label: LabelOptions = serde_json::from_str(
        r#"{"data":{"year":2015,"value":7.5,"label":"Paris_Agreement"},
            "style":{"color":"red","textAnchor":"end","fadeIn":true,"durationMs":500}}"#,
    )
    .expect("label options");
    assert_eq!(label.point.year, Some(2015.0));
    assert_eq!(label.point.text, "Paris_Agreement");
    assert_eq!(label.style.text_anchor, TextAnchor::End);
    assert!(label.style.fade_in);
    assert_eq!(label.style.delay_ms, 0.0);
    assert_eq!(label.style.font_size_px, 12.0);

    let reveal: RevealOptions = serde_json::from_str(r#"{"delayMs":250}"#).expect("reveal");
    assert_eq!(reveal.duration_ms, 700.0);

    let removal: RemoveLabelOptions =
        serde_json::from_str(r#"{"fadeOut":true}"#).expect("remove options");
    assert!(removal.fade_out);
    assert_eq!(removal.duration_ms, 300.0);

    let ranges: AxisRangeOptions =
        serde_json::from_str(r#"{"xDomain":[2000,2010]}"#).expect("axis ranges");
    assert_eq!(ranges.x_domain, Some((2000.0, 2010.0)));
    assert_eq!(ranges.y_domain, None);
    assert_eq!(ranges.duration_ms, 1000.0);
}

#[test]
fn initialize_requires_a_data_url() {
    let config = ChartConfig::default().with_series(series());
    let loader = InMemoryDataLoader::new();
    let err = LineChartEngine::initialize(config, container(), &loader, NullRenderer::default())
        .err()
        .expect("missing data url");
    assert!(matches!(err, ChartError::Configuration(_)));
    assert!(err.to_string().contains("dataUrl"));
}

#[test]
fn series_must_be_present_and_unique() {
    let empty = ChartConfig::default();
    let err = LineChartEngine::from_data_set(empty, container(), data(), NullRenderer::default())
        .err()
        .expect("empty series");
    assert!(matches!(err, ChartError::Configuration(_)));

    let mut duplicated = series();
    duplicated.push(SeriesDefinition::new("USA", "again", "#000"));
    let err = LineChartEngine::from_data_set(
        ChartConfig::default().with_series(duplicated),
        container(),
        data(),
        NullRenderer::default(),
    )
    .err()
    .expect("duplicate key");
    assert!(err.to_string().contains("`USA`"));
}

#[test]
fn numeric_settings_are_validated() {
    let cases = [
        ChartConfig::default()
            .with_series(series())
            .with_y_domain((0.0, f64::NAN)),
        ChartConfig::default()
            .with_series(series())
            .with_margin(Margin::new(-1.0, 0.0, 0.0, 0.0)),
        ChartConfig::default()
            .with_series(series())
            .with_resize_debounce_ms(-5.0),
        ChartConfig::default()
            .with_series(series())
            .with_line_stroke_width(0.0),
    ];
    for config in cases {
        let err = LineChartEngine::from_data_set(config, container(), data(), NullRenderer::default())
            .err()
            .expect("invalid config");
        assert!(matches!(err, ChartError::InvalidData(_)), "{err}");
    }
}

#[test]
fn css_series_colors_are_checked_at_initialize() {
    let named = vec![
        SeriesDefinition::new("USA", "USA", "steelblue"),
        SeriesDefinition::new("China", "China", "rgb(228, 26, 28)"),
    ];
    LineChartEngine::from_data_set(
        ChartConfig::default().with_series(named),
        container(),
        data(),
        NullRenderer::default(),
    )
    .expect("named and functional colors are accepted");

    let err = LineChartEngine::from_data_set(
        ChartConfig::default().with_series(vec![SeriesDefinition::new("USA", "USA", "bluish")]),
        container(),
        data(),
        NullRenderer::default(),
    )
    .err()
    .expect("unknown color");
    assert!(matches!(err, ChartError::InvalidData(_)), "{err}");
    assert!(err.to_string().contains("`bluish`"));
}

#[test]
fn invalid_container_size_is_rejected() {
    let err = LineChartEngine::from_data_set(
        ChartConfig::default().with_series(series()),
        FixedContainer::new("chart", BoxSize::new(f64::NAN, 400.0)),
        data(),
        NullRenderer::default(),
    )
    .err()
    .expect("bad container");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn tiny_container_collapses_plot_to_zero() {
    let engine = LineChartEngine::from_data_set(
        ChartConfig::default().with_series(series()),
        FixedContainer::new("chart", BoxSize::new(40.0, 20.0)),
        data(),
        NullRenderer::default(),
    )
    .expect("engine init");
    assert_eq!(engine.scene().plot_size, BoxSize::new(0.0, 0.0));
    assert_eq!(engine.scene().clip.width, 0.0);
}
