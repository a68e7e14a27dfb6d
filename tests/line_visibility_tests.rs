use std::cell::RefCell;
use std::rc::Rc;

use animated_line_chart::api::{
    AxisRangeOptions, ChartConfig, ConcealOutcome, FixedContainer, LineChartEngine, LineState,
    RegisterPluginOutcome, RevealOptions, RevealOutcome,
};
use animated_line_chart::core::{BoxSize, PathCommand, SeriesDefinition};
use animated_line_chart::data::InMemoryDataLoader;
use animated_line_chart::extensions::{ChartPlugin, PluginContext, PluginEvent};
use animated_line_chart::render::NullRenderer;
use approx::assert_relative_eq;

const DATA_URL: &str = "data/emissions.csv";

fn fixture_csv() -> String {
    let mut csv = String::from("key,year,value\n");
    for year in 2000..=2023 {
        let offset = f64::from(year - 2000);
        csv.push_str(&format!("USA,{year},{}\n", 10.0 + offset * 0.5));
        if year > 2005 {
            csv.push_str(&format!("China,{year},{}\n", 2.0 + offset * 1.2));
        }
    }
    csv
}

fn build_engine() -> LineChartEngine<NullRenderer> {
    let config = ChartConfig::new(
        DATA_URL,
        vec![
            SeriesDefinition::new("USA", "United_States", "#e41a1c"),
            SeriesDefinition::new("China", "China", "#377eb8"),
        ],
    )
    .with_x_domain((2000.0, 2023.0));
    let loader = InMemoryDataLoader::new().with_resource(DATA_URL, fixture_csv());
    LineChartEngine::initialize(
        config,
        FixedContainer::new("chart", BoxSize::new(800.0, 400.0)),
        &loader,
        NullRenderer::default(),
    )
    .expect("engine init")
}

struct RevealCounter {
    revealed: Rc<RefCell<Vec<String>>>,
}

impl ChartPlugin for RevealCounter {
    fn id(&self) -> &str {
        "reveal-counter"
    }

    fn on_event(&mut self, event: &PluginEvent, _context: PluginContext) {
        if let PluginEvent::LineRevealed { key } = event {
            self.revealed.borrow_mut().push(key.clone());
        }
    }
}

#[test]
fn lines_start_concealed_at_full_length() {
    let engine = build_engine();
    for key in ["USA", "China"] {
        let line = engine.scene().line(key).expect("line present");
        assert!(line.total_length > 0.0);
        assert!(line.is_fully_masked());
        assert_eq!(engine.line_state(key), LineState::Concealed);
    }
    assert!(engine.revealed_keys().is_empty());
}

#[test]
fn reveal_sweeps_linearly_then_unmasks() {
    let mut engine = build_engine();
    let outcome = engine
        .reveal("USA", RevealOptions::default())
        .expect("reveal");
    assert_eq!(outcome, RevealOutcome::Started);
    assert_eq!(engine.line_state("USA"), LineState::Revealing);

    engine.advance_to(350.0).expect("advance");
    let line = engine.scene().line("USA").expect("line");
    assert_relative_eq!(line.visible_length(), line.total_length / 2.0, epsilon = 1e-9);

    engine.advance_to(700.0).expect("advance");
    let line = engine.scene().line("USA").expect("line");
    assert_eq!(line.dash, None);
    assert_eq!(engine.revealed_keys(), vec!["USA".to_owned()]);
}

#[test]
fn delayed_reveal_stays_hidden_until_delay_elapses() {
    let mut engine = build_engine();
    engine
        .reveal("China", RevealOptions::default().with_delay_ms(500.0))
        .expect("reveal");

    engine.advance_to(400.0).expect("advance");
    assert!(engine.scene().line("China").expect("line").is_fully_masked());

    engine.advance_to(1_200.0).expect("advance");
    assert!(engine.is_revealed("China"));
}

#[test]
fn reentrant_reveal_is_ignored() {
    let mut engine = build_engine();
    let revealed = Rc::new(RefCell::new(Vec::new()));
    assert_eq!(
        engine.register_plugin(Box::new(RevealCounter {
            revealed: Rc::clone(&revealed),
        })),
        RegisterPluginOutcome::Registered
    );

    let options = RevealOptions::default().with_duration_ms(700.0);
    assert_eq!(
        engine.reveal("USA", options).expect("first reveal"),
        RevealOutcome::Started
    );
    engine.advance_to(100.0).expect("advance");
    assert_eq!(
        engine.reveal("USA", options).expect("second reveal"),
        RevealOutcome::AlreadyRevealing
    );

    engine.advance_to(699.0).expect("advance");
    assert_eq!(engine.line_state("USA"), LineState::Revealing);
    engine.advance_to(700.0).expect("advance");
    engine.advance_to(2_000.0).expect("advance");

    assert_eq!(revealed.borrow().as_slice(), &["USA".to_owned()]);
    assert_eq!(
        engine.reveal("USA", options).expect("third reveal"),
        RevealOutcome::AlreadyRevealed
    );
}

#[test]
fn reveal_then_conceal_leaves_key_unrevealed() {
    let mut engine = build_engine();
    engine
        .reveal("USA", RevealOptions::default())
        .expect("reveal");
    engine.advance_to(200.0).expect("advance");
    assert_eq!(engine.conceal("USA"), ConcealOutcome::Concealed);

    engine.advance_to(5_000.0).expect("advance");
    assert!(!engine.is_revealed("USA"));
    assert!(engine.scene().line("USA").expect("line").is_fully_masked());

    let mut finished = build_engine();
    finished
        .reveal("USA", RevealOptions::default())
        .expect("reveal");
    finished.advance_to(700.0).expect("advance");
    finished.conceal("USA");
    assert!(finished.revealed_keys().is_empty());
}

#[test]
fn unknown_key_is_reported_not_fatal() {
    let mut engine = build_engine();
    assert_eq!(
        engine
            .reveal("Atlantis", RevealOptions::default())
            .expect("reveal"),
        RevealOutcome::NotFound
    );
    assert_eq!(engine.conceal("Atlantis"), ConcealOutcome::NotFound);
}

#[test]
fn negative_duration_is_rejected() {
    let mut engine = build_engine();
    let err = engine
        .reveal("USA", RevealOptions::default().with_duration_ms(-1.0))
        .expect_err("negative duration");
    assert!(err.to_string().contains("reveal duration"));
}

#[test]
fn conceal_all_is_idempotent() {
    let mut engine = build_engine();
    engine
        .reveal("USA", RevealOptions::default())
        .expect("reveal");
    engine.advance_to(700.0).expect("advance");
    engine
        .reveal("China", RevealOptions::default())
        .expect("reveal");
    engine.advance_to(900.0).expect("advance");

    engine.conceal_all();
    let once = engine.scene().clone();
    engine.conceal_all();
    assert_eq!(engine.scene(), &once);
    assert!(engine.revealed_keys().is_empty());
    assert_eq!(engine.line_state("China"), LineState::Concealed);
}

#[test]
fn absent_years_break_the_line() {
    let engine = build_engine();
    let x_2000 = engine.x_scale().project(2000.0);
    let x_2006 = engine.x_scale().project(2006.0);

    let usa = engine.scene().line("USA").expect("usa");
    let china = engine.scene().line("China").expect("china");
    assert_eq!(usa.path.subpath_count(), 1);
    assert_eq!(china.path.subpath_count(), 1);

    let PathCommand::MoveTo(usa_start) = usa.path.commands()[0] else {
        panic!("path must start with a move");
    };
    let PathCommand::MoveTo(china_start) = china.path.commands()[0] else {
        panic!("path must start with a move");
    };
    assert_relative_eq!(usa_start.x, x_2000, epsilon = 1e-9);
    assert_relative_eq!(china_start.x, x_2006, epsilon = 1e-9);
}

#[test]
fn conceal_during_rescale_snaps_to_target_and_stays_hidden() {
    let mut engine = build_engine();
    engine
        .reveal("USA", RevealOptions::default())
        .expect("reveal");
    engine.advance_to(700.0).expect("advance");

    engine
        .set_axis_ranges(AxisRangeOptions::x((2010.0, 2020.0)))
        .expect("rescale");
    engine.advance_to(1_200.0).expect("advance");
    engine.conceal("USA");
    let concealed = engine.scene().line("USA").expect("line").clone();
    assert!(concealed.is_fully_masked());

    engine.advance_to(1_700.0).expect("advance");
    let settled = engine.scene().line("USA").expect("line");
    assert_eq!(settled.path, concealed.path);
    assert!(settled.is_fully_masked());
}

#[test]
fn in_flight_reveal_keeps_progress_across_rebuild() {
    let mut engine = build_engine();
    engine
        .reveal("USA", RevealOptions::default().with_duration_ms(1_000.0))
        .expect("reveal");
    engine.advance_to(250.0).expect("advance");
    engine.redraw().expect("redraw");

    let line = engine.scene().line("USA").expect("line");
    assert_relative_eq!(line.visible_length(), line.total_length * 0.25, epsilon = 1e-9);
    assert_eq!(engine.line_state("USA"), LineState::Revealing);

    engine.advance_to(1_000.0).expect("advance");
    assert!(engine.is_revealed("USA"));
}
