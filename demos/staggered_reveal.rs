use animated_line_chart::api::{
    AxisRangeOptions, ChartConfig, FixedContainer, LabelOptions, LabelPoint, LabelStyle,
    LineChartEngine, RemoveLabelOptions, RevealOptions,
};
use animated_line_chart::core::{BoxSize, SeriesDefinition};
use animated_line_chart::data::{DataLoader, FileDataLoader, InMemoryDataLoader};
use animated_line_chart::render::SvgRenderer;
use animated_line_chart::telemetry;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn synthetic_csv(series: &[SeriesDefinition]) -> String {
    let mut csv = String::from("key,year,value\n");
    for (index, definition) in series.iter().enumerate() {
        let phase = index as f64 * 0.7;
        for year in 1990..=2024 {
            let t = f64::from(year - 1990);
            let value = 8.0 + index as f64 * 6.0 + (t / 5.0 + phase).sin() * 3.0 + t * 0.15;
            csv.push_str(&format!("{},{year},{value:.2}\n", definition.key));
        }
    }
    csv
}

fn run_until(
    engine: &mut LineChartEngine<SvgRenderer>,
    now: &mut f64,
    until: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    while *now < until {
        *now = (*now + FRAME_MS).min(until);
        engine.advance_to(*now)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = telemetry::init_default_tracing();

    let series = vec![
        SeriesDefinition::new("USA", "United_States", "#e41a1c"),
        SeriesDefinition::new("China", "China", "#377eb8"),
        SeriesDefinition::new("India", "India", "#4daf4a"),
        SeriesDefinition::new("EU", "European_Union", "#984ea3"),
    ];

    // `staggered_reveal path/to/long.csv` loads a real file; otherwise data is generated.
    let (url, loader): (String, Box<dyn DataLoader>) = match std::env::args().nth(1) {
        Some(path) => (path, Box::new(FileDataLoader::new())),
        None => (
            "memory://emissions.csv".to_owned(),
            Box::new(
                InMemoryDataLoader::new()
                    .with_resource("memory://emissions.csv", synthetic_csv(&series)),
            ),
        ),
    };

    let config = ChartConfig::new(url, series.clone());
    let mut engine = LineChartEngine::initialize(
        config,
        FixedContainer::new("emissions", BoxSize::new(960.0, 540.0)),
        loader.as_ref(),
        SvgRenderer::new(),
    )?;

    let mut now = 0.0;
    engine.conceal_all();
    for (index, definition) in series.iter().enumerate() {
        engine.reveal(
            &definition.key,
            RevealOptions::default().with_delay_ms(index as f64 * 400.0),
        )?;
    }
    run_until(&mut engine, &mut now, 400.0 * series.len() as f64 + 700.0)?;
    println!("revealed: {:?}", engine.revealed_keys());

    engine.add_label(
        "paris",
        LabelOptions::new(LabelPoint::new(2015.0, 30.0, "Paris_Agreement"))
            .with_style(LabelStyle::default().with_fade_in(0.0, 300.0)),
    )?;
    engine.set_axis_ranges(AxisRangeOptions::x((2005.0, 2020.0)).with_y_domain((0.0, 35.0)))?;
    let until = now + 1_000.0;
    run_until(&mut engine, &mut now, until)?;
    engine.render()?;
    println!(
        "zoomed to {:?} x {:?}: {} x ticks",
        engine.x_domain(),
        engine.y_domain(),
        engine.scene().x_axis.ticks.len()
    );

    engine.conceal("China");
    engine.remove_label("paris", RemoveLabelOptions::fade_out(0.0, 300.0))?;
    engine.set_axis_ranges(AxisRangeOptions::x((1990.0, 2024.0)).with_y_domain((0.0, 50.0)))?;
    let until = now + 1_000.0;
    run_until(&mut engine, &mut now, until)?;
    engine.render()?;

    engine.shutdown();
    let rebuilds = engine.rebuild_count();
    let renderer = engine.into_renderer();

    let output = std::env::temp_dir().join("staggered_reveal.svg");
    std::fs::write(&output, renderer.document())?;
    println!(
        "wrote {} ({} renders, {rebuilds} rebuilds)",
        output.display(),
        renderer.render_count(),
    );
    Ok(())
}
