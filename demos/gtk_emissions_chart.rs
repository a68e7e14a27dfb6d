#[cfg(feature = "gtk4-adapter")]
fn main() {
    use gtk4 as gtk;
    use gtk4::prelude::*;

    use animated_line_chart::api::{
        AxisRangeOptions, ChartConfig, LineChartEngine, ResizableContainer, RevealOptions,
    };
    use animated_line_chart::core::{BoxSize, SeriesDefinition};
    use animated_line_chart::data::FileDataLoader;
    use animated_line_chart::platform_gtk::GtkChartAdapter;
    use animated_line_chart::render::{CairoRenderer, Color};

    let _ = animated_line_chart::telemetry::init_default_tracing();
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: gtk_emissions_chart path/to/long.csv");
        return;
    };

    let app = gtk::Application::builder()
        .application_id("rs.chart.demos.emissions")
        .build();

    app.connect_activate(move |app| {
        let series = vec![
            SeriesDefinition::new("USA", "United_States", "#e41a1c"),
            SeriesDefinition::new("China", "China", "#377eb8"),
            SeriesDefinition::new("India", "India", "#4daf4a"),
        ];
        let container = ResizableContainer::new("emissions", BoxSize::new(1100.0, 640.0));
        let engine = CairoRenderer::new(1100, 640).and_then(|mut renderer| {
            renderer.set_clear_color(Color::from_rgb24(0xfafafa));
            LineChartEngine::initialize(
                ChartConfig::new(path.clone(), series.clone()),
                container.clone(),
                &FileDataLoader::new(),
                renderer,
            )
        });
        let mut engine = match engine {
            Ok(engine) => engine,
            Err(err) => {
                eprintln!("failed to initialize chart: {err}");
                return;
            }
        };
        for (index, definition) in series.iter().enumerate() {
            let delay = index as f64 * 500.0;
            if let Err(err) = engine.reveal(&definition.key, RevealOptions::default().with_delay_ms(delay)) {
                eprintln!("reveal failed: {err}");
            }
        }

        let adapter = GtkChartAdapter::new(engine, container);
        let zoomed = std::cell::Cell::new(false);
        let click = gtk::GestureClick::new();
        let shared = adapter.engine();
        click.connect_pressed(move |_, _, _, _| {
            let next = if zoomed.replace(!zoomed.get()) {
                AxisRangeOptions::x((1990.0, 2024.0))
            } else {
                AxisRangeOptions::x((2005.0, 2020.0))
            };
            if let Err(err) = shared.borrow_mut().set_axis_ranges(next) {
                eprintln!("rescale failed: {err}");
            }
        });
        adapter.drawing_area().add_controller(click);

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("animated-line-chart | emissions")
            .default_width(1100)
            .default_height(640)
            .build();
        window.set_child(Some(adapter.drawing_area()));
        window.present();
    });

    let _ = app.run_with_args::<&str>(&[]);
}

#[cfg(not(feature = "gtk4-adapter"))]
fn main() {
    println!("run with: cargo run --features desktop --example gtk_emissions_chart -- data.csv");
}
