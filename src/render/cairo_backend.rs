use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::PathCommand;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    AxisNode, AxisOrientation, Color, LabelNode, LineNode, Renderer, Scene, TextAnchor,
};

const GRID_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.12);
const AXIS_FONT_SIZE_PX: f64 = 10.0;
const LABEL_LINE_HEIGHT_EM: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub ticks_drawn: usize,
    pub labels_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` draw function).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, scene: &Scene) -> ChartResult<()>;
}

/// Cairo + Pango renderer.
///
/// Dash arrays and offsets map directly onto `cairo_set_dash`, so concealed
/// and partially revealed lines rasterize exactly like their SVG form.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        context.save().map_err(|err| map_backend_error("save", err))?;
        context.translate(scene.plot_origin.x, scene.plot_origin.y);

        for axis in [&scene.x_grid, &scene.y_grid, &scene.x_axis, &scene.y_axis] {
            stats.ticks_drawn += draw_axis(context, axis)?;
        }

        context.save().map_err(|err| map_backend_error("save", err))?;
        context.rectangle(0.0, 0.0, scene.clip.width, scene.clip.height);
        context.clip();
        for line in scene.lines.values() {
            if draw_line(context, line)? {
                stats.lines_drawn += 1;
            }
        }
        context
            .restore()
            .map_err(|err| map_backend_error("restore", err))?;

        for label in scene.labels.values() {
            draw_label(context, label)?;
            stats.labels_drawn += 1;
        }

        context
            .restore()
            .map_err(|err| map_backend_error("restore", err))?;
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, scene)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, scene: &Scene) -> ChartResult<()> {
        self.render_with_context(context, scene)
    }
}

fn draw_axis(context: &Context, axis: &AxisNode) -> ChartResult<usize> {
    let color = if axis.role.is_grid() {
        GRID_COLOR
    } else {
        Color::black()
    };
    let spacing = axis.tick_size_inner.max(0.0) + axis.tick_padding;
    let mut drawn = 0;

    context.set_line_width(1.0);
    for tick in axis.ticks.iter().filter(|tick| tick.visible) {
        apply_color(context, color.with_alpha(color.alpha * tick.opacity));
        let (x, y) = match axis.orientation() {
            AxisOrientation::Bottom => (axis.offset.x + tick.position, axis.offset.y),
            AxisOrientation::Left => (axis.offset.x, axis.offset.y + tick.position),
        };
        context.move_to(x, y);
        match axis.orientation() {
            AxisOrientation::Bottom => context.line_to(x, y + axis.tick_size_inner),
            AxisOrientation::Left => context.line_to(x - axis.tick_size_inner, y),
        }
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke tick", err))?;

        if !tick.label.is_empty() {
            let layout = pangocairo::functions::create_layout(context);
            layout.set_font_description(Some(&FontDescription::from_string(&format!(
                "Sans {AXIS_FONT_SIZE_PX}px"
            ))));
            layout.set_text(&tick.label);
            let (width, height) = layout.pixel_size();
            let (width, height) = (f64::from(width), f64::from(height));
            match axis.orientation() {
                AxisOrientation::Bottom => context.move_to(x - width / 2.0, y + spacing),
                AxisOrientation::Left => context.move_to(x - spacing - width, y - height / 2.0),
            }
            pangocairo::functions::show_layout(context, &layout);
        }
        drawn += 1;
    }

    if !axis.role.is_grid() {
        apply_color(context, Color::black());
        let (r0, r1) = axis.range;
        match axis.orientation() {
            AxisOrientation::Bottom => {
                context.move_to(axis.offset.x + r0, axis.offset.y);
                context.line_to(axis.offset.x + r1, axis.offset.y);
            }
            AxisOrientation::Left => {
                context.move_to(axis.offset.x, axis.offset.y + r0);
                context.line_to(axis.offset.x, axis.offset.y + r1);
            }
        }
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke axis domain", err))?;
    }
    Ok(drawn)
}

fn draw_line(context: &Context, line: &LineNode) -> ChartResult<bool> {
    if line.path.is_empty() {
        return Ok(false);
    }
    let color = Color::parse_css(&line.color)?;
    apply_color(context, color);
    context.set_line_width(line.stroke_width);
    match line.dash {
        Some(dash) if dash.array > 0.0 => context.set_dash(&[dash.array, dash.array], dash.offset),
        Some(_) => return Ok(false),
        None => context.set_dash(&[], 0.0),
    }

    context.new_path();
    for command in line.path.commands() {
        match *command {
            PathCommand::MoveTo(p) => context.move_to(p.x, p.y),
            PathCommand::LineTo(p) => context.line_to(p.x, p.y),
            PathCommand::CubicTo { c1, c2, to } => {
                context.curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
            }
            PathCommand::ClosePath => context.close_path(),
        }
    }
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))?;
    context.set_dash(&[], 0.0);
    Ok(true)
}

fn draw_label(context: &Context, label: &LabelNode) -> ChartResult<()> {
    let color = Color::parse_css(&label.color)?;
    apply_color(context, color.with_alpha(color.alpha * label.opacity));
    let font = FontDescription::from_string(&format!("Sans {}px", label.font_size_px));

    let mut baseline = label.y;
    for line in &label.lines {
        baseline += line.dy_em * label.font_size_px;
        let layout = pangocairo::functions::create_layout(context);
        layout.set_font_description(Some(&font));
        layout.set_text(&line.text);
        let (width, _) = layout.pixel_size();
        let width = f64::from(width);
        let x = match label.anchor {
            TextAnchor::Start => label.x,
            TextAnchor::Middle => label.x - width / 2.0,
            TextAnchor::End => label.x - width,
        };
        context.move_to(x, baseline - label.font_size_px * LABEL_LINE_HEIGHT_EM);
        pangocairo::functions::show_layout(context, &layout);
    }
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Render(format!("{prefix}: {err}"))
}
