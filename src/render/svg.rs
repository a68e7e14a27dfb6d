use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::{AxisNode, AxisOrientation, LabelNode, LineNode, Renderer, Scene};

/// Serializes each rendered scene into an SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    render_count: usize,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document produced by the last `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;
        self.document = scene_to_svg(scene);
        self.render_count += 1;
        Ok(())
    }
}

/// SVG markup for `scene`, mirroring its group hierarchy.
#[must_use]
pub fn scene_to_svg(scene: &Scene) -> String {
    let mut out = String::with_capacity(4096 + scene.lines.len() * 2048);
    // Writing into a String never fails; results are ignored below.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        scene.canvas.width, scene.canvas.height
    );
    let _ = writeln!(
        out,
        r#"<g transform="translate({},{})">"#,
        scene.plot_origin.x, scene.plot_origin.y
    );

    for axis in [&scene.x_grid, &scene.y_grid, &scene.x_axis, &scene.y_axis] {
        write_axis(&mut out, axis);
    }

    let _ = writeln!(out, r#"<g clip-path="url(#{})">"#, escape(&scene.clip.id));
    for line in scene.lines.values() {
        write_line(&mut out, line);
    }
    out.push_str("</g>\n");

    out.push_str("<g class=\"custom-labels\">\n");
    for label in scene.labels.values() {
        write_label(&mut out, label);
    }
    out.push_str("</g>\n</g>\n");

    let _ = writeln!(
        out,
        r#"<defs><clipPath id="{}"><rect width="{}" height="{}"></rect></clipPath></defs>"#,
        escape(&scene.clip.id),
        scene.clip.width,
        scene.clip.height
    );
    out.push_str("</svg>\n");
    out
}

fn write_axis(out: &mut String, axis: &AxisNode) {
    let orientation = axis.orientation();
    let text_anchor = match orientation {
        AxisOrientation::Bottom => "middle",
        AxisOrientation::Left => "end",
    };
    let _ = writeln!(
        out,
        r#"<g class="{}" transform="translate({},{})" fill="none" font-size="10" font-family="sans-serif" text-anchor="{text_anchor}">"#,
        axis.role.class_name(),
        axis.offset.x,
        axis.offset.y
    );

    let (r0, r1) = axis.range;
    let outer = axis.tick_size_outer;
    let domain = match orientation {
        AxisOrientation::Bottom => format!("M{r0},{outer}V0H{r1}V{outer}"),
        AxisOrientation::Left => format!("M{},{r0}H0V{r1}H{}", -outer, -outer),
    };
    let _ = writeln!(out, r#"<path class="domain" stroke="currentColor" d="{domain}"></path>"#);

    let spacing = axis.tick_size_inner.max(0.0) + axis.tick_padding;
    for tick in &axis.ticks {
        let display = if tick.visible {
            ""
        } else {
            r#" style="display: none""#
        };
        let (transform, line, text_position) = match orientation {
            AxisOrientation::Bottom => (
                format!("translate({},0)", tick.position),
                format!(r#"y2="{}""#, axis.tick_size_inner),
                format!(r#"y="{spacing}" dy="0.71em""#),
            ),
            AxisOrientation::Left => (
                format!("translate(0,{})", tick.position),
                format!(r#"x2="{}""#, -axis.tick_size_inner),
                format!(r#"x="{}" dy="0.32em""#, -spacing),
            ),
        };
        let _ = write!(
            out,
            r#"<g class="tick" opacity="{}" transform="{transform}"{display}><line stroke="currentColor" {line}></line>"#,
            tick.opacity
        );
        if !tick.label.is_empty() {
            let _ = write!(
                out,
                r#"<text fill="currentColor" {text_position}>{}</text>"#,
                escape(&tick.label)
            );
        }
        out.push_str("</g>\n");
    }
    out.push_str("</g>\n");
}

fn write_line(out: &mut String, line: &LineNode) {
    let key = escape(&line.key);
    let _ = write!(
        out,
        r#"<path class="line line-{key}" fill="none" stroke="{}" stroke-width="{}" d="{}""#,
        escape(&line.color),
        line.stroke_width,
        line.path.to_svg_d()
    );
    if let Some(dash) = line.dash {
        let _ = write!(
            out,
            r#" stroke-dasharray="{} {}" stroke-dashoffset="{}""#,
            dash.array, dash.array, dash.offset
        );
    }
    out.push_str("></path>\n");
}

fn write_label(out: &mut String, label: &LabelNode) {
    let id = escape(&label.id);
    let _ = write!(
        out,
        r#"<text class="custom-label custom-label-{id}" x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}px" style="opacity: {}">"#,
        label.x,
        label.y,
        label.anchor.as_svg_str(),
        escape(&label.color),
        label.font_size_px,
        label.opacity
    );
    for line in &label.lines {
        let _ = write!(
            out,
            r#"<tspan x="{}" dy="{}em">{}</tspan>"#,
            label.x,
            line.dy_em,
            escape(&line.text)
        );
    }
    out.push_str("</text>\n");
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape(r#"a<b & "c""#), "a&lt;b &amp; &quot;c&quot;");
    }
}
