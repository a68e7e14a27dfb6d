use std::collections::HashSet;

use crate::core::Domain;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::ChartConfig;

pub(super) fn validate_config(config: &ChartConfig, require_data_url: bool) -> ChartResult<()> {
    if require_data_url
        && config
            .data_url
            .as_deref()
            .is_none_or(|url| url.trim().is_empty())
    {
        return Err(ChartError::Configuration(
            "dataUrl must be provided".to_owned(),
        ));
    }
    if config.series.is_empty() {
        return Err(ChartError::Configuration(
            "series must not be empty".to_owned(),
        ));
    }
    let mut seen = HashSet::with_capacity(config.series.len());
    for series in &config.series {
        if series.key.is_empty() {
            return Err(ChartError::Configuration(
                "series key must not be empty".to_owned(),
            ));
        }
        if !seen.insert(series.key.as_str()) {
            return Err(ChartError::Configuration(format!(
                "series key `{}` is declared more than once",
                series.key
            )));
        }
        validate_color(&series.color, &format!("series `{}`", series.key))?;
    }

    validate_domain(config.x_domain, "x")?;
    validate_domain(config.y_domain, "y")?;

    let margin = config.margin;
    for (side, value) in [
        ("top", margin.top),
        ("right", margin.right),
        ("bottom", margin.bottom),
        ("left", margin.left),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "margin.{side} must be finite and >= 0"
            )));
        }
    }

    validate_non_negative(config.resize_debounce_ms, "resizeDebounceMs")?;
    validate_non_negative(config.tick_thinning.delay_ms, "tickThinning.delayMs")?;
    validate_non_negative(config.tick_thinning.narrow_width_px, "tickThinning.narrowWidthPx")?;
    if !config.line_stroke_width.is_finite() || config.line_stroke_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "lineStrokeWidth must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_domain(domain: Domain, axis: &str) -> ChartResult<()> {
    if !domain.0.is_finite() || !domain.1.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{axis} domain bounds must be finite"
        )));
    }
    Ok(())
}

/// Rejects colors the cairo backend could not draw, so a bad value fails
/// up front rather than on every frame.
pub(super) fn validate_color(color: &str, owner: &str) -> ChartResult<()> {
    Color::parse_css(color)
        .map(drop)
        .map_err(|_| ChartError::InvalidData(format!("{owner} color `{color}` is not a css color")))
}

pub(super) fn validate_timing(delay_ms: f64, duration_ms: f64, context: &str) -> ChartResult<()> {
    validate_non_negative(delay_ms, &format!("{context} delay"))?;
    validate_non_negative(duration_ms, &format!("{context} duration"))
}

fn validate_non_negative(value: f64, name: &str) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}
