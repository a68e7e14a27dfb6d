use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::extensions::PluginEvent;
use crate::render::Renderer;

use super::label_registry::{FadeDirection, LabelEntry};
use super::scene_builder::build_label;
use super::transition::{Ease, TransitionTiming};
use super::validation::{validate_color, validate_timing};
use super::{
    AddLabelOutcome, LabelOptions, LineChartEngine, RemoveLabelOptions, RemoveLabelOutcome,
};

impl<R: Renderer> LineChartEngine<R> {
    /// Registers a floating label anchored at `(year, value)` in data space.
    ///
    /// The first registration of an id wins; later ones are ignored.
    pub fn add_label(&mut self, id: &str, options: LabelOptions) -> ChartResult<AddLabelOutcome> {
        if id.is_empty() {
            debug!("label id must not be empty");
            return Ok(AddLabelOutcome::EmptyId);
        }
        if self.labels.contains(id) {
            debug!(id, "label already registered");
            return Ok(AddLabelOutcome::Duplicate);
        }
        let (Some(year), Some(value)) = (options.point.year, options.point.value) else {
            warn!(id, "label requires both year and value");
            return Ok(AddLabelOutcome::MissingPoint);
        };
        if !year.is_finite() || !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "label `{id}` anchor must be finite"
            )));
        }
        let style = options.style;
        if !style.font_size_px.is_finite() || style.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "label `{id}` font size must be finite and > 0"
            )));
        }
        validate_color(&style.color, &format!("label `{id}`"))?;
        if style.fade_in {
            validate_timing(style.delay_ms, style.duration_ms, "label fade-in")?;
        }

        let fade_in = style.fade_in.then_some((style.delay_ms, style.duration_ms));
        let entry = LabelEntry {
            year,
            value,
            text: options.point.text,
            style,
            fade: None,
        };
        let opacity = if fade_in.is_some() { 0.0 } else { 1.0 };
        let node = build_label(id, &entry, self.x_scale, self.y_scale, opacity);
        self.labels.insert(id, entry);
        self.scene.labels.insert(id.to_owned(), node);

        if let Some((delay_ms, duration_ms)) = fade_in {
            let timing =
                TransitionTiming::scheduled(self.now_ms, delay_ms, duration_ms, Ease::CubicInOut);
            self.labels
                .begin_fade(id, FadeDirection::In, timing, 0.0);
        }
        debug!(id, year, value, fade_in = fade_in.is_some(), "label added");
        self.emit_plugin_event(PluginEvent::LabelAdded { id: id.to_owned() });
        Ok(AddLabelOutcome::Added)
    }

    /// Removes a label now, or fades it out and removes it when the fade ends.
    pub fn remove_label(
        &mut self,
        id: &str,
        options: RemoveLabelOptions,
    ) -> ChartResult<RemoveLabelOutcome> {
        if options.fade_out {
            validate_timing(options.delay_ms, options.duration_ms, "label fade-out")?;
        }
        if !self.labels.contains(id) {
            warn!(id, "no label registered with id");
            return Ok(RemoveLabelOutcome::NotFound);
        }

        if options.fade_out {
            let from_opacity = self.scene.labels.get(id).map_or(1.0, |node| node.opacity);
            let timing = TransitionTiming::scheduled(
                self.now_ms,
                options.delay_ms,
                options.duration_ms,
                Ease::CubicInOut,
            );
            self.labels
                .begin_fade(id, FadeDirection::Out, timing, from_opacity);
            debug!(id, "label fade-out scheduled");
            return Ok(RemoveLabelOutcome::FadingOut);
        }

        self.labels.remove(id);
        self.detach_label(id);
        Ok(RemoveLabelOutcome::Removed)
    }

    pub fn remove_all_labels(&mut self, options: RemoveLabelOptions) -> ChartResult<()> {
        for id in self.labels.ids() {
            self.remove_label(&id, options)?;
        }
        Ok(())
    }

    /// Registered label ids in insertion order, including ones fading out.
    #[must_use]
    pub fn label_ids(&self) -> Vec<String> {
        self.labels.ids()
    }

    #[must_use]
    pub fn has_label(&self, id: &str) -> bool {
        self.labels.contains(id)
    }

    /// Drops the scene node of a label the registry no longer holds.
    pub(super) fn detach_label(&mut self, id: &str) {
        self.scene.labels.shift_remove(id);
        if let Some(transition) = self.domain_transition.as_mut() {
            transition.forget_label(id);
        }
        debug!(id, "label removed");
        self.emit_plugin_event(PluginEvent::LabelRemoved { id: id.to_owned() });
    }
}
