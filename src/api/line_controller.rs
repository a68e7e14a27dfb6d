use tracing::{debug, warn};

use crate::error::ChartResult;
use crate::extensions::PluginEvent;
use crate::render::Renderer;

use super::line_state::LineState;
use super::transition::{Ease, TransitionTiming};
use super::validation::validate_timing;
use super::{ConcealOutcome, LineChartEngine, RevealOptions, RevealOutcome};

impl<R: Renderer> LineChartEngine<R> {
    /// Starts drawing the line for `key` in with a linear dash-offset sweep.
    ///
    /// Revealed or already revealing lines are left alone. The key joins the
    /// revealed set only when the sweep completes without being superseded.
    pub fn reveal(&mut self, key: &str, options: RevealOptions) -> ChartResult<RevealOutcome> {
        validate_timing(options.delay_ms, options.duration_ms, "reveal")?;
        match self.lines.state(key) {
            LineState::Revealed => {
                debug!(key, "line already revealed");
                return Ok(RevealOutcome::AlreadyRevealed);
            }
            LineState::Revealing => {
                debug!(key, "line reveal already in flight");
                return Ok(RevealOutcome::AlreadyRevealing);
            }
            LineState::Concealed => {}
        }

        let Some(node) = self.scene.lines.get_mut(key) else {
            warn!(key, "no line found for series key");
            return Ok(RevealOutcome::NotFound);
        };
        node.mask_to_fraction(0.0);

        let timing = TransitionTiming::scheduled(
            self.now_ms,
            options.delay_ms,
            options.duration_ms,
            Ease::Linear,
        );
        let generation = self.lines.begin_reveal(key, timing);
        debug!(
            key,
            generation,
            delay_ms = options.delay_ms,
            duration_ms = options.duration_ms,
            "line reveal scheduled"
        );
        self.emit_plugin_event(PluginEvent::LineRevealStarted {
            key: key.to_owned(),
        });
        Ok(RevealOutcome::Started)
    }

    /// Hides the line for `key` immediately, cancelling any reveal or morph.
    pub fn conceal(&mut self, key: &str) -> ConcealOutcome {
        let Some(node) = self.scene.lines.get_mut(key) else {
            warn!(key, "no line found for series key");
            return ConcealOutcome::NotFound;
        };
        if let Some(target) = self
            .domain_transition
            .as_mut()
            .and_then(|transition| transition.take_morph(key))
        {
            node.set_path(target);
        }
        node.mask_fully();
        let changed = self.lines.conceal(key);
        debug!(key, changed, "line concealed");
        self.emit_plugin_event(PluginEvent::LineConcealed {
            key: key.to_owned(),
        });
        ConcealOutcome::Concealed
    }

    pub fn conceal_all(&mut self) {
        let keys: Vec<String> = self
            .config
            .series
            .iter()
            .map(|series| series.key.clone())
            .collect();
        for key in keys {
            let outcome = self.conceal(&key);
            debug_assert_eq!(outcome, ConcealOutcome::Concealed, "configured line `{key}`");
        }
    }

    #[must_use]
    pub fn line_state(&self, key: &str) -> LineState {
        self.lines.state(key)
    }

    #[must_use]
    pub fn is_revealed(&self, key: &str) -> bool {
        self.lines.state(key) == LineState::Revealed
    }

    /// Keys whose reveal completed, in completion order.
    #[must_use]
    pub fn revealed_keys(&self) -> Vec<String> {
        self.lines.revealed_keys().map(str::to_owned).collect()
    }
}
