use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::transition::{GenerationCounter, TransitionTiming};

/// Visibility of one series line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineState {
    /// Present in the scene but masked by an equal-length dash gap.
    Concealed,
    /// A draw-in transition is in flight.
    Revealing,
    /// Solid stroke, no dash.
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct RevealTransition {
    pub(super) generation: u64,
    pub(super) timing: TransitionTiming,
}

/// Revealed set plus in-flight reveals.
///
/// The revealed set is what every rebuild consults. A reveal only commits if
/// its generation is still the one registered for the key, so an explicit
/// conceal always wins over a stale completion.
#[derive(Debug, Default)]
pub(super) struct LineVisibility {
    revealed: IndexSet<String>,
    revealing: IndexMap<String, RevealTransition>,
    generations: GenerationCounter,
}

impl LineVisibility {
    pub(super) fn state(&self, key: &str) -> LineState {
        if self.revealed.contains(key) {
            LineState::Revealed
        } else if self.revealing.contains_key(key) {
            LineState::Revealing
        } else {
            LineState::Concealed
        }
    }

    pub(super) fn revealed_keys(&self) -> impl Iterator<Item = &str> {
        self.revealed.iter().map(String::as_str)
    }

    pub(super) fn revealing(&self) -> Vec<(String, RevealTransition)> {
        self.revealing
            .iter()
            .map(|(key, transition)| (key.clone(), *transition))
            .collect()
    }

    pub(super) fn reveal_progress(&self, key: &str, now_ms: f64) -> Option<f64> {
        self.revealing
            .get(key)
            .map(|transition| transition.timing.eased_progress(now_ms))
    }

    pub(super) fn begin_reveal(&mut self, key: &str, timing: TransitionTiming) -> u64 {
        let generation = self.generations.next();
        self.revealing.insert(
            key.to_owned(),
            RevealTransition { generation, timing },
        );
        generation
    }

    /// Commits a finished reveal; returns `false` when the transition was superseded.
    pub(super) fn complete_reveal(&mut self, key: &str, generation: u64) -> bool {
        match self.revealing.get(key) {
            Some(active) if active.generation == generation => {
                self.revealing.shift_remove(key);
                self.revealed.insert(key.to_owned());
                true
            }
            _ => false,
        }
    }

    /// Drops the key from the revealed set and cancels any in-flight reveal.
    pub(super) fn conceal(&mut self, key: &str) -> bool {
        let was_revealed = self.revealed.shift_remove(key);
        let was_revealing = self.revealing.shift_remove(key).is_some();
        was_revealed || was_revealing
    }
}
