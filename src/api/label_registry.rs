use indexmap::IndexMap;

use super::options::LabelStyle;
use super::transition::{GenerationCounter, TransitionTiming};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FadeDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct LabelFade {
    pub(super) direction: FadeDirection,
    pub(super) generation: u64,
    pub(super) timing: TransitionTiming,
    pub(super) from_opacity: f64,
}

impl LabelFade {
    pub(super) fn opacity_at(self, now_ms: f64) -> f64 {
        let target = match self.direction {
            FadeDirection::In => 1.0,
            FadeDirection::Out => 0.0,
        };
        let t = self.timing.eased_progress(now_ms);
        (self.from_opacity + (target - self.from_opacity) * t).clamp(0.0, 1.0)
    }
}

/// Registered label: data-space anchor plus presentation.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct LabelEntry {
    pub(super) year: f64,
    pub(super) value: f64,
    pub(super) text: String,
    pub(super) style: LabelStyle,
    pub(super) fade: Option<LabelFade>,
}

/// Sole owner of label entries, keyed by id in insertion order.
#[derive(Debug, Default)]
pub(super) struct LabelRegistry {
    entries: IndexMap<String, LabelEntry>,
    generations: GenerationCounter,
}

impl LabelRegistry {
    pub(super) fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn ids(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub(super) fn iter(&self) -> impl Iterator<Item = (&str, &LabelEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    /// Returns `false` without touching the existing entry when `id` is taken.
    pub(super) fn insert(&mut self, id: &str, entry: LabelEntry) -> bool {
        if self.entries.contains_key(id) {
            return false;
        }
        self.entries.insert(id.to_owned(), entry);
        true
    }

    pub(super) fn remove(&mut self, id: &str) -> Option<LabelEntry> {
        self.entries.shift_remove(id)
    }

    /// Replaces any running fade on `id`; returns the new generation.
    pub(super) fn begin_fade(
        &mut self,
        id: &str,
        direction: FadeDirection,
        timing: TransitionTiming,
        from_opacity: f64,
    ) -> Option<u64> {
        let entry = self.entries.get_mut(id)?;
        let generation = self.generations.next();
        entry.fade = Some(LabelFade {
            direction,
            generation,
            timing,
            from_opacity,
        });
        Some(generation)
    }

    pub(super) fn fading(&self) -> Vec<(String, LabelFade)> {
        self.entries
            .iter()
            .filter_map(|(id, entry)| entry.fade.map(|fade| (id.clone(), fade)))
            .collect()
    }

    /// Settles the fade with `generation`. A finished fade-out removes the entry.
    pub(super) fn finish_fade(&mut self, id: &str, generation: u64) -> Option<FadeDirection> {
        let entry = self.entries.get_mut(id)?;
        let fade = entry.fade.filter(|fade| fade.generation == generation)?;
        entry.fade = None;
        if fade.direction == FadeDirection::Out {
            self.entries.shift_remove(id);
        }
        Some(fade.direction)
    }

    /// Drops pending fade-ins; fade-outs keep running.
    pub(super) fn cancel_fade_ins(&mut self) {
        for entry in self.entries.values_mut() {
            if entry
                .fade
                .is_some_and(|fade| fade.direction == FadeDirection::In)
            {
                entry.fade = None;
            }
        }
    }
}
