use serde::{Deserialize, Serialize};

use crate::render::TickNode;

fn default_max_ticks() -> usize {
    7
}

fn default_narrow_width_px() -> f64 {
    500.0
}

fn default_delay_ms() -> f64 {
    1000.0
}

/// Narrow-container thinning of x-axis tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickThinningBehavior {
    /// Thinning kicks in above this many ticks.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: usize,
    /// Container widths at or below this are narrow.
    #[serde(default = "default_narrow_width_px")]
    pub narrow_width_px: f64,
    /// Delay between a rebuild or rescale and the thinning pass.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: f64,
}

impl Default for TickThinningBehavior {
    fn default() -> Self {
        Self {
            max_ticks: default_max_ticks(),
            narrow_width_px: default_narrow_width_px(),
            delay_ms: default_delay_ms(),
        }
    }
}

/// Makes every tick visible, then hides odd-indexed ticks when there are more
/// than `max_ticks` of them and the container is narrow. Returns the hidden count.
pub fn thin_ticks(ticks: &mut [TickNode], container_width: f64, behavior: TickThinningBehavior) -> usize {
    for tick in ticks.iter_mut() {
        tick.visible = true;
    }
    if ticks.len() <= behavior.max_ticks || container_width > behavior.narrow_width_px {
        return 0;
    }
    let mut hidden = 0;
    for tick in ticks.iter_mut().skip(1).step_by(2) {
        tick.visible = false;
        hidden += 1;
    }
    hidden
}

#[derive(Debug, Default)]
pub(super) struct TickThinningSchedule {
    due_at_ms: Option<f64>,
}

impl TickThinningSchedule {
    /// Later schedules replace earlier ones.
    pub(super) fn schedule(&mut self, now_ms: f64, delay_ms: f64) {
        self.due_at_ms = Some(now_ms + delay_ms.max(0.0));
    }

    pub(super) fn is_pending(&self) -> bool {
        self.due_at_ms.is_some()
    }

    pub(super) fn cancel(&mut self) {
        self.due_at_ms = None;
    }

    pub(super) fn take_due(&mut self, now_ms: f64) -> bool {
        match self.due_at_ms {
            Some(due) if now_ms >= due => {
                self.due_at_ms = None;
                true
            }
            _ => false,
        }
    }
}
