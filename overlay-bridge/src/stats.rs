//! Bundled sample mod: frame time and FPS readout.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use overlay_core::ui::{ImmediateUi, PanelSpec};
use overlay_core::{GuiMod, Mod};

pub const FRAME_STATS_NAME: &str = "frame-stats";
pub const PANEL_TITLE: &str = "Frame Stats";
const SAMPLES: usize = 120;

#[derive(Debug, Default)]
pub struct FrameStatsMod {
    last: Option<Instant>,
    samples: VecDeque<Duration>,
}

impl FrameStatsMod {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note a frame at `now`. Keeps the last 120 intervals.
    pub fn record(&mut self, now: Instant) {
        if let Some(last) = self.last.replace(now) {
            if self.samples.len() == SAMPLES {
                self.samples.pop_front();
            }
            self.samples.push_back(now.saturating_duration_since(last));
        }
    }

    pub fn average_frame_time(&self) -> Option<Duration> {
        if self.samples.is_empty() {
            return None;
        }
        let total: Duration = self.samples.iter().sum();
        Some(total / self.samples.len() as u32)
    }

    pub fn fps(&self) -> Option<f32> {
        self.average_frame_time()
            .filter(|d| !d.is_zero())
            .map(|d| 1.0 / d.as_secs_f32())
    }

    pub fn readout(&self) -> String {
        match (self.average_frame_time(), self.fps()) {
            (Some(avg), Some(fps)) => {
                format!("{:.2} ms/frame ({fps:.0} FPS)", avg.as_secs_f64() * 1000.0)
            }
            _ => "measuring...".to_string(),
        }
    }
}

impl GuiMod for FrameStatsMod {
    fn render(&mut self, ui: &mut dyn ImmediateUi) -> anyhow::Result<()> {
        self.record(Instant::now());
        let readout = self.readout();
        ui.panel(&PanelSpec::floating(PANEL_TITLE), None, &mut |ui: &mut dyn ImmediateUi| {
            ui.text(&readout);
        });
        Ok(())
    }
}

impl Mod for FrameStatsMod {
    fn name(&self) -> &str {
        FRAME_STATS_NAME
    }

    fn gui(&mut self) -> Option<&mut dyn GuiMod> {
        Some(self)
    }
}
