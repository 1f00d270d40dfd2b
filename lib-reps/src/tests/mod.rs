use crate::*;

mod session;
mod wire;

/// Display sink that keeps everything it is shown.
///
#[derive(Debug, Default)]
pub struct RecordingDisplay
{
    pub updates: Vec<DisplayUpdate>,
}

impl RecordingDisplay
{
    pub fn progress_texts(&self) -> Vec<String> {
        self.updates
            .iter()
            .filter_map(|update| match update {
                DisplayUpdate::Progress(progress) => Some(progress.to_string()),
                DisplayUpdate::Cadence { .. } => None,
            })
            .collect()
    }

    pub fn cadences(&self) -> Vec<Cadence> {
        self.updates
            .iter()
            .filter_map(|update| match update {
                DisplayUpdate::Cadence { cadence, .. } => Some(*cadence),
                DisplayUpdate::Progress(_) => None,
            })
            .collect()
    }
}

impl DisplaySink for RecordingDisplay {
    fn show_cadence(&mut self, cadence: Cadence, fill: u8) {
        self.updates.push(DisplayUpdate::Cadence { cadence, fill });
    }

    fn show_progress(&mut self, progress: Progress) {
        self.updates.push(DisplayUpdate::Progress(progress));
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator
{
    pub completions: Vec<NextStep>,
}

impl Navigator for RecordingNavigator {
    fn exercise_complete(&mut self, next: NextStep) {
        self.completions.push(next);
    }
}

/// In-gate sample pointing along +(1, 1, 1); its negation is a full reversal.
pub const UP: (f64, f64, f64) = (1.0, 1.0, 1.0);
pub const DOWN: (f64, f64, f64) = (-1.0, -1.0, -1.0);
