//! Waiting indicator shown between sending a request and the first frame

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Message shown while the assistant has not answered yet
pub const THINKING_MESSAGE: &str = "Thinking aloud...";

/// Spinner that runs until the first frame of a response arrives
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start spinning. A spinner that is already running is replaced.
    pub fn start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(THINKING_MESSAGE);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    /// Stop and erase the spinner. Returns whether one was running.
    pub fn finish(&self) -> bool {
        match self.bar.lock().ok().and_then(|mut slot| slot.take()) {
            Some(pb) => {
                pb.finish_and_clear();
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.bar.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_then_finish() {
        let progress = ProgressReporter::new();
        assert!(!progress.is_running());

        progress.start();
        assert!(progress.is_running());

        assert!(progress.finish());
        assert!(!progress.is_running());
        assert!(!progress.finish());
    }
}
