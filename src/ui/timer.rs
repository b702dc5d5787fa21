//! Elapsed-time tracking for the side panel

use std::time::{Duration, Instant};

/// Game clock that freezes when the game ends
#[derive(Debug, Clone)]
pub struct GameTimer {
    start_time: Instant,
    final_time: Option<Duration>,
}

impl Default for GameTimer {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            final_time: None,
        }
    }
}

impl GameTimer {
    /// Restart from zero
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Freeze the clock. Later calls keep the first recorded time.
    pub fn stop(&mut self) -> Duration {
        *self.final_time.get_or_insert_with(|| self.start_time.elapsed())
    }

    pub fn is_running(&self) -> bool {
        self.final_time.is_none()
    }

    pub fn elapsed(&self) -> Duration {
        self.final_time.unwrap_or_else(|| self.start_time.elapsed())
    }
}
