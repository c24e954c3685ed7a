use std::time::{Duration, Instant};

/// Default event-poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Focus time accrues in whole seconds
pub const FOCUS_PERIOD: Duration = Duration::from_secs(1);

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
}

/// Periodic focus schedule driven by the host event loop.
///
/// There is a single schedule slot, so starting an already running timer
/// never creates a second tick source. `due_ticks` reports whole periods
/// elapsed since the last poll, so a slow poll loses no seconds and a fast
/// one counts none twice.
#[derive(Debug, Clone)]
pub struct FocusTimer {
    period: Duration,
    next_due: Option<Instant>,
}

impl FocusTimer {
    pub fn new() -> Self {
        Self::with_period(FOCUS_PERIOD)
    }

    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn state(&self) -> TimerState {
        if self.next_due.is_some() {
            TimerState::Running
        } else {
            TimerState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == TimerState::Running
    }

    /// Idle -> Running. Returns false if it was already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.next_due.is_some() {
            return false;
        }
        self.next_due = Some(now + self.period);
        tracing::debug!("focus timer started");
        true
    }

    /// Running -> Idle. Returns false if it was already idle.
    pub fn stop(&mut self) -> bool {
        if self.next_due.take().is_some() {
            tracing::debug!("focus timer stopped");
            true
        } else {
            false
        }
    }

    /// Follow the focus-mode flag
    pub fn sync(&mut self, focus_mode: bool, now: Instant) {
        if focus_mode {
            self.start(now);
        } else {
            self.stop();
        }
    }

    /// Number of periods that elapsed up to `now`; advances the schedule past them
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut ticks = 0;
        while now >= due {
            ticks += 1;
            due += self.period;
        }
        self.next_due = Some(due);
        ticks
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}
