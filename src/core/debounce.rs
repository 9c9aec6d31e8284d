//! Debounced preview - delays re-rendering while parameters are edited.
//!
//! Every edit re-arms a single one-shot timer instead of rendering
//! immediately, so dragging a slider or typing produces one render after
//! the user pauses rather than one per keystroke. Because the timer is
//! cancelled and rescheduled, overlapping renders are impossible.

use std::time::{Duration, Instant};

/// One-shot debounce timer for preview regeneration.
///
/// # Usage
/// ```ignore
/// // On any parameter or content edit:
/// debounce.schedule();
///
/// // In the update loop:
/// if debounce.tick() {
///     refresh_preview();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DebouncedPreview {
    /// Delay before the preview refresh fires
    delay: Duration,
    /// Deadline of the pending refresh, if armed
    pending: Option<Instant>,
}

impl Default for DebouncedPreview {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(500),
            pending: None,
        }
    }
}

impl DebouncedPreview {
    /// Create with custom delay
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    /// Get current delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm (or re-arm) the timer. If a refresh is already pending the
    /// deadline moves forward - classic debounce behavior.
    pub fn schedule(&mut self) {
        let deadline = Instant::now() + self.delay;
        self.pending = Some(deadline);
        log::trace!(
            "DebouncedPreview: refresh scheduled in {}ms",
            self.delay.as_millis()
        );
    }

    /// Disarm any pending refresh
    pub fn cancel(&mut self) {
        if self.pending.is_some() {
            log::trace!("DebouncedPreview: pending refresh cancelled");
        }
        self.pending = None;
    }

    /// Check whether the refresh should fire now.
    /// Returns true exactly once per elapsed deadline.
    pub fn tick(&mut self) -> bool {
        let Some(deadline) = self.pending else {
            return false;
        };

        if Instant::now() >= deadline {
            self.pending = None;
            log::trace!("DebouncedPreview: firing refresh");
            true
        } else {
            false
        }
    }

    /// Whether a refresh is armed
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending refresh, for repaint scheduling.
    pub fn time_until_fire(&self) -> Option<Duration> {
        self.pending
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_is_half_second() {
        let debounce = DebouncedPreview::default();
        assert_eq!(debounce.delay(), Duration::from_millis(500));
        assert_eq!(DebouncedPreview::new(120).delay(), Duration::from_millis(120));
    }

    #[test]
    fn test_immediate_no_trigger() {
        let mut debounce = DebouncedPreview::new(100);

        debounce.schedule();
        assert!(debounce.is_pending());

        // Should not fire immediately
        assert!(!debounce.tick());
        assert!(debounce.is_pending());
    }

    #[test]
    fn test_trigger_after_delay() {
        let mut debounce = DebouncedPreview::new(10); // 10ms

        debounce.schedule();
        std::thread::sleep(Duration::from_millis(15));

        // Fires once, then stays quiet
        assert!(debounce.tick());
        assert!(!debounce.is_pending());
        assert!(!debounce.tick());
    }

    #[test]
    fn test_reschedule_resets_timer() {
        let mut debounce = DebouncedPreview::new(50);

        debounce.schedule();
        std::thread::sleep(Duration::from_millis(30));

        // Re-schedule pushes the deadline forward
        debounce.schedule();
        assert!(!debounce.tick());
        assert!(debounce.is_pending());
    }

    #[test]
    fn test_cancel_disarms() {
        let mut debounce = DebouncedPreview::new(5);

        debounce.schedule();
        debounce.cancel();
        std::thread::sleep(Duration::from_millis(10));

        assert!(!debounce.tick());
    }
}
