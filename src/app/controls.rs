use crate::input::ControlId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Hold time after which a press is released on terminals that never
/// report key release
pub const AUTO_RELEASE: Duration = Duration::from_millis(150);

/// Press state of the decorative buttons
#[derive(Debug, Clone, Default)]
pub struct Controls {
    pressed: HashMap<ControlId, Instant>,
}

impl Controls {
    pub fn press(&mut self, control: ControlId, now: Instant) {
        self.pressed.insert(control, now);
    }

    pub fn release(&mut self, control: ControlId) {
        self.pressed.remove(&control);
    }

    #[must_use]
    pub fn is_pressed(&self, control: ControlId) -> bool {
        self.pressed.contains_key(&control)
    }

    /// Releases every control held longer than [`AUTO_RELEASE`]
    pub fn tick(&mut self, now: Instant) {
        self.pressed
            .retain(|_, pressed_at| now.saturating_duration_since(*pressed_at) < AUTO_RELEASE);
    }
}
