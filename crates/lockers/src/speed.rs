//! Mapping from the speed slider to step delays. The slider is inverted: a larger
//! position means a shorter delay.

use std::time::Duration;

pub const SLIDER_MIN: u32 = 50;
pub const SLIDER_MAX: u32 = 1000;
const SLIDER_INVERT: u32 = 1050;

pub fn clamp_slider(raw: u32) -> u32 {
    raw.clamp(SLIDER_MIN, SLIDER_MAX)
}

/// Delay between two touches of the same actor.
pub fn step_delay(slider: u32) -> Duration {
    Duration::from_millis(u64::from(SLIDER_INVERT - clamp_slider(slider)))
}

/// Pause between one actor finishing and the next being announced.
pub fn settle_delay(step: Duration) -> Duration {
    step * 3 / 2
}

/// How long a touched locker stays highlighted.
pub fn highlight_delay(step: Duration) -> Duration {
    step / 2
}
