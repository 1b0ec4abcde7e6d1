use chrono::{Local, Timelike};

/// Wall-clock snapshot with sub-second precision.
///
/// Sampled fresh each frame from the host's local clock; never stored
/// beyond the previous frame. Equality is field-for-field and drives the
/// skip-redraw rule: with microsecond resolution two consecutive frames
/// practically never compare equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WallTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Fraction of the current second, in microseconds (0..1_000_000).
    pub micros: u32,
}

impl WallTime {
    /// Samples the host's local clock.
    ///
    /// No timezone handling beyond whatever the host reports as local time.
    pub fn now() -> Self {
        let now = Local::now();
        // chrono reports leap seconds as nanosecond values >= 1e9; clamp so
        // the fraction stays inside the current second.
        let micros = (now.nanosecond() / 1_000).min(999_999);
        Self {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
            micros,
        }
    }

    /// Explicit-value constructor, used by tests and demos.
    pub fn from_hms_micros(hour: u32, minute: u32, second: u32, micros: u32) -> Self {
        debug_assert!(hour < 24 && minute < 60 && second < 60 && micros < 1_000_000);
        Self { hour, minute, second, micros }
    }

    /// Seconds within the current minute including the fractional part.
    pub fn smooth_seconds(&self) -> f64 {
        self.second as f64 + self.micros as f64 / 1_000_000.0
    }

    /// Ring rotation in degrees: 6° per second, 360° per minute.
    pub fn base_rotation_deg(&self) -> f64 {
        self.smooth_seconds() * 6.0
    }

    /// `HH:MM:SS` with zero-padded two-digit fields.
    pub fn hhmmss(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn hhmmss_pads_every_field() {
        assert_eq!(WallTime::from_hms_micros(9, 5, 3, 0).hhmmss(), "09:05:03");
    }

    #[test]
    fn hhmmss_last_second_of_day() {
        assert_eq!(WallTime::from_hms_micros(23, 59, 59, 0).hhmmss(), "23:59:59");
    }

    #[test]
    fn hhmmss_midnight() {
        assert_eq!(WallTime::from_hms_micros(0, 0, 0, 0).hhmmss(), "00:00:00");
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn rotation_is_six_degrees_per_second() {
        let t = WallTime::from_hms_micros(0, 0, 30, 500_000);
        assert!((t.smooth_seconds() - 30.5).abs() < 1e-9);
        assert!((t.base_rotation_deg() - 183.0).abs() < 1e-9);
    }

    #[test]
    fn rotation_is_monotone_within_a_minute() {
        let mut prev = f64::MIN;
        for s in 0..60 {
            for micros in [0, 250_000, 999_999] {
                let deg = WallTime::from_hms_micros(12, 0, s, micros).base_rotation_deg();
                assert!(deg >= prev, "rotation went backwards at {s}s+{micros}us");
                prev = deg;
            }
        }
    }

    #[test]
    fn rotation_spans_full_turn_per_minute() {
        assert_eq!(WallTime::from_hms_micros(0, 0, 0, 0).base_rotation_deg(), 0.0);
        let end = WallTime::from_hms_micros(0, 0, 59, 999_999).base_rotation_deg();
        assert!(end < 360.0);
        assert!(end > 359.9);
    }

    // ── equality / skip rule ──────────────────────────────────────────────

    #[test]
    fn equality_is_bit_for_bit() {
        let a = WallTime::from_hms_micros(1, 2, 3, 4);
        let b = WallTime::from_hms_micros(1, 2, 3, 4);
        let c = WallTime::from_hms_micros(1, 2, 3, 5);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn now_is_in_range() {
        let t = WallTime::now();
        assert!(t.hour < 24);
        assert!(t.minute < 60);
        assert!(t.second < 60);
        assert!(t.micros < 1_000_000);
    }
}
