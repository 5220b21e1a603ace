//! Offer countdown state.
//!
//! A `CountdownState` is a plain value: the display component owns one, replaces
//! it on every tick and renders it. Once it reaches `00:00:00` it stays there.

use std::fmt;

const SECONDS_PER_MINUTE: u32 = 60;
const SECONDS_PER_HOUR: u32 = 3600;
const MAX_HOURS: u32 = 99;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownState {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl CountdownState {
    pub const ZERO: CountdownState = CountdownState::new(0, 0, 0);

    /// Out-of-range fields are clamped to 99 hours and 59 minutes/seconds.
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours: if hours > MAX_HOURS { MAX_HOURS } else { hours },
            minutes: if minutes > 59 { 59 } else { minutes },
            seconds: if seconds > 59 { 59 } else { seconds },
        }
    }

    /// Builds a state from a plain number of seconds, capped at 99:59:59.
    pub fn from_total_seconds(total: u32) -> Self {
        let max = MAX_HOURS * SECONDS_PER_HOUR + 59 * SECONDS_PER_MINUTE + 59;
        let total = total.min(max);
        Self {
            hours: total / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.hours * SECONDS_PER_HOUR + self.minutes * SECONDS_PER_MINUTE + self.seconds
    }

    pub fn is_expired(&self) -> bool {
        *self == Self::ZERO
    }

    /// One elapsed second. Borrows from minutes, then hours; never wraps below zero.
    pub fn tick(self) -> Self {
        if self.seconds > 0 {
            Self { seconds: self.seconds - 1, ..self }
        } else if self.minutes > 0 {
            Self { minutes: self.minutes - 1, seconds: 59, ..self }
        } else if self.hours > 0 {
            Self::new(self.hours - 1, 59, 59)
        } else {
            self
        }
    }

    /// Applies `ticks` elapsed seconds at once.
    pub fn advance(self, ticks: u32) -> Self {
        let mut state = self;
        for _ in 0..ticks {
            if state.is_expired() {
                break;
            }
            state = state.tick();
        }
        state
    }

    /// Display fields with their labels, hours first.
    pub fn fields(&self) -> [(&'static str, String); 3] {
        [
            ("Horas", pad2(self.hours)),
            ("Minutos", pad2(self.minutes)),
            ("Segundos", pad2(self.seconds)),
        ]
    }
}

impl Default for CountdownState {
    fn default() -> Self {
        crate::config::COUNTDOWN_START
    }
}

impl fmt::Display for CountdownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {} : {}",
            pad2(self.hours),
            pad2(self.minutes),
            pad2(self.seconds)
        )
    }
}

/// Zero-pads to two digits. Larger values keep all their digits.
pub fn pad2(value: u32) -> String {
    format!("{:02}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_SECONDS: u32 = 2 * 3600 + 59 * 60 + 59;

    #[test]
    fn test_starts_at_two_fifty_nine() {
        let state = CountdownState::default();
        assert_eq!(state, CountdownState::new(2, 59, 59));
        assert_eq!(state.to_string(), "02 : 59 : 59");
        assert_eq!(state.total_seconds(), START_SECONDS);
    }

    #[test]
    fn test_tick_borrows_through_fields() {
        assert_eq!(CountdownState::new(1, 2, 3).tick(), CountdownState::new(1, 2, 2));
        assert_eq!(CountdownState::new(1, 2, 0).tick(), CountdownState::new(1, 1, 59));
        assert_eq!(CountdownState::new(1, 0, 0).tick(), CountdownState::new(0, 59, 59));
        assert_eq!(CountdownState::new(0, 0, 1).tick(), CountdownState::ZERO);
    }

    #[test]
    fn test_plateau_at_zero() {
        let mut state = CountdownState::ZERO;
        for _ in 0..10 {
            state = state.tick();
            assert_eq!(state, CountdownState::ZERO);
        }
        assert!(state.is_expired());
        assert_eq!(state.advance(5000), CountdownState::ZERO);
    }

    #[test]
    fn test_ticks_match_total_seconds_decomposition() {
        let start = CountdownState::default();
        let mut state = start;
        for n in 0..=(START_SECONDS + 120) {
            let expected = CountdownState::from_total_seconds(START_SECONDS.saturating_sub(n));
            assert_eq!(state, expected, "after {} ticks", n);
            state = state.tick();
        }
    }

    #[test]
    fn test_advance_matches_repeated_ticks() {
        let start = CountdownState::default();
        for n in [0, 1, 59, 60, 61, 3599, 3600, 3601, START_SECONDS, START_SECONDS + 1] {
            let stepped = (0..n).fold(start, |s, _| s.tick());
            assert_eq!(start.advance(n), stepped, "n = {}", n);
        }
    }

    #[test]
    fn test_countdown_scenario() {
        let state = CountdownState::default();
        assert_eq!(state.to_string(), "02 : 59 : 59");

        let state = state.advance(61);
        assert_eq!(state.to_string(), "02 : 58 : 58");

        let state = state.advance(3 * 3600);
        assert_eq!(state.to_string(), "00 : 00 : 00");
        assert_eq!(state.tick().to_string(), "00 : 00 : 00");
    }

    #[test]
    fn test_from_total_seconds_caps_hours() {
        assert_eq!(CountdownState::from_total_seconds(0), CountdownState::ZERO);
        assert_eq!(CountdownState::from_total_seconds(3661), CountdownState::new(1, 1, 1));
        assert_eq!(CountdownState::from_total_seconds(u32::MAX), CountdownState::new(99, 59, 59));
    }

    #[test]
    fn test_new_clamps_out_of_range_fields() {
        let state = CountdownState::new(u32::MAX, 75, 60);
        assert_eq!((state.hours, state.minutes, state.seconds), (99, 59, 59));
        assert_eq!(state.total_seconds(), 99 * 3600 + 59 * 60 + 59);
        assert_eq!(state.to_string(), "99 : 59 : 59");
    }

    #[test]
    fn test_pad2() {
        for v in 0..10 {
            assert_eq!(pad2(v), format!("0{}", v));
        }
        for v in 10..100 {
            assert_eq!(pad2(v), v.to_string());
        }
        assert_eq!(pad2(123), "123");
    }

    #[test]
    fn test_fields_are_labelled_and_padded() {
        let fields = CountdownState::new(2, 5, 0).fields();
        assert_eq!(fields[0], ("Horas", "02".to_string()));
        assert_eq!(fields[1], ("Minutos", "05".to_string()));
        assert_eq!(fields[2], ("Segundos", "00".to_string()));
    }
}
