//! Race-time formatting and the loading-dots animation.

use std::time::Instant;

use lazy_static::lazy_static;

/// Monotonic seconds source for the loading-dots animation.
///
/// Injected so tests can drive the animation deterministically.
pub trait Clock: Send + Sync {
    /// Seconds elapsed from an arbitrary fixed origin.
    fn seconds(&self) -> f64;
}

lazy_static! {
    static ref PROGRAM_START: Instant = Instant::now();
}

/// Real monotonic clock, measured from its first use in the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn seconds(&self) -> f64 {
        PROGRAM_START.elapsed().as_secs_f64()
    }
}

/// Formats a second count as fixed-width race time, `[-][HH:][MM:]SS[.fff]`.
///
/// `precision` (number of sub-second digits) is clamped to 3; rounding is
/// half-up at that precision. Out-of-range values never wrap: a rounded
/// total that comes out negative renders as all zeros, and anything at or
/// above the display ceiling (one hour without `display_hours`, 100 hours
/// with it) saturates to the maximum representable time, fractional suffix
/// included. An incorrect estimated finishing time therefore stays
/// readable instead of corrupting the display.
///
/// Minutes appear when nonzero, when `display_minutes_if_zero` is set, or
/// when hours are shown; hours appear only when requested. Every field is
/// zero-padded to exactly two digits.
///
/// ```rust
/// use textkit::time_to_string;
///
/// assert_eq!(time_to_string(65.5, 2, true, false), "01:05.50");
/// assert_eq!(time_to_string(0.0, 2, false, false), "00.00");
/// assert_eq!(time_to_string(3600.0, 2, false, false), "59:59.99");
/// ```
pub fn time_to_string(
    time: f32,
    precision: u32,
    display_minutes_if_zero: bool,
    display_hours: bool,
) -> String {
    // Sub-millisecond digits are mostly meaningless here.
    let precision = precision.min(3);
    let power = 10i64.pow(precision);

    let negative = time < 0.0;
    let time = if negative { -time } else { time };

    // The truncating cast after +0.5 rounds to the nearest unit; the cast
    // saturates, so broken caller-side estimates land in the clamps below.
    let int_time = (time * power as f32 + 0.5) as i64;

    let zeros = match precision {
        3 => ".000",
        2 => ".00",
        1 => ".0",
        _ => "",
    };
    if int_time < 0 {
        return if display_hours {
            format!("00:00:00{zeros}")
        } else if display_minutes_if_zero {
            format!("00:00{zeros}")
        } else {
            format!("00{zeros}")
        };
    }

    if (int_time >= 60 * 60 * power && !display_hours) || int_time >= 100 * 60 * 60 * power {
        let nines = match precision {
            3 => ".999",
            2 => ".99",
            1 => ".9",
            _ => "",
        };
        return if display_hours {
            format!("99:59:59{nines}")
        } else {
            format!("59:59{nines}")
        };
    }

    let subseconds = int_time % power;
    let int_time = int_time / power;
    let sec = int_time % 60;
    let int_time = int_time / 60;
    let min = int_time % 60;
    let hours = int_time / 60;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if display_hours {
        out.push_str(&format!("{hours:02}:{min:02}:{sec:02}"));
    } else if display_minutes_if_zero || min > 0 {
        out.push_str(&format!("{min:02}:{sec:02}"));
    } else {
        out.push_str(&format!("{sec:02}"));
    }
    if precision > 0 {
        out.push_str(&format!(".{subseconds:0width$}", width = precision as usize));
    }
    out
}

/// Animated "loading" suffix: a growing run of dots, space-padded to
/// `max_dots` so the rendered width never changes, advancing one dot every
/// `interval` seconds.
pub fn loading_dots_with(clock: &dyn Clock, interval: f32, max_dots: usize) -> String {
    let ticks = (clock.seconds() / interval as f64).floor() as i64;
    let nr_dots = ticks.rem_euclid(max_dots as i64 + 1) as usize;
    let mut out = ".".repeat(nr_dots);
    out.push_str(&" ".repeat(max_dots - nr_dots));
    out
}

/// [`loading_dots_with`] on the real clock with the legacy defaults:
/// half-second interval, three dots.
pub fn loading_dots() -> String {
    loading_dots_with(&SystemClock, 0.5, 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeClock(f64);

    impl Clock for FakeClock {
        fn seconds(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_seconds_only() {
        assert_eq!(time_to_string(0.0, 2, false, false), "00.00");
        assert_eq!(time_to_string(7.25, 2, false, false), "07.25");
        assert_eq!(time_to_string(7.0, 0, false, false), "07");
    }

    #[test]
    fn test_minutes_display() {
        assert_eq!(time_to_string(65.5, 2, true, false), "01:05.50");
        assert_eq!(time_to_string(65.5, 2, false, false), "01:05.50");
        assert_eq!(time_to_string(5.0, 2, true, false), "00:05.00");
    }

    #[test]
    fn test_half_up_rounding_carries() {
        // 59.999 rounds up to a full minute at precision 2.
        assert_eq!(time_to_string(59.999, 2, false, false), "01:00.00");
        assert_eq!(time_to_string(1.2345, 3, false, false), "01.235");
    }

    #[test]
    fn test_negative_time_is_flipped_and_prefixed() {
        assert_eq!(time_to_string(-1.0, 0, false, false), "-01");
        assert_eq!(time_to_string(-65.5, 2, true, false), "-01:05.50");
    }

    #[test]
    fn test_saturation_without_hours() {
        assert_eq!(time_to_string(3600.0, 2, false, false), "59:59.99");
        assert_eq!(time_to_string(1e9, 3, false, false), "59:59.999");
        assert_eq!(time_to_string(1e9, 0, false, false), "59:59");
    }

    #[test]
    fn test_saturation_with_hours() {
        assert_eq!(time_to_string(3600.0, 0, false, true), "01:00:00");
        assert_eq!(time_to_string(360_000.0, 0, false, true), "99:59:59");
        assert_eq!(time_to_string(1e9, 2, false, true), "99:59:59.99");
    }

    #[test]
    fn test_precision_clamped_to_three() {
        assert_eq!(time_to_string(1.5, 7, false, false), "01.500");
    }

    #[test]
    fn test_nan_renders_as_zero() {
        assert_eq!(time_to_string(f32::NAN, 2, true, false), "00:00.00");
    }

    #[test]
    fn test_loading_dots_cycle() {
        assert_eq!(loading_dots_with(&FakeClock(0.0), 0.5, 3), "   ");
        assert_eq!(loading_dots_with(&FakeClock(0.6), 0.5, 3), ".  ");
        assert_eq!(loading_dots_with(&FakeClock(1.2), 0.5, 3), ".. ");
        assert_eq!(loading_dots_with(&FakeClock(1.7), 0.5, 3), "...");
        assert_eq!(loading_dots_with(&FakeClock(2.1), 0.5, 3), "   ");
    }

    #[test]
    fn test_loading_dots_width_is_constant() {
        for t in [0.0, 0.3, 0.9, 1.4, 2.0, 5.5] {
            assert_eq!(loading_dots_with(&FakeClock(t), 0.5, 3).len(), 3);
        }
    }
}
