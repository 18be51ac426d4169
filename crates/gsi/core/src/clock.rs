//! Game clock formatting.

/// Format a signed number of seconds as `MM:SS`.
///
/// The magnitude is split into zero-padded minutes and whole seconds;
/// the sign of the original value is carried as a single leading minus
/// rather than per component, so `-65` renders as `-01:05`.
pub fn format(seconds: i64) -> String {
    let magnitude = seconds.unsigned_abs();
    let mins = magnitude / 60;
    let secs = magnitude % 60;
    let sign = if seconds < 0 { "-" } else { "" };
    format!("{sign}{mins:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_minutes_and_seconds() {
        assert_eq!(format(125), "02:05");
    }

    #[test]
    fn zero_is_zero_padded() {
        assert_eq!(format(0), "00:00");
    }

    #[test]
    fn negative_carries_a_single_leading_sign() {
        assert_eq!(format(-65), "-01:05");
        assert_eq!(format(-5), "-00:05");
    }

    #[test]
    fn long_games_overflow_two_digit_minutes() {
        assert_eq!(format(6000), "100:00");
    }
}
