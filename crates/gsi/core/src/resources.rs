//! Health and mana pool percentages.

/// Rounded percentage of `current` against `max`.
///
/// `max` is floored at 1 to guard the division; the result is not
/// otherwise clamped, so anomalous upstream data (overheal, stale
/// maximums) can legitimately report more than 100%.
pub fn percent(current: u32, max: u32) -> u32 {
    let max = max.max(1);
    ((current as f64 / max as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_pool_is_one_hundred() {
        assert_eq!(percent(800, 800), 100);
    }

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
    }

    #[test]
    fn zero_max_does_not_divide_by_zero() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(5, 0), 500);
    }

    #[test]
    fn overheal_exceeds_one_hundred() {
        assert_eq!(percent(900, 800), 113);
    }
}
