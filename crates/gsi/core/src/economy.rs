//! Player economy derivations: per-minute rates, gold breakdown, and
//! buyback math.

/// Buyback base cost in gold.
const BUYBACK_BASE_COST: u32 = 100;

/// Additional buyback cost per hero level.
const BUYBACK_COST_PER_LEVEL: u32 = 15;

/// Cumulative total divided by elapsed game minutes, rounded.
///
/// Returns 0 until the game clock has actually started (pre-game
/// countdown and the opening tick both report non-positive clocks).
pub fn per_minute(total: u32, clock_seconds: i64) -> u32 {
    if clock_seconds <= 0 {
        return 0;
    }
    let minutes = clock_seconds as f64 / 60.0;
    (total as f64 / minutes).round() as u32
}

/// Unreliable gold is the remainder after reliable gold is subtracted
/// from the total. Inconsistent upstream data clamps to zero rather
/// than going negative.
pub fn unreliable_gold(total: u32, reliable: u32) -> u32 {
    total.saturating_sub(reliable)
}

/// Buyback cost and affordability for a given level and gold total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buyback {
    pub cost: u32,
    pub affordable: bool,
    /// Gold left after paying the cost; zero when unaffordable.
    pub gold_after: u32,
    /// Gold missing when unaffordable; zero otherwise.
    pub shortfall: u32,
}

/// Derive buyback state: cost scales linearly with level.
pub fn buyback(level: u8, total_gold: u32) -> Buyback {
    let level = level.clamp(1, crate::levels::MAX_LEVEL);
    let cost = BUYBACK_BASE_COST + BUYBACK_COST_PER_LEVEL * level as u32;
    let affordable = total_gold >= cost;

    Buyback {
        cost,
        affordable,
        gold_after: total_gold.saturating_sub(cost),
        shortfall: if affordable { 0 } else { cost - total_gold },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_from_cumulative_total() {
        assert_eq!(per_minute(600, 120), 300);
        assert_eq!(per_minute(2500, 754), 199);
    }

    #[test]
    fn rate_is_zero_before_the_clock_starts() {
        assert_eq!(per_minute(600, 0), 0);
        assert_eq!(per_minute(600, -30), 0);
    }

    #[test]
    fn unreliable_is_the_remainder() {
        assert_eq!(unreliable_gold(2500, 800), 1700);
    }

    #[test]
    fn unreliable_clamps_on_inconsistent_input() {
        assert_eq!(unreliable_gold(100, 800), 0);
    }

    #[test]
    fn buyback_short_by_seventy_five() {
        let b = buyback(5, 100);
        assert_eq!(b.cost, 175);
        assert!(!b.affordable);
        assert_eq!(b.shortfall, 75);
        assert_eq!(b.gold_after, 0);
    }

    #[test]
    fn buyback_affordable_with_change() {
        let b = buyback(5, 200);
        assert_eq!(b.cost, 175);
        assert!(b.affordable);
        assert_eq!(b.gold_after, 25);
        assert_eq!(b.shortfall, 0);
    }

    #[test]
    fn buyback_level_is_clamped() {
        assert_eq!(buyback(0, 0).cost, 115);
        assert_eq!(buyback(255, 0).cost, 550);
    }
}
