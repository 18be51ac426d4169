//! Hero level and XP progression.
//!
//! The progression table is a fixed game constant: cumulative XP
//! required to reach each level from 1 to 30. It is looked up, never
//! computed.

/// Maximum hero level; level 30 has no next-level target.
pub const MAX_LEVEL: u8 = 30;

/// Cumulative XP required to reach level `index + 1`.
pub const XP_TABLE: [u32; MAX_LEVEL as usize] = [
    0, 200, 500, 900, 1400, 2000, 2700, 3500, 4400, 5400, 6500, 7700, 9000, 10400, 11900, 13500,
    15200, 17000, 18900, 20900, 23000, 25200, 27500, 29900, 32400, 35000, 38000, 41500, 45500,
    50000,
];

/// Cumulative XP required to reach `level`, or 0 outside [1, 30].
pub fn xp_threshold(level: u8) -> u32 {
    if level < 1 || level > MAX_LEVEL {
        return 0;
    }
    XP_TABLE[level as usize - 1]
}

/// Progress through the current level, derived from cumulative XP.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelProgress {
    /// Percentage through the current level, clamped to [0, 100].
    pub percent: u8,
    /// Label of the level being worked toward; "MAX" at the cap.
    pub next_label: String,
    /// XP still needed to reach the next level.
    pub remaining: u32,
}

/// Derive level progress from the current level and cumulative XP.
///
/// Levels outside [1, 30] are clamped before lookup. At the cap the
/// progress saturates: 100%, "MAX", nothing remaining.
pub fn progress(level: u8, current_xp: u32) -> LevelProgress {
    let level = level.clamp(1, MAX_LEVEL);

    if level >= MAX_LEVEL {
        return LevelProgress {
            percent: 100,
            next_label: "MAX".to_string(),
            remaining: 0,
        };
    }

    let floor = xp_threshold(level);
    let ceiling = xp_threshold(level + 1);
    let needed = ceiling - floor;
    // Upstream XP can lag behind the reported level for a frame.
    let progressed = current_xp.saturating_sub(floor);

    let percent = ((progressed as f64 / needed as f64) * 100.0).round();
    let percent = percent.clamp(0.0, 100.0) as u8;

    LevelProgress {
        percent,
        next_label: (level + 1).to_string(),
        remaining: needed.saturating_sub(progressed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_endpoints() {
        assert_eq!(xp_threshold(1), 0);
        assert_eq!(xp_threshold(2), 200);
        assert_eq!(xp_threshold(30), 50000);
    }

    #[test]
    fn threshold_out_of_range_is_zero() {
        assert_eq!(xp_threshold(0), 0);
        assert_eq!(xp_threshold(31), 0);
    }

    #[test]
    fn halfway_through_level_one() {
        let p = progress(1, 100);
        assert_eq!(p.percent, 50);
        assert_eq!(p.next_label, "2");
        assert_eq!(p.remaining, 100);
    }

    #[test]
    fn max_level_saturates() {
        let p = progress(30, 123);
        assert_eq!(p.percent, 100);
        assert_eq!(p.next_label, "MAX");
        assert_eq!(p.remaining, 0);

        // Anything above the cap behaves the same.
        assert_eq!(progress(99, 0), p);
    }

    #[test]
    fn xp_below_floor_clamps_to_zero_percent() {
        // Level 5 floor is 1400; report less than that.
        let p = progress(5, 1000);
        assert_eq!(p.percent, 0);
        assert_eq!(p.remaining, 600);
    }

    #[test]
    fn xp_above_ceiling_clamps_to_hundred_percent() {
        // Level 1 ceiling is 200.
        let p = progress(1, 5000);
        assert_eq!(p.percent, 100);
        assert_eq!(p.remaining, 0);
    }
}
