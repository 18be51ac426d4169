//! Display-set view model derived from a telemetry [`Snapshot`].
//!
//! [`DisplaySet`] is the complete outbound render contract: every value
//! a widget shows, already formatted. It has no identity of its own -
//! it is recomputed from the latest snapshot each cycle and discarded
//! after rendering, and the same snapshot always derives the same set.

use chrono::{DateTime, Local};

use gsi_core::{Snapshot, clock, economy, hero, levels, resources};
use poller::TelemetryEvent;

/// Status line shown while a game is live.
const CONNECTED_TEXT: &str = "Connected to game";

/// Flat set of formatted display values for one render cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplaySet {
    /// Connection flag driving the status indicator.
    pub connected: bool,
    pub status_text: String,

    pub clock_text: String,
    pub daytime: bool,

    pub hero_name: String,
    pub level_text: String,
    pub kills_text: String,
    pub deaths_text: String,
    pub assists_text: String,
    /// Respawn countdown, present only while dead with time remaining.
    pub respawn_text: Option<String>,

    pub health: PoolView,
    pub mana: PoolView,

    pub next_level_label: String,
    pub xp_remaining_text: String,
    pub xp_percent: u8,

    pub gpm_text: String,
    pub xpm_text: String,
    /// Total gold only; item valuation is deliberately not modeled.
    pub net_worth_text: String,
    pub total_gold_text: String,
    pub reliable_gold_text: String,
    pub unreliable_gold_text: String,

    pub buyback_cost_text: String,
    pub gold_after_buyback_text: String,
    pub buyback_label: String,

    pub last_update_text: String,
}

/// Current/max resource pool with its bar percentage.
#[derive(Clone, Debug, PartialEq)]
pub struct PoolView {
    pub value_text: String,
    /// May exceed 100 on anomalous upstream data; widgets cap the bar,
    /// not the label.
    pub percent: u32,
}

impl PoolView {
    fn from_values(current: u32, max: u32) -> Self {
        Self {
            value_text: format!("{current} / {max}"),
            percent: resources::percent(current, max),
        }
    }

    fn placeholder() -> Self {
        Self {
            value_text: "- / -".to_string(),
            percent: 0,
        }
    }
}

impl DisplaySet {
    /// Derive every display value from one snapshot.
    pub fn from_snapshot(snapshot: &Snapshot, last_update: Option<DateTime<Local>>) -> Self {
        let hero_state = &snapshot.hero;
        let player = &snapshot.player;
        let map = &snapshot.map;

        let level = hero_state.level.clamp(1, levels::MAX_LEVEL);
        let progress = levels::progress(level, hero_state.xp);
        let buyback = economy::buyback(level, player.gold);

        let respawn = hero_state.respawn_seconds;
        let respawn_text = if respawn > 0.0 {
            Some(format!("{}s", respawn.ceil() as u64))
        } else {
            None
        };

        Self {
            connected: true,
            status_text: CONNECTED_TEXT.to_string(),

            clock_text: clock::format(map.clock_time),
            daytime: map.daytime,

            hero_name: if hero_state.name.is_empty() {
                "No Hero Selected".to_string()
            } else {
                hero::display_name(&hero_state.name)
            },
            level_text: level.to_string(),
            kills_text: player.kills.to_string(),
            deaths_text: player.deaths.to_string(),
            assists_text: player.assists.to_string(),
            respawn_text,

            health: PoolView::from_values(hero_state.health, hero_state.max_health),
            mana: PoolView::from_values(hero_state.mana, hero_state.max_mana),

            next_level_label: progress.next_label,
            xp_remaining_text: progress.remaining.to_string(),
            xp_percent: progress.percent,

            gpm_text: economy::per_minute(player.gold, map.clock_time).to_string(),
            xpm_text: economy::per_minute(hero_state.xp, map.clock_time).to_string(),
            net_worth_text: player.gold.to_string(),
            total_gold_text: player.gold.to_string(),
            reliable_gold_text: player.gold_reliable.to_string(),
            unreliable_gold_text: economy::unreliable_gold(player.gold, player.gold_reliable)
                .to_string(),

            buyback_cost_text: buyback.cost.to_string(),
            gold_after_buyback_text: buyback.gold_after.to_string(),
            buyback_label: if buyback.affordable {
                "Buyback available".to_string()
            } else {
                format!("Need {} more gold", buyback.shortfall)
            },

            last_update_text: last_update
                .map(|stamp| stamp.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }

    /// The reset contract: placeholder values shown while disconnected.
    /// No stale field survives a disconnect.
    pub fn placeholder() -> Self {
        Self {
            connected: false,
            status_text: "Disconnected".to_string(),

            clock_text: "00:00".to_string(),
            daytime: true,

            hero_name: "No Hero Selected".to_string(),
            level_text: "-".to_string(),
            kills_text: "0".to_string(),
            deaths_text: "0".to_string(),
            assists_text: "0".to_string(),
            respawn_text: None,

            health: PoolView::placeholder(),
            mana: PoolView::placeholder(),

            next_level_label: "-".to_string(),
            xp_remaining_text: "-".to_string(),
            xp_percent: 0,

            gpm_text: "0".to_string(),
            xpm_text: "0".to_string(),
            net_worth_text: "0".to_string(),
            total_gold_text: "0".to_string(),
            reliable_gold_text: "0".to_string(),
            unreliable_gold_text: "0".to_string(),

            buyback_cost_text: "-".to_string(),
            gold_after_buyback_text: "-".to_string(),
            buyback_label: "Unknown".to_string(),

            last_update_text: "-".to_string(),
        }
    }

    /// Placeholder set carrying the disconnect reason as status text.
    pub fn disconnected(reason: impl Into<String>) -> Self {
        Self {
            status_text: reason.into(),
            ..Self::placeholder()
        }
    }

    /// Map a telemetry event straight to its display set.
    pub fn from_event(event: &TelemetryEvent) -> Self {
        match event {
            TelemetryEvent::Connected {
                snapshot,
                last_update,
            } => Self::from_snapshot(snapshot, *last_update),
            TelemetryEvent::Disconnected { reason } => Self::disconnected(reason.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsi_core::Snapshot;

    fn sample_snapshot() -> Snapshot {
        Snapshot::from_json(
            r#"{
                "hero": {
                    "name": "npc_dota_hero_crystal_maiden",
                    "health": 640, "max_health": 800,
                    "mana": 300, "max_mana": 400,
                    "level": 5, "xp": 2100, "respawn_seconds": 0
                },
                "player": {
                    "kills": 2, "deaths": 4, "assists": 9,
                    "gold": 200, "gold_reliable": 150
                },
                "map": { "clock_time": 120, "daytime": true }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn derives_the_full_set_from_a_snapshot() {
        let set = DisplaySet::from_snapshot(&sample_snapshot(), None);

        assert!(set.connected);
        assert_eq!(set.clock_text, "02:00");
        assert_eq!(set.hero_name, "CRYSTAL MAIDEN");
        assert_eq!(set.level_text, "5");
        assert_eq!(set.kills_text, "2");
        assert_eq!(set.health.value_text, "640 / 800");
        assert_eq!(set.health.percent, 80);
        assert_eq!(set.mana.percent, 75);
        // Level 5 spans 1400..2000; 2100 XP clamps to 100%.
        assert_eq!(set.xp_percent, 100);
        assert_eq!(set.next_level_label, "6");
        // 200 gold over 2 minutes.
        assert_eq!(set.gpm_text, "100");
        assert_eq!(set.xpm_text, "1050");
        assert_eq!(set.unreliable_gold_text, "50");
        // Buyback at level 5 costs 175.
        assert_eq!(set.buyback_cost_text, "175");
        assert_eq!(set.buyback_label, "Buyback available");
        assert_eq!(set.gold_after_buyback_text, "25");
        assert_eq!(set.net_worth_text, set.total_gold_text);
    }

    #[test]
    fn identical_snapshots_derive_identical_sets() {
        let snapshot = sample_snapshot();
        let first = DisplaySet::from_snapshot(&snapshot, None);
        let second = DisplaySet::from_snapshot(&snapshot, None);
        assert_eq!(first, second);
    }

    #[test]
    fn respawn_shown_only_while_counting_down() {
        let mut snapshot = sample_snapshot();
        assert_eq!(DisplaySet::from_snapshot(&snapshot, None).respawn_text, None);

        snapshot.hero.respawn_seconds = 11.4;
        assert_eq!(
            DisplaySet::from_snapshot(&snapshot, None).respawn_text,
            Some("12s".to_string())
        );
    }

    #[test]
    fn disconnect_resets_every_field() {
        let set = DisplaySet::from_event(&TelemetryEvent::disconnected("No game detected"));

        assert!(!set.connected);
        assert_eq!(set.status_text, "No game detected");
        assert_eq!(
            DisplaySet {
                status_text: DisplaySet::placeholder().status_text,
                ..set
            },
            DisplaySet::placeholder()
        );
    }

    #[test]
    fn unaffordable_buyback_reports_shortfall() {
        let mut snapshot = sample_snapshot();
        snapshot.player.gold = 100;

        let set = DisplaySet::from_snapshot(&snapshot, None);
        assert_eq!(set.buyback_label, "Need 75 more gold");
        assert_eq!(set.gold_after_buyback_text, "0");
    }
}
