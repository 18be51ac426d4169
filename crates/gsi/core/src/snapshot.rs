//! Deserialized mirror of one telemetry payload.
//!
//! The Game State Integration relay forwards far more fields than the
//! dashboard consumes; unknown keys are ignored and absent sub-records
//! collapse to their defaults so a partial payload never fails to
//! decode.

use serde::Deserialize;

use crate::error::SnapshotError;

/// One telemetry payload representing the game's state at a point in
/// time. Ephemeral: fetched, derived from, rendered, discarded.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub hero: HeroState,
    #[serde(default)]
    pub player: PlayerState,
    #[serde(default)]
    pub map: MapState,
}

impl Snapshot {
    /// Decode a snapshot from a raw JSON body.
    pub fn from_json(body: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Hero vitals and progression as reported by the game client.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HeroState {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub health: u32,
    #[serde(default)]
    pub max_health: u32,
    #[serde(default)]
    pub mana: u32,
    #[serde(default)]
    pub max_mana: u32,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub xp: u32,
    /// Seconds until the hero re-enters play; fractional in some game
    /// builds, zero or absent while alive.
    #[serde(default)]
    pub respawn_seconds: f64,
}

impl Default for HeroState {
    fn default() -> Self {
        Self {
            name: String::new(),
            health: 0,
            max_health: 0,
            mana: 0,
            max_mana: 0,
            level: default_level(),
            xp: 0,
            respawn_seconds: 0.0,
        }
    }
}

fn default_level() -> u8 {
    1
}

/// Player scoreboard and economy totals.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PlayerState {
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub gold_reliable: u32,
}

/// Map clock and time of day. Negative clock values denote the
/// pre-game countdown.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MapState {
    #[serde(default)]
    pub clock_time: i64,
    #[serde(default = "default_daytime")]
    pub daytime: bool,
}

impl Default for MapState {
    fn default() -> Self {
        Self {
            clock_time: 0,
            daytime: default_daytime(),
        }
    }
}

fn default_daytime() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_decodes() {
        let body = r#"{
            "hero": {
                "name": "npc_dota_hero_pudge",
                "health": 800, "max_health": 800,
                "mana": 400, "max_mana": 400,
                "level": 12, "xp": 9500, "respawn_seconds": 0
            },
            "player": {
                "kills": 3, "deaths": 1, "assists": 7,
                "gold": 2500, "gold_reliable": 800
            },
            "map": { "clock_time": 754, "daytime": false }
        }"#;

        let snapshot = Snapshot::from_json(body).unwrap();
        assert_eq!(snapshot.hero.name, "npc_dota_hero_pudge");
        assert_eq!(snapshot.hero.level, 12);
        assert_eq!(snapshot.player.gold, 2500);
        assert_eq!(snapshot.map.clock_time, 754);
        assert!(!snapshot.map.daytime);
    }

    #[test]
    fn absent_fields_default() {
        let snapshot = Snapshot::from_json(r#"{"hero": {"name": "x"}}"#).unwrap();
        assert_eq!(snapshot.hero.level, 1);
        assert_eq!(snapshot.player.kills, 0);
        assert_eq!(snapshot.player.gold, 0);
        assert_eq!(snapshot.map.clock_time, 0);
        assert!(snapshot.map.daytime);
    }

    #[test]
    fn unknown_fields_ignored() {
        let body = r#"{
            "hero": { "name": "x", "talent_1": true },
            "buildings": { "radiant": {} }
        }"#;
        assert!(Snapshot::from_json(body).is_ok());
    }

    #[test]
    fn malformed_body_rejected() {
        assert!(Snapshot::from_json("not json").is_err());
    }

    #[test]
    fn fractional_respawn_decodes() {
        let snapshot = Snapshot::from_json(r#"{"hero": {"respawn_seconds": 11.4}}"#).unwrap();
        assert!((snapshot.hero.respawn_seconds - 11.4).abs() < f64::EPSILON);
    }
}
