//! Cosmetic hero name handling.

const NAME_PREFIX: &str = "npc_dota_hero_";

/// Turn an internal hero identifier into a display name: strip the
/// namespace prefix, replace separators with spaces, uppercase.
pub fn display_name(raw: &str) -> String {
    raw.strip_prefix(NAME_PREFIX)
        .unwrap_or(raw)
        .replace('_', " ")
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_and_uppercases() {
        assert_eq!(display_name("npc_dota_hero_pudge"), "PUDGE");
    }

    #[test]
    fn internal_separators_become_spaces() {
        assert_eq!(
            display_name("npc_dota_hero_crystal_maiden"),
            "CRYSTAL MAIDEN"
        );
    }

    #[test]
    fn unprefixed_names_pass_through() {
        assert_eq!(display_name("pudge"), "PUDGE");
    }
}
