use once_cell::sync::OnceCell;
use std::collections::HashMap;

static EMOJI_TABLE: OnceCell<HashMap<u64, &'static str>> = OnceCell::new();

pub fn get_emoji_table() -> &'static HashMap<u64, &'static str> {
    EMOJI_TABLE.get_or_init(|| {
        HashMap::from([
            (730, "🔫 "),    // Counter-Strike
            (222880, "🔫 "), // Insurgency
            (265630, "🔫 "), // Fistful of Frags
            (271590, "🚓 "), // Grand Theft Auto V
            (578080, "🍳 "), // PUBG
            (431960, "💻 "), // Wallpaper Engine
            (8930, "🌏 "),   // Civilization V
            (644560, "🔞 "), // Mirror
            (359550, "🔫 "), // Rainbow Six Siege
        ])
    })
}

/// Prefixes `name` with the game's emoji, or returns it unadorned.
pub fn emoji_prefix(app_id: u64, name: &str) -> String {
    match get_emoji_table().get(&app_id) {
        Some(emoji) => format!("{emoji}{name}"),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_game_gets_prefixed() {
        assert_eq!(emoji_prefix(730, "Counter-Strike 2"), "🔫 Counter-Strike 2");
        assert_eq!(emoji_prefix(578080, "PUBG"), "🍳 PUBG");
    }

    #[test]
    fn unknown_game_is_left_alone() {
        assert_eq!(emoji_prefix(1, "Some Game"), "Some Game");
    }
}
