use crate::domain::{emoji_prefix, Layout, PlayRecord};
use std::cmp::Reverse;

pub const NO_RECENT_GAMES: &str = "Haven't played games recently";

/// Ranks `records` and renders at most `layout.max_lines` leaderboard lines.
///
/// Ranking uses `layout.rank_by` while the displayed duration is always the
/// recent-window playtime. Ties keep their input order.
pub fn summarize(records: &[PlayRecord], layout: &Layout) -> Vec<String> {
    if records.is_empty() {
        return vec![NO_RECENT_GAMES.to_string()];
    }

    let mut ranked: Vec<&PlayRecord> = records.iter().collect();
    ranked.sort_by_key(|record| Reverse(record.rank_key(layout.rank_by)));

    ranked
        .into_iter()
        .take(layout.max_lines)
        .map(|record| {
            let name = emoji_prefix(record.app_id, &record.name);
            let duration = format_duration(record.minutes_recent);
            format!(
                "{} {}",
                pad(&name, " ", layout.name_width),
                pad(&duration, "", layout.duration_width)
            )
        })
        .collect()
}

pub fn format_duration(minutes: u64) -> String {
    format!("{} hrs {} mins", minutes / 60, minutes % 60)
}

/// Right-pads `s` with `fill` until it is `width` chars long. Never truncates.
pub fn pad(s: &str, fill: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    format!("{s}{}", fill.repeat(width - len))
}
