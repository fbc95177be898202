/// One game's playtime as reported by the platform for a single invocation.
///
/// `minutes_recent` covers the trailing two-week window and is what gets
/// displayed; `minutes_total` is the all-time figure used for ranking by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRecord {
    pub app_id: u64,
    pub name: String,
    pub minutes_recent: u64,
    pub minutes_total: u64,
}

impl PlayRecord {
    pub fn new(
        app_id: u64,
        name: impl Into<String>,
        minutes_recent: u64,
        minutes_total: u64,
    ) -> Self {
        Self {
            app_id,
            name: name.into(),
            minutes_recent,
            minutes_total,
        }
    }

    pub fn rank_key(&self, rank_by: RankBy) -> u64 {
        match rank_by {
            RankBy::Total => self.minutes_total,
            RankBy::Recent => self.minutes_recent,
        }
    }
}

/// Which playtime field orders the leaderboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankBy {
    #[default]
    Total,
    Recent,
}

#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub max_lines: usize,
    pub name_width: usize,
    pub duration_width: usize,
    pub rank_by: RankBy,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            max_lines: 3,
            name_width: 35,
            duration_width: 16,
            rank_by: RankBy::Total,
        }
    }
}
