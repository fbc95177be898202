use crate::domain::PlayRecord;
use crate::error::{BoxError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const RECENTLY_PLAYED_URL: &str =
    "https://api.steampowered.com/IPlayerService/GetRecentlyPlayedGames/v1/";

#[derive(Debug, Serialize, Deserialize)]
pub struct RecentlyPlayedResponse {
    pub response: RecentlyPlayedGames,
}

/// Private profiles come back as an empty `response` object.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RecentlyPlayedGames {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub games: Vec<SteamGame>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteamGame {
    pub appid: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub playtime_2weeks: u64,
    #[serde(default)]
    pub playtime_forever: u64,
}

impl From<SteamGame> for PlayRecord {
    fn from(game: SteamGame) -> Self {
        PlayRecord::new(
            game.appid,
            game.name,
            game.playtime_2weeks,
            game.playtime_forever,
        )
    }
}

impl RecentlyPlayedGames {
    pub fn into_records(self) -> Vec<PlayRecord> {
        if self.total_count == 0 {
            return Vec::new();
        }
        self.games.into_iter().map(PlayRecord::from).collect()
    }
}

pub struct SteamClient {
    client: Client,
    api_key: String,
}

impl SteamClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    pub async fn get_recent_playtime(&self, steam_id: u64, count: u32) -> Result<Vec<PlayRecord>> {
        let steam_id_param = steam_id.to_string();
        let count_param = count.to_string();
        let response = self
            .client
            .get(RECENTLY_PLAYED_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("steamid", steam_id_param.as_str()),
                ("count", count_param.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoxError::Api {
                service: "Steam",
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: RecentlyPlayedResponse = response.json().await?;
        debug!(
            "Steam reported {} recently played games",
            body.response.total_count
        );

        let records = body.response.into_records();
        info!(
            "Fetched {} recently played games for {steam_id}",
            records.len()
        );
        Ok(records)
    }
}
