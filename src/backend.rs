//! Session service contracts
//!
//! Wire types exchanged with the backend that gates daily plays and keeps
//! the leaderboard. The backend itself lives elsewhere; these are the
//! request/response shapes the host sends once at session start and once at
//! session end, plus the UTC day-key that scopes all daily state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a play request was allowed or denied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayReason {
    FreePlay,
    HasLives,
    NoLives,
    UserNotFound,
}

/// Start-of-session request: may the user play, and consume a life if so
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRequest {
    pub user_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayResponse {
    pub success: bool,
    pub can_play: bool,
    pub reason: PlayReason,
    #[serde(default)]
    pub lives_remaining: u32,
    #[serde(default)]
    pub stats: Option<UserStats>,
}

/// End-of-session request: report the final score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub user_id: u64,
    pub username: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub new_best: bool,
    /// 1-indexed daily rank; -1 when unranked
    pub rank: i32,
}

/// One row of the daily leaderboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingEntry {
    pub user_id: u64,
    pub username: String,
    pub score: u32,
    pub rank: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingResponse {
    pub entries: Vec<RankingEntry>,
}

/// Per-user daily stats, day-keyed server side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub today_best: u32,
    pub today_games: u32,
    pub all_time_best: u32,
    pub rank: i32,
    pub lives: u32,
    pub free_play_used: bool,
}

/// UTC calendar-date key scoping daily state, from epoch milliseconds
pub fn day_key(epoch_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms)
        .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH)
        .format("%Y-%m-%d")
        .to_string()
}
