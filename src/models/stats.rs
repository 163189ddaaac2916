use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Queryable)]
pub struct TournamentPlayerStats {
    pub id: i32,
    #[serde(rename = "tournamentId")]
    pub tournament_id: i32,
    #[serde(rename = "playerId")]
    pub player_id: i32,
    #[serde(rename = "matchesPlayed")]
    pub matches_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    #[serde(rename = "goalsScored")]
    pub goals_scored: i32,
    #[serde(rename = "goalsConceded")]
    pub goals_conceded: i32,
    #[serde(rename = "conditionalPoints")]
    pub conditional_points: i32,
    #[serde(rename = "totalPoints")]
    pub total_points: i32,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = crate::models::schema::tournament_player_stats)]
pub struct NewTournamentPlayerStats {
    pub tournament_id: i32,
    pub player_id: i32,
    pub matches_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_scored: i32,
    pub goals_conceded: i32,
    pub conditional_points: i32,
    pub total_points: i32,
}

/// One row of a player leaderboard, rank already assigned.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    #[serde(rename = "playerId")]
    pub player_id: i32,
    #[serde(rename = "playerName")]
    pub player_name: String,
    #[serde(rename = "clubId")]
    pub club_id: Option<i32>,
    #[serde(rename = "matchesPlayed")]
    pub matches_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    #[serde(rename = "goalsScored")]
    pub goals_scored: i32,
    #[serde(rename = "goalsConceded")]
    pub goals_conceded: i32,
    #[serde(rename = "goalDifference")]
    pub goal_difference: i32,
    #[serde(rename = "winRate")]
    pub win_rate: f64,
    #[serde(rename = "totalPoints")]
    pub total_points: i32,
}

/// A club rollup built from all of the club's players' match results.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClubLeaderboardEntry {
    pub rank: usize,
    #[serde(rename = "clubId")]
    pub club_id: i32,
    #[serde(rename = "clubName")]
    pub club_name: String,
    #[serde(rename = "matchesPlayed")]
    pub matches_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    #[serde(rename = "goalsScored")]
    pub goals_scored: i32,
    #[serde(rename = "goalsConceded")]
    pub goals_conceded: i32,
    #[serde(rename = "goalDifference")]
    pub goal_difference: i32,
    #[serde(rename = "winRate")]
    pub win_rate: f64,
    #[serde(rename = "totalPoints")]
    pub total_points: i32,
}
