use chrono::{DateTime, NaiveDate, Utc};
use diesel::{AsChangeset, Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Queryable)]
pub struct Tournament {
    pub id: i32,
    pub name: String,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "clubId")]
    pub club_id: Option<i32>,
    #[serde(rename = "templateId")]
    pub template_id: Option<i32>,
    #[serde(rename = "pointsPerWin")]
    pub points_per_win: i32,
    #[serde(rename = "pointsPerDraw")]
    pub points_per_draw: i32,
    #[serde(rename = "pointsPerLoss")]
    pub points_per_loss: i32,
    #[serde(rename = "pointsPerGoalScored")]
    pub points_per_goal_scored: i32,
    #[serde(rename = "pointsPerGoalConceded")]
    pub points_per_goal_conceded: i32,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::models::schema::tournaments)]
pub struct NewTournament {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub club_id: Option<i32>,
    pub template_id: Option<i32>,
    pub points_per_win: i32,
    pub points_per_draw: i32,
    pub points_per_loss: i32,
    pub points_per_goal_scored: i32,
    pub points_per_goal_conceded: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Queryable)]
pub struct TournamentParticipant {
    pub id: i32,
    #[serde(rename = "tournamentId")]
    pub tournament_id: i32,
    #[serde(rename = "playerId")]
    pub player_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::models::schema::tournament_participants)]
pub struct NewTournamentParticipant {
    pub tournament_id: i32,
    pub player_id: i32,
}

fn default_points_per_win() -> i32 {
    3
}

fn default_points_per_draw() -> i32 {
    1
}

#[derive(Debug, Deserialize, Validate)]
pub struct TournamentSchema {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "clubId")]
    pub club_id: Option<i32>,
    #[serde(rename = "templateId")]
    pub template_id: Option<i32>,
    #[serde(rename = "pointsPerWin", default = "default_points_per_win")]
    pub points_per_win: i32,
    #[serde(rename = "pointsPerDraw", default = "default_points_per_draw")]
    pub points_per_draw: i32,
    #[serde(rename = "pointsPerLoss", default)]
    pub points_per_loss: i32,
    #[serde(rename = "pointsPerGoalScored", default)]
    pub points_per_goal_scored: i32,
    #[serde(rename = "pointsPerGoalConceded", default)]
    pub points_per_goal_conceded: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ParticipantsSchema {
    #[validate(length(min = 1, message = "must contain at least one player id"))]
    #[serde(rename = "playerIds")]
    pub player_ids: Vec<i32>,
}
