use chrono::{DateTime, NaiveDate, Utc};
use diesel::{AsChangeset, Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "WIN",
            Outcome::Draw => "DRAW",
            Outcome::Loss => "LOSS",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "WIN" => Some(Outcome::Win),
            "DRAW" => Some(Outcome::Draw),
            "LOSS" => Some(Outcome::Loss),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Queryable)]
pub struct Match {
    pub id: i32,
    #[serde(rename = "tournamentId")]
    pub tournament_id: i32,
    #[serde(rename = "matchDate")]
    pub match_date: NaiveDate,
    #[serde(rename = "stageName")]
    pub stage_name: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::models::schema::matches)]
pub struct NewMatch {
    pub tournament_id: i32,
    pub match_date: NaiveDate,
    pub stage_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Queryable)]
pub struct MatchResult {
    pub id: i32,
    #[serde(rename = "matchId")]
    pub match_id: i32,
    #[serde(rename = "playerId")]
    pub player_id: i32,
    pub outcome: String,
    #[serde(rename = "goalsScored")]
    pub goals_scored: i32,
    #[serde(rename = "goalsConceded")]
    pub goals_conceded: i32,
    #[serde(rename = "basePoints")]
    pub base_points: i32,
    #[serde(rename = "conditionalPoints")]
    pub conditional_points: i32,
    #[serde(rename = "pointsEarned")]
    pub points_earned: i32,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::models::schema::match_results)]
pub struct NewMatchResult {
    pub match_id: i32,
    pub player_id: i32,
    pub outcome: String,
    pub goals_scored: i32,
    pub goals_conceded: i32,
    pub base_points: i32,
    pub conditional_points: i32,
    pub points_earned: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

// Serialize is needed because the length rule on MatchSchema::results embeds
// the offending value in the validation error params.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct MatchResultSchema {
    #[serde(rename = "playerId")]
    pub player_id: i32,
    pub outcome: Outcome,
    #[validate(range(min = 0, message = "must not be negative"))]
    #[serde(rename = "goalsScored", default)]
    pub goals_scored: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    #[serde(rename = "goalsConceded", default)]
    pub goals_conceded: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct MatchSchema {
    #[serde(rename = "tournamentId")]
    pub tournament_id: i32,
    #[serde(rename = "matchDate")]
    pub match_date: NaiveDate,
    #[serde(rename = "stageName")]
    pub stage_name: Option<String>,
    #[validate(length(min = 1, message = "must contain at least one result"))]
    pub results: Vec<MatchResultSchema>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    #[serde(flatten)]
    pub match_record: Match,
    pub results: Vec<MatchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn schema(results: Vec<MatchResultSchema>) -> MatchSchema {
        MatchSchema {
            tournament_id: 1,
            match_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            stage_name: None,
            results,
        }
    }

    #[test]
    fn a_match_needs_at_least_one_result() {
        assert!(schema(Vec::new()).validate().is_err());
        let one = vec![MatchResultSchema {
            player_id: 7,
            outcome: Outcome::Win,
            goals_scored: 2,
            goals_conceded: 1,
        }];
        assert!(schema(one).validate().is_ok());
    }

    #[test]
    fn negative_goals_are_rejected() {
        let result = MatchResultSchema {
            player_id: 7,
            outcome: Outcome::Loss,
            goals_scored: -1,
            goals_conceded: 0,
        };
        assert!(result.validate().is_err());
    }
}
