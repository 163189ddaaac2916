use chrono::{DateTime, NaiveDate, Utc};
use diesel::{AsChangeset, Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Queryable)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub place: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub photo: Option<String>,
    #[serde(rename = "clubId")]
    pub club_id: Option<i32>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Player {
    /// club_id NULL is what classifies a player as a free agent.
    pub fn is_free_agent(&self) -> bool {
        self.club_id.is_none()
    }
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::models::schema::players)]
pub struct NewPlayer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub place: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub photo: Option<String>,
    pub club_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleType {
    Manager,
    Mentor,
    Captain,
    Player,
}

impl RoleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Manager => "MANAGER",
            RoleType::Mentor => "MENTOR",
            RoleType::Captain => "CAPTAIN",
            RoleType::Player => "PLAYER",
        }
    }
}

#[derive(Debug, Clone, Queryable)]
pub struct PlayerRole {
    pub id: i32,
    pub player_id: i32,
    pub role: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::models::schema::player_roles)]
pub struct NewPlayerRole {
    pub player_id: i32,
    pub role: String,
}

fn default_roles() -> Vec<RoleType> {
    vec![RoleType::Player]
}

#[derive(Debug, Deserialize, Validate)]
pub struct PlayerSchema {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub phone: Option<String>,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub place: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub photo: Option<String>,
    // Omitted or null means the player joins as a free agent.
    #[serde(rename = "clubId")]
    pub club_id: Option<i32>,
    #[serde(default = "default_roles")]
    pub roles: Vec<RoleType>,
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    #[serde(flatten)]
    pub player: Player,
    pub roles: Vec<String>,
    #[serde(rename = "freeAgent")]
    pub free_agent: bool,
}

impl PlayerResponse {
    pub fn new(player: Player, roles: Vec<String>) -> Self {
        let free_agent = player.is_free_agent();
        PlayerResponse {
            player,
            roles,
            free_agent,
        }
    }
}
