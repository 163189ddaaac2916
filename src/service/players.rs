use crate::models::player::{NewPlayer, PlayerResponse, PlayerSchema};
use crate::models::response::{validate_schema, ApiError};
use crate::repository::players::PlayerFilter;
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::HttpResponse;
use chrono::Utc;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PlayerListQuery {
    #[serde(rename = "clubId")]
    pub club_id: Option<i32>,
    #[serde(rename = "freeAgents", default)]
    pub free_agents: bool,
}

fn to_new_player(body: &PlayerSchema, keep_created_at: bool) -> NewPlayer {
    NewPlayer {
        name: body.name.clone(),
        email: body.email.clone(),
        phone: body.phone.clone(),
        date_of_birth: body.date_of_birth,
        gender: body.gender.clone(),
        place: body.place.clone(),
        state: body.state.clone(),
        district: body.district.clone(),
        photo: body.photo.clone(),
        club_id: body.club_id,
        created_at: if keep_created_at { None } else { Some(Utc::now()) },
        updated_at: Some(Utc::now()),
    }
}

async fn ensure_club_exists(data: &Data<AppState>, club_id: Option<i32>) -> Result<(), ApiError> {
    if let Some(club_id) = club_id {
        data.db
            .find_club(club_id)
            .await?
            .ok_or_else(|| ApiError::Validation(format!("clubId {} does not exist", club_id)))?;
    }
    Ok(())
}

pub async fn list_players_service(
    data: Data<AppState>,
    query: PlayerListQuery,
) -> Result<HttpResponse, ApiError> {
    let players = data
        .db
        .list_players(PlayerFilter {
            club_id: query.club_id,
            free_agents: query.free_agents,
        })
        .await?;
    Ok(HttpResponse::Ok().json(players))
}

pub async fn get_player_service(
    data: Data<AppState>,
    player_id: i32,
) -> Result<HttpResponse, ApiError> {
    let player = data
        .db
        .find_player(player_id)
        .await?
        .ok_or_else(|| ApiError::not_found("player", player_id))?;
    let roles = data
        .db
        .roles_for_player(player_id)
        .await?
        .into_iter()
        .map(|r| r.role)
        .collect();
    Ok(HttpResponse::Ok().json(PlayerResponse::new(player, roles)))
}

pub async fn create_player_service(
    data: Data<AppState>,
    body: Json<PlayerSchema>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    validate_schema(&body)?;
    ensure_club_exists(&data, body.club_id).await?;

    // duplicate email is a validation failure, not an internal error
    if data.db.find_player_by_email(&body.email).await?.is_some() {
        return Err(ApiError::Validation(format!(
            "a player with email {} already exists",
            body.email
        )));
    }

    let roles: Vec<&str> = body.roles.iter().map(|r| r.as_str()).collect();
    let player = data.db.create_player(to_new_player(&body, false), &roles).await?;
    let role_names = roles.iter().map(|r| r.to_string()).collect();
    Ok(HttpResponse::Created().json(PlayerResponse::new(player, role_names)))
}

pub async fn update_player_service(
    data: Data<AppState>,
    player_id: i32,
    body: Json<PlayerSchema>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    validate_schema(&body)?;
    ensure_club_exists(&data, body.club_id).await?;

    data.db
        .find_player(player_id)
        .await?
        .ok_or_else(|| ApiError::not_found("player", player_id))?;

    if let Some(existing) = data.db.find_player_by_email(&body.email).await? {
        if existing.id != player_id {
            return Err(ApiError::Validation(format!(
                "a player with email {} already exists",
                body.email
            )));
        }
    }

    let roles: Vec<&str> = body.roles.iter().map(|r| r.as_str()).collect();
    let player = data
        .db
        .update_player(player_id, to_new_player(&body, true), &roles)
        .await?;
    let role_names = roles.iter().map(|r| r.to_string()).collect();
    Ok(HttpResponse::Ok().json(PlayerResponse::new(player, role_names)))
}

pub async fn delete_player_service(
    data: Data<AppState>,
    player_id: i32,
) -> Result<HttpResponse, ApiError> {
    let deleted = data.db.delete_player(player_id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("player", player_id));
    }
    Ok(HttpResponse::NoContent().finish())
}
