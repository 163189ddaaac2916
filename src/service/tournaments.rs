use crate::models::response::{validate_schema, ApiError};
use crate::models::tournament::{NewTournament, ParticipantsSchema, TournamentSchema};
use crate::service::points;
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::HttpResponse;
use chrono::Utc;

fn to_new_tournament(body: TournamentSchema, keep_created_at: bool) -> NewTournament {
    NewTournament {
        name: body.name,
        start_date: body.start_date,
        end_date: body.end_date,
        club_id: body.club_id,
        template_id: body.template_id,
        points_per_win: body.points_per_win,
        points_per_draw: body.points_per_draw,
        points_per_loss: body.points_per_loss,
        points_per_goal_scored: body.points_per_goal_scored,
        points_per_goal_conceded: body.points_per_goal_conceded,
        created_at: if keep_created_at { None } else { Some(Utc::now()) },
        updated_at: Some(Utc::now()),
    }
}

async fn check_references(data: &Data<AppState>, body: &TournamentSchema) -> Result<(), ApiError> {
    if let Some(club_id) = body.club_id {
        data.db
            .find_club(club_id)
            .await?
            .ok_or_else(|| ApiError::Validation(format!("clubId {} does not exist", club_id)))?;
    }
    if let Some(template_id) = body.template_id {
        data.db.find_template(template_id).await?.ok_or_else(|| {
            ApiError::Validation(format!("templateId {} does not exist", template_id))
        })?;
    }
    Ok(())
}

pub async fn list_tournaments_service(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let tournaments = data.db.list_tournaments().await?;
    Ok(HttpResponse::Ok().json(tournaments))
}

pub async fn get_tournament_service(
    data: Data<AppState>,
    tournament_id: i32,
) -> Result<HttpResponse, ApiError> {
    let tournament = data
        .db
        .find_tournament(tournament_id)
        .await?
        .ok_or_else(|| ApiError::not_found("tournament", tournament_id))?;
    Ok(HttpResponse::Ok().json(tournament))
}

pub async fn create_tournament_service(
    data: Data<AppState>,
    body: Json<TournamentSchema>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    validate_schema(&body)?;
    check_references(&data, &body).await?;
    let tournament = data.db.create_tournament(to_new_tournament(body, false)).await?;
    Ok(HttpResponse::Created().json(tournament))
}

pub async fn update_tournament_service(
    data: Data<AppState>,
    tournament_id: i32,
    body: Json<TournamentSchema>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    validate_schema(&body)?;
    check_references(&data, &body).await?;
    data.db
        .find_tournament(tournament_id)
        .await?
        .ok_or_else(|| ApiError::not_found("tournament", tournament_id))?;
    let tournament = data
        .db
        .update_tournament(tournament_id, to_new_tournament(body, true))
        .await?;
    // point config may have changed, bring stored points back in line
    points::recalculate_tournament(&data.db, tournament_id).await?;
    Ok(HttpResponse::Ok().json(tournament))
}

pub async fn delete_tournament_service(
    data: Data<AppState>,
    tournament_id: i32,
) -> Result<HttpResponse, ApiError> {
    data.db
        .find_tournament(tournament_id)
        .await?
        .ok_or_else(|| ApiError::not_found("tournament", tournament_id))?;
    for match_record in data.db.list_matches(tournament_id).await? {
        data.db.delete_match(match_record.id).await?;
    }
    data.db.replace_tournament_stats(tournament_id, Vec::new()).await?;
    data.db.delete_tournament(tournament_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn add_participants_service(
    data: Data<AppState>,
    tournament_id: i32,
    body: Json<ParticipantsSchema>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    validate_schema(&body)?;
    data.db
        .find_tournament(tournament_id)
        .await?
        .ok_or_else(|| ApiError::not_found("tournament", tournament_id))?;
    for player_id in &body.player_ids {
        data.db
            .find_player(*player_id)
            .await?
            .ok_or_else(|| ApiError::Validation(format!("playerId {} does not exist", player_id)))?;
    }
    let participants = data.db.add_participants(tournament_id, &body.player_ids).await?;
    Ok(HttpResponse::Ok().json(participants))
}

pub async fn recalculate_service(
    data: Data<AppState>,
    tournament_id: i32,
) -> Result<HttpResponse, ApiError> {
    let summary = points::recalculate_tournament(&data.db, tournament_id).await?;
    Ok(HttpResponse::Ok().json(summary))
}
