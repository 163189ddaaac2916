use crate::models::match_result::{
    MatchResponse, MatchSchema, NewMatch, NewMatchResult,
};
use crate::models::response::{validate_schema, ApiError};
use crate::service::points;
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::HttpResponse;
use chrono::Utc;

/// Scores the submitted results against the tournament's active point
/// configuration. Points are computed at write time; the rollup refresh
/// afterwards reuses the same arithmetic.
async fn build_results(
    data: &Data<AppState>,
    body: &MatchSchema,
) -> Result<Vec<NewMatchResult>, ApiError> {
    let tournament = data
        .db
        .find_tournament(body.tournament_id)
        .await?
        .ok_or_else(|| ApiError::not_found("tournament", body.tournament_id))?;
    let (stages, rules) = points::load_template_config(&data.db, &tournament).await?;
    let config = points::resolve_config(&tournament, &stages, body.stage_name.as_deref());

    let mut rows = Vec::with_capacity(body.results.len());
    for result in &body.results {
        validate_schema(result)?;
        data.db.find_player(result.player_id).await?.ok_or_else(|| {
            ApiError::Validation(format!("playerId {} does not exist", result.player_id))
        })?;
        let scored = points::score_result(
            result.outcome,
            result.goals_scored,
            result.goals_conceded,
            &config,
            &rules,
        );
        rows.push(NewMatchResult {
            match_id: 0, // filled in by the repository once the match row exists
            player_id: result.player_id,
            outcome: result.outcome.as_str().to_string(),
            goals_scored: result.goals_scored,
            goals_conceded: result.goals_conceded,
            base_points: scored.base,
            conditional_points: scored.conditional,
            points_earned: scored.total,
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        });
    }
    Ok(rows)
}

pub async fn get_match_service(
    data: Data<AppState>,
    match_id: i32,
) -> Result<HttpResponse, ApiError> {
    let match_record = data
        .db
        .find_match(match_id)
        .await?
        .ok_or_else(|| ApiError::not_found("match", match_id))?;
    let results = data.db.results_for_match(match_id).await?;
    Ok(HttpResponse::Ok().json(MatchResponse {
        match_record,
        results,
    }))
}

pub async fn create_match_service(
    data: Data<AppState>,
    body: Json<MatchSchema>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    validate_schema(&body)?;
    let results = build_results(&data, &body).await?;
    let match_record = data
        .db
        .create_match(
            NewMatch {
                tournament_id: body.tournament_id,
                match_date: body.match_date,
                stage_name: body.stage_name.clone(),
                created_at: Some(Utc::now()),
                updated_at: Some(Utc::now()),
            },
            results,
        )
        .await?;
    points::recalculate_tournament(&data.db, body.tournament_id).await?;
    let results = data.db.results_for_match(match_record.id).await?;
    Ok(HttpResponse::Created().json(MatchResponse {
        match_record,
        results,
    }))
}

pub async fn update_match_service(
    data: Data<AppState>,
    match_id: i32,
    body: Json<MatchSchema>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    validate_schema(&body)?;
    let existing = data
        .db
        .find_match(match_id)
        .await?
        .ok_or_else(|| ApiError::not_found("match", match_id))?;
    if existing.tournament_id != body.tournament_id {
        return Err(ApiError::Validation(
            "a match cannot be moved to another tournament".to_string(),
        ));
    }
    let results = build_results(&data, &body).await?;
    let match_record = data
        .db
        .update_match(
            match_id,
            NewMatch {
                tournament_id: body.tournament_id,
                match_date: body.match_date,
                stage_name: body.stage_name.clone(),
                created_at: None,
                updated_at: Some(Utc::now()),
            },
            results,
        )
        .await?;
    points::recalculate_tournament(&data.db, body.tournament_id).await?;
    let results = data.db.results_for_match(match_id).await?;
    Ok(HttpResponse::Ok().json(MatchResponse {
        match_record,
        results,
    }))
}

pub async fn delete_match_service(
    data: Data<AppState>,
    match_id: i32,
) -> Result<HttpResponse, ApiError> {
    let existing = data
        .db
        .find_match(match_id)
        .await?
        .ok_or_else(|| ApiError::not_found("match", match_id))?;
    data.db.delete_match(match_id).await?;
    points::recalculate_tournament(&data.db, existing.tournament_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
