use crate::models::match_result::MatchResponse;
use crate::models::player::PlayerResponse;
use crate::models::response::ApiError;
use crate::repository::players::PlayerFilter;
use crate::service::leaderboard;
use crate::service::players::PlayerListQuery;
use crate::AppState;
use actix_web::web::Data;
use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Read-through on the TTL cache: on a miss, build the payload, store it,
/// serve it. Mutations never invalidate; entries just age out.
async fn cached<F, Fut>(
    data: &Data<AppState>,
    key: &str,
    ttl_secs: u64,
    build: F,
) -> Result<HttpResponse, ApiError>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<Value, ApiError>>,
{
    if let Some(hit) = data.cache.get_json::<Value>(key) {
        return Ok(HttpResponse::Ok().json(hit));
    }
    let payload = build().await?;
    data.cache
        .set_json(key, &payload, Duration::from_secs(ttl_secs));
    Ok(HttpResponse::Ok().json(payload))
}

fn to_value<T: Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|err| {
        log::error!("response serialization failed: {}", err);
        ApiError::Internal
    })
}

pub async fn public_clubs_service(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let ttl = data.config.entity_cache_ttl_secs;
    cached(&data, "public:clubs", ttl, || async {
        let clubs = data.db.list_clubs().await?;
        to_value(&clubs)
    })
    .await
}

pub async fn public_club_service(
    data: Data<AppState>,
    club_id: i32,
) -> Result<HttpResponse, ApiError> {
    let ttl = data.config.entity_cache_ttl_secs;
    cached(&data, &format!("public:club:{}", club_id), ttl, || async {
        let club = data
            .db
            .find_club(club_id)
            .await?
            .ok_or_else(|| ApiError::not_found("club", club_id))?;
        to_value(&club)
    })
    .await
}

pub async fn public_players_service(
    data: Data<AppState>,
    query: PlayerListQuery,
) -> Result<HttpResponse, ApiError> {
    let ttl = data.config.entity_cache_ttl_secs;
    let key = format!(
        "public:players:club={:?}:free={}",
        query.club_id, query.free_agents
    );
    cached(&data, &key, ttl, || async {
        let players = data
            .db
            .list_players(PlayerFilter {
                club_id: query.club_id,
                free_agents: query.free_agents,
            })
            .await?;
        to_value(&players)
    })
    .await
}

pub async fn public_player_service(
    data: Data<AppState>,
    player_id: i32,
) -> Result<HttpResponse, ApiError> {
    let ttl = data.config.entity_cache_ttl_secs;
    cached(&data, &format!("public:player:{}", player_id), ttl, || async {
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
        to_value(&PlayerResponse::new(player, roles))
    })
    .await
}

pub async fn public_tournaments_service(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let ttl = data.config.entity_cache_ttl_secs;
    cached(&data, "public:tournaments", ttl, || async {
        let tournaments = data.db.list_tournaments().await?;
        to_value(&tournaments)
    })
    .await
}

pub async fn public_tournament_service(
    data: Data<AppState>,
    tournament_id: i32,
) -> Result<HttpResponse, ApiError> {
    let ttl = data.config.entity_cache_ttl_secs;
    cached(
        &data,
        &format!("public:tournament:{}", tournament_id),
        ttl,
        || async {
            let tournament = data
                .db
                .find_tournament(tournament_id)
                .await?
                .ok_or_else(|| ApiError::not_found("tournament", tournament_id))?;
            to_value(&tournament)
        },
    )
    .await
}

pub async fn public_matches_service(
    data: Data<AppState>,
    tournament_id: i32,
) -> Result<HttpResponse, ApiError> {
    let ttl = data.config.entity_cache_ttl_secs;
    cached(
        &data,
        &format!("public:tournament:{}:matches", tournament_id),
        ttl,
        || async {
            data.db
                .find_tournament(tournament_id)
                .await?
                .ok_or_else(|| ApiError::not_found("tournament", tournament_id))?;
            let matches = data.db.list_matches(tournament_id).await?;
            to_value(&matches)
        },
    )
    .await
}

pub async fn public_match_service(
    data: Data<AppState>,
    match_id: i32,
) -> Result<HttpResponse, ApiError> {
    let ttl = data.config.entity_cache_ttl_secs;
    cached(&data, &format!("public:match:{}", match_id), ttl, || async {
        let match_record = data
            .db
            .find_match(match_id)
            .await?
            .ok_or_else(|| ApiError::not_found("match", match_id))?;
        let results = data.db.results_for_match(match_id).await?;
        to_value(&MatchResponse {
            match_record,
            results,
        })
    })
    .await
}

pub async fn public_tournament_leaderboard_service(
    data: Data<AppState>,
    tournament_id: i32,
) -> Result<HttpResponse, ApiError> {
    let ttl = data.config.leaderboard_cache_ttl_secs;
    cached(
        &data,
        &format!("public:leaderboard:tournament:{}", tournament_id),
        ttl,
        || async {
            let entries = leaderboard::tournament_leaderboard(&data.db, tournament_id).await?;
            to_value(&entries)
        },
    )
    .await
}

pub async fn public_global_leaderboard_service(
    data: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let ttl = data.config.leaderboard_cache_ttl_secs;
    cached(&data, "public:leaderboard:players", ttl, || async {
        let entries = leaderboard::global_leaderboard(&data.db).await?;
        to_value(&entries)
    })
    .await
}

pub async fn public_club_leaderboard_service(
    data: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let ttl = data.config.leaderboard_cache_ttl_secs;
    cached(&data, "public:leaderboard:clubs", ttl, || async {
        let entries = leaderboard::club_leaderboard(&data.db).await?;
        to_value(&entries)
    })
    .await
}
