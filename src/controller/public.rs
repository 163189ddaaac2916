use crate::models::response::ApiError;
use crate::service::players::PlayerListQuery;
use crate::service::public::{
    public_club_leaderboard_service, public_club_service, public_clubs_service,
    public_global_leaderboard_service, public_match_service, public_matches_service,
    public_player_service, public_players_service, public_tournament_leaderboard_service,
    public_tournament_service, public_tournaments_service,
};
use crate::AppState;
use actix_web::web::{Data, Path, Query};
use actix_web::{get, HttpResponse};

#[get("/clubs")]
pub async fn public_clubs_handler(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    public_clubs_service(data).await
}

#[get("/clubs/{id}")]
pub async fn public_club_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ApiError> {
    public_club_service(data, path.into_inner()).await
}

#[get("/players")]
pub async fn public_players_handler(
    data: Data<AppState>,
    query: Query<PlayerListQuery>,
) -> Result<HttpResponse, ApiError> {
    public_players_service(data, query.into_inner()).await
}

#[get("/players/{id}")]
pub async fn public_player_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ApiError> {
    public_player_service(data, path.into_inner()).await
}

#[get("/tournaments")]
pub async fn public_tournaments_handler(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    public_tournaments_service(data).await
}

#[get("/tournaments/{id}")]
pub async fn public_tournament_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ApiError> {
    public_tournament_service(data, path.into_inner()).await
}

#[get("/tournaments/{id}/matches")]
pub async fn public_matches_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ApiError> {
    public_matches_service(data, path.into_inner()).await
}

#[get("/matches/{id}")]
pub async fn public_match_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ApiError> {
    public_match_service(data, path.into_inner()).await
}

#[get("/tournaments/{id}/leaderboard")]
pub async fn public_tournament_leaderboard_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ApiError> {
    public_tournament_leaderboard_service(data, path.into_inner()).await
}

#[get("/leaderboard/players")]
pub async fn public_global_leaderboard_handler(
    data: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    public_global_leaderboard_service(data).await
}

#[get("/leaderboard/clubs")]
pub async fn public_club_leaderboard_handler(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    public_club_leaderboard_service(data).await
}
