use crate::config::jwt_auth::JwtMiddleware;
use crate::models::response::ApiError;
use crate::models::tournament::{ParticipantsSchema, TournamentSchema};
use crate::service::tournaments::{
    add_participants_service, create_tournament_service, delete_tournament_service,
    get_tournament_service, list_tournaments_service, recalculate_service,
    update_tournament_service,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, put, HttpResponse};

#[get("/tournaments")]
pub async fn list_tournaments_handler(
    data: Data<AppState>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    list_tournaments_service(data).await
}

#[get("/tournaments/{id}")]
pub async fn get_tournament_handler(
    data: Data<AppState>,
    path: Path<i32>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    get_tournament_service(data, path.into_inner()).await
}

#[post("/tournaments")]
pub async fn create_tournament_handler(
    data: Data<AppState>,
    body: Json<TournamentSchema>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    create_tournament_service(data, body).await
}

#[put("/tournaments/{id}")]
pub async fn update_tournament_handler(
    data: Data<AppState>,
    path: Path<i32>,
    body: Json<TournamentSchema>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    update_tournament_service(data, path.into_inner(), body).await
}

#[delete("/tournaments/{id}")]
pub async fn delete_tournament_handler(
    data: Data<AppState>,
    path: Path<i32>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    delete_tournament_service(data, path.into_inner()).await
}

#[post("/tournaments/{id}/participants")]
pub async fn add_participants_handler(
    data: Data<AppState>,
    path: Path<i32>,
    body: Json<ParticipantsSchema>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    add_participants_service(data, path.into_inner(), body).await
}

#[post("/tournaments/{id}/recalculate")]
pub async fn recalculate_handler(
    data: Data<AppState>,
    path: Path<i32>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    recalculate_service(data, path.into_inner()).await
}
