use crate::config::jwt_auth::JwtMiddleware;
use crate::models::player::PlayerSchema;
use crate::models::response::ApiError;
use crate::service::players::{
    create_player_service, delete_player_service, get_player_service, list_players_service,
    update_player_service, PlayerListQuery,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{delete, get, post, put, HttpResponse};

#[get("/players")]
pub async fn list_players_handler(
    data: Data<AppState>,
    query: Query<PlayerListQuery>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    list_players_service(data, query.into_inner()).await
}

#[get("/players/{id}")]
pub async fn get_player_handler(
    data: Data<AppState>,
    path: Path<i32>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    get_player_service(data, path.into_inner()).await
}

#[post("/players")]
pub async fn create_player_handler(
    data: Data<AppState>,
    body: Json<PlayerSchema>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    create_player_service(data, body).await
}

#[put("/players/{id}")]
pub async fn update_player_handler(
    data: Data<AppState>,
    path: Path<i32>,
    body: Json<PlayerSchema>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    update_player_service(data, path.into_inner(), body).await
}

#[delete("/players/{id}")]
pub async fn delete_player_handler(
    data: Data<AppState>,
    path: Path<i32>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    delete_player_service(data, path.into_inner()).await
}
