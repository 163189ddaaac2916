use crate::config::jwt_auth::JwtMiddleware;
use crate::models::match_result::MatchSchema;
use crate::models::response::ApiError;
use crate::service::matches::{
    create_match_service, delete_match_service, get_match_service, update_match_service,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, put, HttpResponse};

#[get("/matches/{id}")]
pub async fn get_match_handler(
    data: Data<AppState>,
    path: Path<i32>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    get_match_service(data, path.into_inner()).await
}

#[post("/matches")]
pub async fn create_match_handler(
    data: Data<AppState>,
    body: Json<MatchSchema>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    create_match_service(data, body).await
}

#[put("/matches/{id}")]
pub async fn update_match_handler(
    data: Data<AppState>,
    path: Path<i32>,
    body: Json<MatchSchema>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    update_match_service(data, path.into_inner(), body).await
}

#[delete("/matches/{id}")]
pub async fn delete_match_handler(
    data: Data<AppState>,
    path: Path<i32>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    delete_match_service(data, path.into_inner()).await
}
