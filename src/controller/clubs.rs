use crate::config::jwt_auth::JwtMiddleware;
use crate::models::club::ClubSchema;
use crate::models::response::ApiError;
use crate::service::clubs::{
    create_club_service, delete_club_service, get_club_service, list_clubs_service,
    update_club_service,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, put, HttpResponse};

#[get("/clubs")]
pub async fn list_clubs_handler(
    data: Data<AppState>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    list_clubs_service(data).await
}

#[get("/clubs/{id}")]
pub async fn get_club_handler(
    data: Data<AppState>,
    path: Path<i32>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    get_club_service(data, path.into_inner()).await
}

#[post("/clubs")]
pub async fn create_club_handler(
    data: Data<AppState>,
    body: Json<ClubSchema>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    create_club_service(data, body).await
}

#[put("/clubs/{id}")]
pub async fn update_club_handler(
    data: Data<AppState>,
    path: Path<i32>,
    body: Json<ClubSchema>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    update_club_service(data, path.into_inner(), body).await
}

#[delete("/clubs/{id}")]
pub async fn delete_club_handler(
    data: Data<AppState>,
    path: Path<i32>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    delete_club_service(data, path.into_inner()).await
}
