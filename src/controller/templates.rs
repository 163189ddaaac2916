use crate::config::jwt_auth::JwtMiddleware;
use crate::models::point_system::TemplateSchema;
use crate::models::response::ApiError;
use crate::service::templates::{
    create_template_service, delete_template_service, get_template_service,
    list_templates_service, update_template_service,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, put, HttpResponse};

#[get("/templates")]
pub async fn list_templates_handler(
    data: Data<AppState>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    list_templates_service(data).await
}

#[get("/templates/{id}")]
pub async fn get_template_handler(
    data: Data<AppState>,
    path: Path<i32>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    get_template_service(data, path.into_inner()).await
}

#[post("/templates")]
pub async fn create_template_handler(
    data: Data<AppState>,
    body: Json<TemplateSchema>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    create_template_service(data, body).await
}

#[put("/templates/{id}")]
pub async fn update_template_handler(
    data: Data<AppState>,
    path: Path<i32>,
    body: Json<TemplateSchema>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    update_template_service(data, path.into_inner(), body).await
}

#[delete("/templates/{id}")]
pub async fn delete_template_handler(
    data: Data<AppState>,
    path: Path<i32>,
    _auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    delete_template_service(data, path.into_inner()).await
}
