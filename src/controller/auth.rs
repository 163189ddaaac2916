use crate::config::jwt_auth::JwtMiddleware;
use crate::models::admin::{LoginAdminSchema, RegisterAdminSchema};
use crate::models::response::ApiError;
use crate::service::auth::{
    admin_info_service, login_admin_service, logout_admin_service, register_admin_service,
};
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::{get, post, HttpResponse};

#[post("/auth/register")]
pub async fn register_admin_handler(
    data: Data<AppState>,
    body: Json<RegisterAdminSchema>,
) -> Result<HttpResponse, ApiError> {
    register_admin_service(data, body).await
}

#[post("/auth/login")]
pub async fn login_admin_handler(
    data: Data<AppState>,
    body: Json<LoginAdminSchema>,
) -> Result<HttpResponse, ApiError> {
    login_admin_service(data, body).await
}

#[post("/auth/logout")]
pub async fn logout_admin_handler(auth: JwtMiddleware) -> Result<HttpResponse, ApiError> {
    logout_admin_service(auth).await
}

#[get("/auth/me")]
pub async fn admin_info_handler(
    data: Data<AppState>,
    auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    admin_info_service(data, auth).await
}
