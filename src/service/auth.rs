use crate::config::jwt_auth::JwtMiddleware;
use crate::models::admin::{FilteredAdmin, LoginAdminSchema, NewAdmin, RegisterAdminSchema};
use crate::models::response::{validate_schema, ApiError};
use crate::util::token;
use crate::AppState;
use actix_web::cookie::{time::Duration as ActixWebDuration, Cookie};
use actix_web::web::{Data, Json};
use actix_web::HttpResponse;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;
use log::error;
use rand_core::OsRng;
use serde_json::json;

pub async fn register_admin_service(
    data: Data<AppState>,
    body: Json<RegisterAdminSchema>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    validate_schema(&body)?;

    if data
        .db
        .find_admin_by_username_or_email(&body.username, &body.email)
        .await?
        .is_some()
    {
        return Err(ApiError::Validation(
            "an admin with that username or email already exists".to_string(),
        ));
    }

    let salt = SaltString::generate(&mut OsRng);
    let hashed_password = Argon2::default()
        .hash_password(body.password.as_bytes(), &salt)
        .map_err(|err| {
            error!("password hashing failed: {}", err);
            ApiError::Internal
        })?
        .to_string();

    let admin = data
        .db
        .create_admin(NewAdmin {
            username: body.username,
            email: body.email,
            password: hashed_password,
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        })
        .await?;

    Ok(HttpResponse::Ok().json(FilteredAdmin::from(&admin)))
}

pub async fn login_admin_service(
    data: Data<AppState>,
    body: Json<LoginAdminSchema>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    validate_schema(&body)?;

    let admin = data
        .db
        .find_admin_by_username(&body.username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("invalid username or password".to_string()))?;

    let parsed_hash = PasswordHash::new(&admin.password).map_err(|err| {
        error!("stored password hash for {} is unreadable: {}", admin.username, err);
        ApiError::Internal
    })?;
    Argon2::default()
        .verify_password(body.password.as_bytes(), &parsed_hash)
        .map_err(|_| ApiError::Unauthorized("invalid username or password".to_string()))?;

    let details = token::generate_jwt_token(
        admin.username.clone(),
        data.config.jwt_max_age,
        &data.config.jwt_secret,
    )
    .map_err(|err| {
        error!("token generation failed: {}", err);
        ApiError::Internal
    })?;
    let token = details.token.unwrap_or_default();

    let cookie = Cookie::build("token", token.to_owned())
        .path("/")
        .max_age(ActixWebDuration::new(data.config.jwt_max_age, 0))
        .http_only(true)
        .finish();

    Ok(HttpResponse::Ok().cookie(cookie).json(json!({
        "token": token,
        "expiresIn": details.expires_in,
    })))
}

pub async fn logout_admin_service(_: JwtMiddleware) -> Result<HttpResponse, ApiError> {
    let cookie = Cookie::build("token", "")
        .path("/")
        .max_age(ActixWebDuration::new(-1, 0))
        .http_only(true)
        .finish();
    Ok(HttpResponse::Ok().cookie(cookie).json(json!({ "loggedOut": true })))
}

pub async fn admin_info_service(
    data: Data<AppState>,
    auth: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
    let admin = data
        .db
        .find_admin_by_username(&auth.username)
        .await?
        .ok_or_else(|| {
            ApiError::Unauthorized("the admin belonging to this token no longer exists".to_string())
        })?;
    Ok(HttpResponse::Ok().json(FilteredAdmin::from(&admin)))
}
