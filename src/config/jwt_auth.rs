use crate::models::response::ErrorResponse;
use crate::util::token;
use crate::AppState;
use actix_web::error::ErrorUnauthorized;
use actix_web::{dev::Payload, http, web, Error as ActixWebError, FromRequest, HttpRequest};
use std::fmt;
use std::fmt::Formatter;
use std::future::{ready, Ready};

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "{{\"error\":\"unauthorized\"}}"),
        }
    }
}

/// Session guard for dashboard routes: any handler taking this as an argument
/// rejects requests without a valid token. Public routes simply don't ask for
/// it.
pub struct JwtMiddleware {
    pub username: String,
    pub token_uuid: uuid::Uuid,
}

impl FromRequest for JwtMiddleware {
    type Error = ActixWebError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(data) = req.app_data::<web::Data<AppState>>() else {
            return ready(Err(ErrorUnauthorized(ErrorResponse {
                error: "Authentication is not configured".to_string(),
            })));
        };

        let token = req
            .cookie("token")
            .map(|c| c.value().to_string())
            .or_else(|| {
                req.headers()
                    .get(http::header::AUTHORIZATION)
                    .and_then(|h| h.to_str().ok())
                    .and_then(|h| h.strip_prefix("Bearer "))
                    .map(|h| h.to_string())
            });

        let Some(token) = token else {
            return ready(Err(ErrorUnauthorized(ErrorResponse {
                error: "You are not logged in, please provide a token".to_string(),
            })));
        };

        match token::verify_jwt_token(&data.config.jwt_secret, &token) {
            Ok(details) => ready(Ok(JwtMiddleware {
                username: details.username,
                token_uuid: details.token_uuid,
            })),
            Err(_) => ready(Err(ErrorUnauthorized(ErrorResponse {
                error: "Token is invalid or the session has expired".to_string(),
            }))),
        }
    }
}
