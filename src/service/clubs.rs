use crate::models::club::{ClubSchema, NewClub};
use crate::models::response::{validate_schema, ApiError};
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::HttpResponse;
use chrono::Utc;

fn to_new_club(body: ClubSchema, keep_created_at: bool) -> NewClub {
    NewClub {
        name: body.name,
        logo: body.logo,
        description: body.description,
        created_at: if keep_created_at { None } else { Some(Utc::now()) },
        updated_at: Some(Utc::now()),
    }
}

pub async fn list_clubs_service(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let clubs = data.db.list_clubs().await?;
    Ok(HttpResponse::Ok().json(clubs))
}

pub async fn get_club_service(data: Data<AppState>, club_id: i32) -> Result<HttpResponse, ApiError> {
    let club = data
        .db
        .find_club(club_id)
        .await?
        .ok_or_else(|| ApiError::not_found("club", club_id))?;
    Ok(HttpResponse::Ok().json(club))
}

pub async fn create_club_service(
    data: Data<AppState>,
    body: Json<ClubSchema>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    validate_schema(&body)?;
    let club = data.db.create_club(to_new_club(body, false)).await?;
    Ok(HttpResponse::Created().json(club))
}

pub async fn update_club_service(
    data: Data<AppState>,
    club_id: i32,
    body: Json<ClubSchema>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    validate_schema(&body)?;
    data.db
        .find_club(club_id)
        .await?
        .ok_or_else(|| ApiError::not_found("club", club_id))?;
    let club = data.db.update_club(club_id, to_new_club(body, true)).await?;
    Ok(HttpResponse::Ok().json(club))
}

pub async fn delete_club_service(
    data: Data<AppState>,
    club_id: i32,
) -> Result<HttpResponse, ApiError> {
    let deleted = data.db.delete_club(club_id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("club", club_id));
    }
    Ok(HttpResponse::NoContent().finish())
}
