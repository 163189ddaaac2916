use crate::models::point_system::{
    NewConditionalRule, NewPointSystemTemplate, NewStagePoints, TemplateResponse, TemplateSchema,
};
use crate::models::response::{validate_schema, ApiError};
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::HttpResponse;
use chrono::Utc;

fn to_new_template(body: &TemplateSchema, keep_created_at: bool) -> NewPointSystemTemplate {
    NewPointSystemTemplate {
        name: body.name.clone(),
        points_per_win: body.points_per_win,
        points_per_draw: body.points_per_draw,
        points_per_loss: body.points_per_loss,
        points_per_goal_scored: body.points_per_goal_scored,
        points_per_goal_conceded: body.points_per_goal_conceded,
        walkover_points: body.walkover_points,
        created_at: if keep_created_at { None } else { Some(Utc::now()) },
        updated_at: Some(Utc::now()),
    }
}

fn to_children(body: &TemplateSchema) -> Result<(Vec<NewStagePoints>, Vec<NewConditionalRule>), ApiError> {
    for stage in &body.stage_points {
        validate_schema(stage)?;
    }
    for rule in &body.rules {
        validate_schema(rule)?;
    }
    let stages = body
        .stage_points
        .iter()
        .enumerate()
        .map(|(index, stage)| NewStagePoints {
            template_id: 0, // filled in by the repository
            stage_name: stage.stage_name.clone(),
            points_per_win: stage.points_per_win,
            points_per_draw: stage.points_per_draw,
            points_per_loss: stage.points_per_loss,
            sort_order: index as i32,
        })
        .collect();
    let rules = body
        .rules
        .iter()
        .map(|rule| NewConditionalRule {
            template_id: 0,
            condition_type: rule.condition_type.as_str().to_string(),
            operator: rule.operator.as_str().to_string(),
            threshold: rule.threshold,
            point_adjustment: rule.point_adjustment,
        })
        .collect();
    Ok((stages, rules))
}

async fn template_response(
    data: &Data<AppState>,
    template_id: i32,
) -> Result<TemplateResponse, ApiError> {
    let template = data
        .db
        .find_template(template_id)
        .await?
        .ok_or_else(|| ApiError::not_found("point system template", template_id))?;
    let stage_points = data.db.stage_points_for_template(template_id).await?;
    let rules = data.db.rules_for_template(template_id).await?;
    Ok(TemplateResponse {
        template,
        stage_points,
        rules,
    })
}

pub async fn list_templates_service(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let templates = data.db.list_templates().await?;
    Ok(HttpResponse::Ok().json(templates))
}

pub async fn get_template_service(
    data: Data<AppState>,
    template_id: i32,
) -> Result<HttpResponse, ApiError> {
    let response = template_response(&data, template_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn create_template_service(
    data: Data<AppState>,
    body: Json<TemplateSchema>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    validate_schema(&body)?;
    let (stages, rules) = to_children(&body)?;
    let template = data
        .db
        .create_template(to_new_template(&body, false), stages, rules)
        .await?;
    let response = template_response(&data, template.id).await?;
    Ok(HttpResponse::Created().json(response))
}

pub async fn update_template_service(
    data: Data<AppState>,
    template_id: i32,
    body: Json<TemplateSchema>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    validate_schema(&body)?;
    data.db
        .find_template(template_id)
        .await?
        .ok_or_else(|| ApiError::not_found("point system template", template_id))?;
    let (stages, rules) = to_children(&body)?;
    data.db
        .update_template(template_id, to_new_template(&body, true), stages, rules)
        .await?;
    let response = template_response(&data, template_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn delete_template_service(
    data: Data<AppState>,
    template_id: i32,
) -> Result<HttpResponse, ApiError> {
    let deleted = data.db.delete_template(template_id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("point system template", template_id));
    }
    Ok(HttpResponse::NoContent().finish())
}
