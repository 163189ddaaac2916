use crate::models::point_system::{
    ConditionalRule, NewConditionalRule, NewPointSystemTemplate, NewStagePoints,
    PointSystemTemplate, StagePoints,
};
use crate::models::schema::{conditional_rules, point_system_templates, stage_points};
use crate::repository::database::{Database, DbConn, DbError};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn list_templates(&self) -> Result<Vec<PointSystemTemplate>, DbError> {
        let mut conn = self.conn().await?;
        let rows = point_system_templates::table
            .order(point_system_templates::name.asc())
            .load::<PointSystemTemplate>(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_template(
        &self,
        template_id: i32,
    ) -> Result<Option<PointSystemTemplate>, DbError> {
        let mut conn = self.conn().await?;
        let row = point_system_templates::table
            .filter(point_system_templates::id.eq(template_id))
            .first::<PointSystemTemplate>(&mut conn)
            .await
            .optional()?;
        Ok(row)
    }

    pub async fn stage_points_for_template(
        &self,
        template_id: i32,
    ) -> Result<Vec<StagePoints>, DbError> {
        let mut conn = self.conn().await?;
        let rows = stage_points::table
            .filter(stage_points::template_id.eq(template_id))
            .order(stage_points::sort_order.asc())
            .load::<StagePoints>(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn rules_for_template(
        &self,
        template_id: i32,
    ) -> Result<Vec<ConditionalRule>, DbError> {
        let mut conn = self.conn().await?;
        let rows = conditional_rules::table
            .filter(conditional_rules::template_id.eq(template_id))
            .order(conditional_rules::id.asc())
            .load::<ConditionalRule>(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn create_template(
        &self,
        new_template: NewPointSystemTemplate,
        stages: Vec<NewStagePoints>,
        rules: Vec<NewConditionalRule>,
    ) -> Result<PointSystemTemplate, DbError> {
        let mut conn = self.conn().await?;
        let template = diesel::insert_into(point_system_templates::table)
            .values(&new_template)
            .get_result::<PointSystemTemplate>(&mut conn)
            .await?;
        self.insert_template_children(&mut conn, template.id, stages, rules)
            .await?;
        Ok(template)
    }

    pub async fn update_template(
        &self,
        template_id: i32,
        changes: NewPointSystemTemplate,
        stages: Vec<NewStagePoints>,
        rules: Vec<NewConditionalRule>,
    ) -> Result<PointSystemTemplate, DbError> {
        let mut conn = self.conn().await?;
        let template =
            diesel::update(point_system_templates::table.filter(point_system_templates::id.eq(template_id)))
                .set(&changes)
                .get_result::<PointSystemTemplate>(&mut conn)
                .await?;
        self.delete_template_children(&mut conn, template_id).await?;
        self.insert_template_children(&mut conn, template_id, stages, rules)
            .await?;
        Ok(template)
    }

    pub async fn delete_template(&self, template_id: i32) -> Result<usize, DbError> {
        let mut conn = self.conn().await?;
        self.delete_template_children(&mut conn, template_id).await?;
        let deleted = diesel::delete(
            point_system_templates::table.filter(point_system_templates::id.eq(template_id)),
        )
        .execute(&mut conn)
        .await?;
        Ok(deleted)
    }

    async fn insert_template_children(
        &self,
        conn: &mut DbConn,
        template_id: i32,
        mut stages: Vec<NewStagePoints>,
        mut rules: Vec<NewConditionalRule>,
    ) -> Result<(), DbError> {
        for stage in &mut stages {
            stage.template_id = template_id;
        }
        for rule in &mut rules {
            rule.template_id = template_id;
        }
        if !stages.is_empty() {
            diesel::insert_into(stage_points::table)
                .values(&stages)
                .execute(conn)
                .await?;
        }
        if !rules.is_empty() {
            diesel::insert_into(conditional_rules::table)
                .values(&rules)
                .execute(conn)
                .await?;
        }
        Ok(())
    }

    async fn delete_template_children(
        &self,
        conn: &mut DbConn,
        template_id: i32,
    ) -> Result<(), DbError> {
        diesel::delete(stage_points::table.filter(stage_points::template_id.eq(template_id)))
            .execute(conn)
            .await?;
        diesel::delete(
            conditional_rules::table.filter(conditional_rules::template_id.eq(template_id)),
        )
        .execute(conn)
        .await?;
        Ok(())
    }
}
