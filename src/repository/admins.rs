use crate::models::admin::{Admin, NewAdmin};
use crate::models::schema::admins::dsl::*;
use crate::repository::database::{Database, DbError};
use diesel::{BoolExpressionMethods, ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn find_admin_by_username(
        &self,
        admin_username: &str,
    ) -> Result<Option<Admin>, DbError> {
        let mut conn = self.conn().await?;
        let row = admins
            .filter(username.eq(admin_username))
            .first::<Admin>(&mut conn)
            .await
            .optional()?;
        Ok(row)
    }

    pub async fn find_admin_by_username_or_email(
        &self,
        admin_username: &str,
        admin_email: &str,
    ) -> Result<Option<Admin>, DbError> {
        let mut conn = self.conn().await?;
        let row = admins
            .filter(username.eq(admin_username).or(email.eq(admin_email)))
            .first::<Admin>(&mut conn)
            .await
            .optional()?;
        Ok(row)
    }

    pub async fn create_admin(&self, new_admin: NewAdmin) -> Result<Admin, DbError> {
        let mut conn = self.conn().await?;
        let row = diesel::insert_into(admins)
            .values(&new_admin)
            .get_result::<Admin>(&mut conn)
            .await?;
        Ok(row)
    }
}
