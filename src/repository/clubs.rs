use crate::models::club::{Club, NewClub};
use crate::models::schema::clubs::dsl::*;
use crate::repository::database::{Database, DbError};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn list_clubs(&self) -> Result<Vec<Club>, DbError> {
        let mut conn = self.conn().await?;
        let rows = clubs.order(name.asc()).load::<Club>(&mut conn).await?;
        Ok(rows)
    }

    pub async fn find_club(&self, club_id: i32) -> Result<Option<Club>, DbError> {
        let mut conn = self.conn().await?;
        let row = clubs
            .filter(id.eq(club_id))
            .first::<Club>(&mut conn)
            .await
            .optional()?;
        Ok(row)
    }

    pub async fn create_club(&self, new_club: NewClub) -> Result<Club, DbError> {
        let mut conn = self.conn().await?;
        let row = diesel::insert_into(clubs)
            .values(&new_club)
            .get_result::<Club>(&mut conn)
            .await?;
        Ok(row)
    }

    pub async fn update_club(&self, club_id: i32, changes: NewClub) -> Result<Club, DbError> {
        let mut conn = self.conn().await?;
        let row = diesel::update(clubs.filter(id.eq(club_id)))
            .set(&changes)
            .get_result::<Club>(&mut conn)
            .await?;
        Ok(row)
    }

    pub async fn delete_club(&self, club_id: i32) -> Result<usize, DbError> {
        let mut conn = self.conn().await?;
        let deleted = diesel::delete(clubs.filter(id.eq(club_id)))
            .execute(&mut conn)
            .await?;
        Ok(deleted)
    }
}
