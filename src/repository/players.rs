use crate::models::player::{NewPlayer, NewPlayerRole, Player, PlayerRole};
use crate::models::schema::{player_roles, players};
use crate::repository::database::{Database, DbError};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;

/// Optional filters for the player listing; `free_agents` wins over `club_id`
/// when both are supplied.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlayerFilter {
    pub club_id: Option<i32>,
    pub free_agents: bool,
}

impl Database {
    pub async fn list_players(&self, filter: PlayerFilter) -> Result<Vec<Player>, DbError> {
        let mut conn = self.conn().await?;
        let mut query = players::table.into_boxed();
        if filter.free_agents {
            query = query.filter(players::club_id.is_null());
        } else if let Some(club) = filter.club_id {
            query = query.filter(players::club_id.eq(club));
        }
        let rows = query
            .order(players::name.asc())
            .load::<Player>(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_player(&self, player_id: i32) -> Result<Option<Player>, DbError> {
        let mut conn = self.conn().await?;
        let row = players::table
            .filter(players::id.eq(player_id))
            .first::<Player>(&mut conn)
            .await
            .optional()?;
        Ok(row)
    }

    pub async fn find_player_by_email(&self, player_email: &str) -> Result<Option<Player>, DbError> {
        let mut conn = self.conn().await?;
        let row = players::table
            .filter(players::email.eq(player_email))
            .first::<Player>(&mut conn)
            .await
            .optional()?;
        Ok(row)
    }

    pub async fn create_player(
        &self,
        new_player: NewPlayer,
        roles: &[&str],
    ) -> Result<Player, DbError> {
        let mut conn = self.conn().await?;
        let player = diesel::insert_into(players::table)
            .values(&new_player)
            .get_result::<Player>(&mut conn)
            .await?;
        self.replace_player_roles_on(&mut conn, player.id, roles)
            .await?;
        Ok(player)
    }

    pub async fn update_player(
        &self,
        player_id: i32,
        changes: NewPlayer,
        roles: &[&str],
    ) -> Result<Player, DbError> {
        let mut conn = self.conn().await?;
        let player = diesel::update(players::table.filter(players::id.eq(player_id)))
            .set(&changes)
            .get_result::<Player>(&mut conn)
            .await?;
        self.replace_player_roles_on(&mut conn, player.id, roles)
            .await?;
        Ok(player)
    }

    pub async fn delete_player(&self, player_id: i32) -> Result<usize, DbError> {
        let mut conn = self.conn().await?;
        diesel::delete(player_roles::table.filter(player_roles::player_id.eq(player_id)))
            .execute(&mut conn)
            .await?;
        let deleted = diesel::delete(players::table.filter(players::id.eq(player_id)))
            .execute(&mut conn)
            .await?;
        Ok(deleted)
    }

    pub async fn roles_for_player(&self, player_id: i32) -> Result<Vec<PlayerRole>, DbError> {
        let mut conn = self.conn().await?;
        let rows = player_roles::table
            .filter(player_roles::player_id.eq(player_id))
            .order(player_roles::id.asc())
            .load::<PlayerRole>(&mut conn)
            .await?;
        Ok(rows)
    }

    async fn replace_player_roles_on(
        &self,
        conn: &mut crate::repository::database::DbConn,
        player_id: i32,
        roles: &[&str],
    ) -> Result<(), DbError> {
        diesel::delete(player_roles::table.filter(player_roles::player_id.eq(player_id)))
            .execute(conn)
            .await?;
        let new_roles: Vec<NewPlayerRole> = roles
            .iter()
            .map(|role| NewPlayerRole {
                player_id,
                role: (*role).to_string(),
            })
            .collect();
        if !new_roles.is_empty() {
            diesel::insert_into(player_roles::table)
                .values(&new_roles)
                .execute(conn)
                .await?;
        }
        Ok(())
    }
}
