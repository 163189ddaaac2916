use crate::models::schema::{tournament_participants, tournaments};
use crate::models::tournament::{
    NewTournament, NewTournamentParticipant, Tournament, TournamentParticipant,
};
use crate::repository::database::{Database, DbError};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn list_tournaments(&self) -> Result<Vec<Tournament>, DbError> {
        let mut conn = self.conn().await?;
        let rows = tournaments::table
            .order(tournaments::start_date.desc())
            .load::<Tournament>(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_tournament(&self, tournament_id: i32) -> Result<Option<Tournament>, DbError> {
        let mut conn = self.conn().await?;
        let row = tournaments::table
            .filter(tournaments::id.eq(tournament_id))
            .first::<Tournament>(&mut conn)
            .await
            .optional()?;
        Ok(row)
    }

    pub async fn create_tournament(&self, new_tournament: NewTournament) -> Result<Tournament, DbError> {
        let mut conn = self.conn().await?;
        let row = diesel::insert_into(tournaments::table)
            .values(&new_tournament)
            .get_result::<Tournament>(&mut conn)
            .await?;
        Ok(row)
    }

    pub async fn update_tournament(
        &self,
        tournament_id: i32,
        changes: NewTournament,
    ) -> Result<Tournament, DbError> {
        let mut conn = self.conn().await?;
        let row = diesel::update(tournaments::table.filter(tournaments::id.eq(tournament_id)))
            .set(&changes)
            .get_result::<Tournament>(&mut conn)
            .await?;
        Ok(row)
    }

    pub async fn delete_tournament(&self, tournament_id: i32) -> Result<usize, DbError> {
        let mut conn = self.conn().await?;
        diesel::delete(
            tournament_participants::table
                .filter(tournament_participants::tournament_id.eq(tournament_id)),
        )
        .execute(&mut conn)
        .await?;
        let deleted = diesel::delete(tournaments::table.filter(tournaments::id.eq(tournament_id)))
            .execute(&mut conn)
            .await?;
        Ok(deleted)
    }

    pub async fn list_participants(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<TournamentParticipant>, DbError> {
        let mut conn = self.conn().await?;
        let rows = tournament_participants::table
            .filter(tournament_participants::tournament_id.eq(tournament_id))
            .order(tournament_participants::id.asc())
            .load::<TournamentParticipant>(&mut conn)
            .await?;
        Ok(rows)
    }

    /// Registers the given players, skipping ones already registered.
    pub async fn add_participants(
        &self,
        tournament_id: i32,
        player_ids: &[i32],
    ) -> Result<Vec<TournamentParticipant>, DbError> {
        let existing = self.list_participants(tournament_id).await?;
        let new_rows: Vec<NewTournamentParticipant> = player_ids
            .iter()
            .filter(|pid| !existing.iter().any(|p| p.player_id == **pid))
            .map(|pid| NewTournamentParticipant {
                tournament_id,
                player_id: *pid,
            })
            .collect();
        if !new_rows.is_empty() {
            let mut conn = self.conn().await?;
            diesel::insert_into(tournament_participants::table)
                .values(&new_rows)
                .execute(&mut conn)
                .await?;
        }
        self.list_participants(tournament_id).await
    }
}
