use crate::models::schema::{players, tournament_player_stats};
use crate::models::stats::{NewTournamentPlayerStats, TournamentPlayerStats};
use crate::repository::database::{Database, DbError};
use diesel::{ExpressionMethods, JoinOnDsl, QueryDsl};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn stats_for_tournament(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<TournamentPlayerStats>, DbError> {
        let mut conn = self.conn().await?;
        let rows = tournament_player_stats::table
            .filter(tournament_player_stats::tournament_id.eq(tournament_id))
            .order(tournament_player_stats::player_id.asc())
            .load::<TournamentPlayerStats>(&mut conn)
            .await?;
        Ok(rows)
    }

    /// Stats rows joined with player name and club for leaderboard shaping.
    pub async fn stats_with_players(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<(TournamentPlayerStats, String, Option<i32>)>, DbError> {
        let mut conn = self.conn().await?;
        let rows = tournament_player_stats::table
            .inner_join(players::table.on(players::id.eq(tournament_player_stats::player_id)))
            .filter(tournament_player_stats::tournament_id.eq(tournament_id))
            .order(tournament_player_stats::player_id.asc())
            .select((
                tournament_player_stats::all_columns,
                players::name,
                players::club_id,
            ))
            .load::<(TournamentPlayerStats, String, Option<i32>)>(&mut conn)
            .await?;
        Ok(rows)
    }

    /// Drops and re-inserts the rollup rows for one tournament. Running it
    /// again with the same inputs reproduces the exact same rows.
    pub async fn replace_tournament_stats(
        &self,
        tournament_id: i32,
        rows: Vec<NewTournamentPlayerStats>,
    ) -> Result<usize, DbError> {
        let mut conn = self.conn().await?;
        diesel::delete(
            tournament_player_stats::table
                .filter(tournament_player_stats::tournament_id.eq(tournament_id)),
        )
        .execute(&mut conn)
        .await?;
        if rows.is_empty() {
            return Ok(0);
        }
        let inserted = diesel::insert_into(tournament_player_stats::table)
            .values(&rows)
            .execute(&mut conn)
            .await?;
        Ok(inserted)
    }
}
