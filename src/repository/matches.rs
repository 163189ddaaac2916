use crate::models::match_result::{Match, MatchResult, NewMatch, NewMatchResult};
use crate::models::schema::{match_results, matches, players};
use crate::repository::database::{Database, DbConn, DbError};
use diesel::{ExpressionMethods, JoinOnDsl, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn list_matches(&self, tournament_id: i32) -> Result<Vec<Match>, DbError> {
        let mut conn = self.conn().await?;
        let rows = matches::table
            .filter(matches::tournament_id.eq(tournament_id))
            .order(matches::match_date.asc())
            .load::<Match>(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_match(&self, match_id: i32) -> Result<Option<Match>, DbError> {
        let mut conn = self.conn().await?;
        let row = matches::table
            .filter(matches::id.eq(match_id))
            .first::<Match>(&mut conn)
            .await
            .optional()?;
        Ok(row)
    }

    pub async fn create_match(
        &self,
        new_match: NewMatch,
        mut results: Vec<NewMatchResult>,
    ) -> Result<Match, DbError> {
        let mut conn = self.conn().await?;
        let match_record = diesel::insert_into(matches::table)
            .values(&new_match)
            .get_result::<Match>(&mut conn)
            .await?;
        for result in &mut results {
            result.match_id = match_record.id;
        }
        if !results.is_empty() {
            diesel::insert_into(match_results::table)
                .values(&results)
                .execute(&mut conn)
                .await?;
        }
        Ok(match_record)
    }

    /// Updates the match row and replaces its result set wholesale.
    pub async fn update_match(
        &self,
        match_id: i32,
        changes: NewMatch,
        mut results: Vec<NewMatchResult>,
    ) -> Result<Match, DbError> {
        let mut conn = self.conn().await?;
        let match_record = diesel::update(matches::table.filter(matches::id.eq(match_id)))
            .set(&changes)
            .get_result::<Match>(&mut conn)
            .await?;
        self.delete_results_for_match(&mut conn, match_id).await?;
        for result in &mut results {
            result.match_id = match_id;
        }
        if !results.is_empty() {
            diesel::insert_into(match_results::table)
                .values(&results)
                .execute(&mut conn)
                .await?;
        }
        Ok(match_record)
    }

    pub async fn delete_match(&self, match_id: i32) -> Result<usize, DbError> {
        let mut conn = self.conn().await?;
        self.delete_results_for_match(&mut conn, match_id).await?;
        let deleted = diesel::delete(matches::table.filter(matches::id.eq(match_id)))
            .execute(&mut conn)
            .await?;
        Ok(deleted)
    }

    pub async fn results_for_match(&self, match_id: i32) -> Result<Vec<MatchResult>, DbError> {
        let mut conn = self.conn().await?;
        let rows = match_results::table
            .filter(match_results::match_id.eq(match_id))
            .order(match_results::id.asc())
            .load::<MatchResult>(&mut conn)
            .await?;
        Ok(rows)
    }

    /// Every result of a tournament, paired with the stage its match was
    /// played in. This is the input to recalculation.
    pub async fn results_for_tournament(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<(MatchResult, Option<String>)>, DbError> {
        let mut conn = self.conn().await?;
        let rows = match_results::table
            .inner_join(matches::table.on(matches::id.eq(match_results::match_id)))
            .filter(matches::tournament_id.eq(tournament_id))
            .order(match_results::id.asc())
            .select((match_results::all_columns, matches::stage_name))
            .load::<(MatchResult, Option<String>)>(&mut conn)
            .await?;
        Ok(rows)
    }

    /// Every stored result joined with the player it belongs to, for the
    /// global and club leaderboards.
    pub async fn results_with_players(
        &self,
    ) -> Result<Vec<(MatchResult, i32, String, Option<i32>)>, DbError> {
        let mut conn = self.conn().await?;
        let rows = match_results::table
            .inner_join(players::table.on(players::id.eq(match_results::player_id)))
            .order(match_results::id.asc())
            .select((
                match_results::all_columns,
                players::id,
                players::name,
                players::club_id,
            ))
            .load::<(MatchResult, i32, String, Option<i32>)>(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn update_result_points(
        &self,
        result_id: i32,
        base: i32,
        conditional: i32,
        total: i32,
    ) -> Result<(), DbError> {
        let mut conn = self.conn().await?;
        diesel::update(match_results::table.filter(match_results::id.eq(result_id)))
            .set((
                match_results::base_points.eq(base),
                match_results::conditional_points.eq(conditional),
                match_results::points_earned.eq(total),
            ))
            .execute(&mut conn)
            .await?;
        Ok(())
    }

    async fn delete_results_for_match(
        &self,
        conn: &mut DbConn,
        match_id: i32,
    ) -> Result<(), DbError> {
        diesel::delete(match_results::table.filter(match_results::match_id.eq(match_id)))
            .execute(conn)
            .await?;
        Ok(())
    }
}
