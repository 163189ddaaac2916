use crate::models::club::Club;
use crate::models::match_result::{MatchResult, Outcome};
use crate::models::response::ApiError;
use crate::models::stats::{ClubLeaderboardEntry, LeaderboardEntry};
use crate::repository::database::Database;
use log::warn;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Unranked per-player sums, the input to ranking.
#[derive(Debug, Clone)]
pub struct PlayerTotals {
    pub player_id: i32,
    pub player_name: String,
    pub club_id: Option<i32>,
    pub matches_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_scored: i32,
    pub goals_conceded: i32,
    pub total_points: i32,
}

#[derive(Debug, Clone)]
pub struct ClubTotals {
    pub club_id: i32,
    pub club_name: String,
    pub matches_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_scored: i32,
    pub goals_conceded: i32,
    pub total_points: i32,
}

/// wins / matchesPlayed × 100, two decimal places, 0 for an empty record.
pub fn win_rate(wins: i32, matches_played: i32) -> f64 {
    if matches_played == 0 {
        return 0.0;
    }
    let rate = f64::from(wins) / f64::from(matches_played) * 100.0;
    (rate * 100.0).round() / 100.0
}

fn standings_order(
    points: (i32, i32, i32),
    other: (i32, i32, i32),
) -> Ordering {
    // total points desc, goals scored desc, goals conceded asc
    other
        .0
        .cmp(&points.0)
        .then(other.1.cmp(&points.1))
        .then(points.2.cmp(&other.2))
}

/// Sorts and assigns 1-based ranks. Equal totals keep distinct sequential
/// ranks; nothing is merged.
pub fn rank_players(mut rows: Vec<PlayerTotals>) -> Vec<LeaderboardEntry> {
    rows.sort_by(|a, b| {
        standings_order(
            (a.total_points, a.goals_scored, a.goals_conceded),
            (b.total_points, b.goals_scored, b.goals_conceded),
        )
    });
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| LeaderboardEntry {
            rank: index + 1,
            player_id: row.player_id,
            player_name: row.player_name,
            club_id: row.club_id,
            matches_played: row.matches_played,
            wins: row.wins,
            draws: row.draws,
            losses: row.losses,
            goals_scored: row.goals_scored,
            goals_conceded: row.goals_conceded,
            goal_difference: row.goals_scored - row.goals_conceded,
            win_rate: win_rate(row.wins, row.matches_played),
            total_points: row.total_points,
        })
        .collect()
}

pub fn rank_clubs(mut rows: Vec<ClubTotals>) -> Vec<ClubLeaderboardEntry> {
    rows.sort_by(|a, b| {
        standings_order(
            (a.total_points, a.goals_scored, a.goals_conceded),
            (b.total_points, b.goals_scored, b.goals_conceded),
        )
    });
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| ClubLeaderboardEntry {
            rank: index + 1,
            club_id: row.club_id,
            club_name: row.club_name,
            matches_played: row.matches_played,
            wins: row.wins,
            draws: row.draws,
            losses: row.losses,
            goals_scored: row.goals_scored,
            goals_conceded: row.goals_conceded,
            goal_difference: row.goals_scored - row.goals_conceded,
            win_rate: win_rate(row.wins, row.matches_played),
            total_points: row.total_points,
        })
        .collect()
}

/// Ranking for one tournament, read from the materialized rollup rows.
pub async fn tournament_leaderboard(
    db: &Database,
    tournament_id: i32,
) -> Result<Vec<LeaderboardEntry>, ApiError> {
    db.find_tournament(tournament_id)
        .await?
        .ok_or_else(|| ApiError::not_found("tournament", tournament_id))?;
    let rows = db.stats_with_players(tournament_id).await?;
    let totals = rows
        .into_iter()
        .map(|(stats, player_name, club_id)| PlayerTotals {
            player_id: stats.player_id,
            player_name,
            club_id,
            matches_played: stats.matches_played,
            wins: stats.wins,
            draws: stats.draws,
            losses: stats.losses,
            goals_scored: stats.goals_scored,
            goals_conceded: stats.goals_conceded,
            total_points: stats.total_points,
        })
        .collect();
    Ok(rank_players(totals))
}

/// Tallies one result into a win/draw/loss column. Rows holding an outcome
/// string we do not recognize are logged and left out of the tally, matching
/// how recalculation treats them.
fn tally_outcome(result: &MatchResult, wins: &mut i32, draws: &mut i32, losses: &mut i32) {
    match Outcome::parse(&result.outcome) {
        Some(Outcome::Win) => *wins += 1,
        Some(Outcome::Draw) => *draws += 1,
        Some(Outcome::Loss) => *losses += 1,
        None => warn!(
            "match result {} has unknown outcome {:?}",
            result.id, result.outcome
        ),
    }
}

fn player_totals_from_results(
    rows: Vec<(MatchResult, i32, String, Option<i32>)>,
) -> Vec<PlayerTotals> {
    let mut by_player: BTreeMap<i32, PlayerTotals> = BTreeMap::new();
    for (result, player_id, player_name, club_id) in rows {
        let entry = by_player.entry(player_id).or_insert_with(|| PlayerTotals {
            player_id,
            player_name: player_name.clone(),
            club_id,
            matches_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_scored: 0,
            goals_conceded: 0,
            total_points: 0,
        });
        entry.matches_played += 1;
        tally_outcome(&result, &mut entry.wins, &mut entry.draws, &mut entry.losses);
        entry.goals_scored += result.goals_scored;
        entry.goals_conceded += result.goals_conceded;
        entry.total_points += result.points_earned;
    }
    by_player.into_values().collect()
}

/// Global ranking, aggregated over every stored match result.
pub async fn global_leaderboard(db: &Database) -> Result<Vec<LeaderboardEntry>, ApiError> {
    let rows = db.results_with_players().await?;
    Ok(rank_players(player_totals_from_results(rows)))
}

fn club_totals_from_results(
    clubs: Vec<Club>,
    rows: Vec<(MatchResult, i32, String, Option<i32>)>,
) -> Vec<ClubTotals> {
    let mut by_club: BTreeMap<i32, ClubTotals> = clubs
        .into_iter()
        .map(|club| {
            (
                club.id,
                ClubTotals {
                    club_id: club.id,
                    club_name: club.name,
                    matches_played: 0,
                    wins: 0,
                    draws: 0,
                    losses: 0,
                    goals_scored: 0,
                    goals_conceded: 0,
                    total_points: 0,
                },
            )
        })
        .collect();

    for (result, _, _, club_id) in rows {
        let Some(club_id) = club_id else { continue };
        let Some(entry) = by_club.get_mut(&club_id) else {
            continue;
        };
        entry.matches_played += 1;
        tally_outcome(&result, &mut entry.wins, &mut entry.draws, &mut entry.losses);
        entry.goals_scored += result.goals_scored;
        entry.goals_conceded += result.goals_conceded;
        entry.total_points += result.points_earned;
    }
    by_club.into_values().collect()
}

/// Club ranking, summed across each club's players' match results. There is
/// no per-club stats table; free agents do not contribute anywhere.
pub async fn club_leaderboard(db: &Database) -> Result<Vec<ClubLeaderboardEntry>, ApiError> {
    let clubs = db.list_clubs().await?;
    let rows = db.results_with_players().await?;
    Ok(rank_clubs(club_totals_from_results(clubs, rows)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(player_id: i32, points: i32, scored: i32, conceded: i32) -> PlayerTotals {
        PlayerTotals {
            player_id,
            player_name: format!("player {}", player_id),
            club_id: None,
            matches_played: 4,
            wins: 2,
            draws: 1,
            losses: 1,
            goals_scored: scored,
            goals_conceded: conceded,
            total_points: points,
        }
    }

    #[test]
    fn ties_keep_distinct_sequential_ranks() {
        let ranked = rank_players(vec![
            totals(1, 10, 5, 5),
            totals(2, 10, 5, 5),
            totals(3, 8, 9, 1),
        ]);
        let ranks: Vec<usize> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(ranked[2].player_id, 3);
    }

    #[test]
    fn goals_break_point_ties() {
        let ranked = rank_players(vec![
            totals(1, 10, 3, 2),
            totals(2, 10, 6, 2),
            totals(3, 10, 6, 1),
        ]);
        let order: Vec<i32> = ranked.iter().map(|e| e.player_id).collect();
        // equal points: more goals scored first, then fewer conceded
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn win_rate_handles_an_empty_record() {
        assert_eq!(win_rate(0, 0), 0.0);
        assert_eq!(win_rate(1, 3), 33.33);
        assert_eq!(win_rate(2, 4), 50.0);
    }

    #[test]
    fn derived_fields_are_computed_per_row() {
        let ranked = rank_players(vec![totals(1, 10, 7, 3)]);
        assert_eq!(ranked[0].goal_difference, 4);
        assert_eq!(ranked[0].win_rate, 50.0);
    }

    fn stored_result(id: i32, outcome: &str, points: i32) -> MatchResult {
        MatchResult {
            id,
            match_id: 1,
            player_id: 7,
            outcome: outcome.to_string(),
            goals_scored: 1,
            goals_conceded: 0,
            base_points: points,
            conditional_points: 0,
            points_earned: points,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn unknown_outcomes_are_not_counted_as_losses() {
        let rows = vec![
            (stored_result(1, "WIN", 4), 7, "player 7".to_string(), Some(3)),
            (stored_result(2, "WALKOVER", 0), 7, "player 7".to_string(), Some(3)),
        ];
        let totals = player_totals_from_results(rows.clone());
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].matches_played, 2);
        assert_eq!((totals[0].wins, totals[0].draws, totals[0].losses), (1, 0, 0));
        assert_eq!(totals[0].total_points, 4);

        let clubs = vec![Club {
            id: 3,
            name: "club 3".to_string(),
            logo: None,
            description: None,
            created_at: None,
            updated_at: None,
        }];
        let club_totals = club_totals_from_results(clubs, rows);
        assert_eq!((club_totals[0].wins, club_totals[0].losses), (1, 0));
        assert_eq!(club_totals[0].matches_played, 2);
    }
}
