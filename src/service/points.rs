use crate::models::match_result::{MatchResult, Outcome};
use crate::models::point_system::{ComparisonOperator, ConditionType, ConditionalRule, StagePoints};
use crate::models::response::ApiError;
use crate::models::stats::NewTournamentPlayerStats;
use crate::models::tournament::Tournament;
use crate::repository::database::Database;
use log::{error, info, warn};
use serde::Serialize;
use std::collections::BTreeMap;

/// The point configuration in effect for one match: the tournament's explicit
/// fields, with per-outcome values swapped for a template stage override when
/// the match carries a matching stage name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointConfig {
    pub win: i32,
    pub draw: i32,
    pub loss: i32,
    pub per_goal_scored: i32,
    pub per_goal_conceded: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredPoints {
    pub base: i32,
    pub conditional: i32,
    pub total: i32,
}

pub fn resolve_config(
    tournament: &Tournament,
    stages: &[StagePoints],
    stage_name: Option<&str>,
) -> PointConfig {
    let mut config = PointConfig {
        win: tournament.points_per_win,
        draw: tournament.points_per_draw,
        loss: tournament.points_per_loss,
        per_goal_scored: tournament.points_per_goal_scored,
        per_goal_conceded: tournament.points_per_goal_conceded,
    };
    if let Some(stage_name) = stage_name {
        if let Some(stage) = stages.iter().find(|s| s.stage_name == stage_name) {
            config.win = stage.points_per_win;
            config.draw = stage.points_per_draw;
            config.loss = stage.points_per_loss;
        }
    }
    config
}

pub fn base_points(
    outcome: Outcome,
    goals_scored: i32,
    goals_conceded: i32,
    config: &PointConfig,
) -> i32 {
    let outcome_points = match outcome {
        Outcome::Win => config.win,
        Outcome::Draw => config.draw,
        Outcome::Loss => config.loss,
    };
    outcome_points
        + goals_scored * config.per_goal_scored
        + goals_conceded * config.per_goal_conceded
}

/// Sums the adjustments of every rule whose comparison holds against the
/// result's stats. Rules with unknown condition/operator strings are skipped.
pub fn conditional_points(rules: &[ConditionalRule], goals_scored: i32, goals_conceded: i32) -> i32 {
    rules
        .iter()
        .filter_map(|rule| {
            let condition = ConditionType::parse(&rule.condition_type);
            let operator = ComparisonOperator::parse(&rule.operator);
            let (Some(condition), Some(operator)) = (condition, operator) else {
                warn!(
                    "skipping conditional rule {} with unknown condition/operator",
                    rule.id
                );
                return None;
            };
            let stat = match condition {
                ConditionType::GoalsScored => goals_scored,
                ConditionType::GoalsConceded => goals_conceded,
            };
            operator
                .compare(stat, rule.threshold)
                .then_some(rule.point_adjustment)
        })
        .sum()
}

pub fn score_result(
    outcome: Outcome,
    goals_scored: i32,
    goals_conceded: i32,
    config: &PointConfig,
    rules: &[ConditionalRule],
) -> ScoredPoints {
    let base = base_points(outcome, goals_scored, goals_conceded, config);
    let conditional = conditional_points(rules, goals_scored, goals_conceded);
    ScoredPoints {
        base,
        conditional,
        total: base + conditional,
    }
}

/// Sums a set of already-scored results into per-player rollup rows, ordered
/// by player id so repeated runs produce identical output.
pub fn accumulate_stats(
    tournament_id: i32,
    results: &[(MatchResult, Option<String>)],
) -> Vec<NewTournamentPlayerStats> {
    let mut by_player: BTreeMap<i32, NewTournamentPlayerStats> = BTreeMap::new();
    for (result, _) in results {
        let entry = by_player
            .entry(result.player_id)
            .or_insert_with(|| NewTournamentPlayerStats {
                tournament_id,
                player_id: result.player_id,
                matches_played: 0,
                wins: 0,
                draws: 0,
                losses: 0,
                goals_scored: 0,
                goals_conceded: 0,
                conditional_points: 0,
                total_points: 0,
            });
        entry.matches_played += 1;
        match Outcome::parse(&result.outcome) {
            Some(Outcome::Win) => entry.wins += 1,
            Some(Outcome::Draw) => entry.draws += 1,
            Some(Outcome::Loss) => entry.losses += 1,
            None => warn!(
                "match result {} has unknown outcome {:?}",
                result.id, result.outcome
            ),
        }
        entry.goals_scored += result.goals_scored;
        entry.goals_conceded += result.goals_conceded;
        entry.conditional_points += result.conditional_points;
        entry.total_points += result.points_earned;
    }
    by_player.into_values().collect()
}

#[derive(Debug, Serialize)]
pub struct RecalculationSummary {
    #[serde(rename = "tournamentId")]
    pub tournament_id: i32,
    #[serde(rename = "resultsProcessed")]
    pub results_processed: usize,
    #[serde(rename = "resultsChanged")]
    pub results_changed: usize,
    #[serde(rename = "playersUpdated")]
    pub players_updated: usize,
}

/// Recomputes every result's points for the tournament, then rebuilds its
/// per-player rollup rows from the recomputed results. Idempotent: a second
/// run finds nothing to change and writes the same rollups again.
pub async fn recalculate_tournament(
    db: &Database,
    tournament_id: i32,
) -> Result<RecalculationSummary, ApiError> {
    let tournament = db
        .find_tournament(tournament_id)
        .await?
        .ok_or_else(|| ApiError::not_found("tournament", tournament_id))?;

    let (stages, rules) = load_template_config(db, &tournament).await?;

    let mut results = db.results_for_tournament(tournament_id).await?;
    let mut changed = 0;
    for (result, stage_name) in &mut results {
        let Some(outcome) = Outcome::parse(&result.outcome) else {
            error!(
                "match result {} has unknown outcome {:?}, leaving its points alone",
                result.id, result.outcome
            );
            continue;
        };
        let config = resolve_config(&tournament, &stages, stage_name.as_deref());
        let scored = score_result(
            outcome,
            result.goals_scored,
            result.goals_conceded,
            &config,
            &rules,
        );
        if scored.base != result.base_points
            || scored.conditional != result.conditional_points
            || scored.total != result.points_earned
        {
            db.update_result_points(result.id, scored.base, scored.conditional, scored.total)
                .await?;
            result.base_points = scored.base;
            result.conditional_points = scored.conditional;
            result.points_earned = scored.total;
            changed += 1;
        }
    }

    let rollups = accumulate_stats(tournament_id, &results);
    let players_updated = db.replace_tournament_stats(tournament_id, rollups).await?;
    info!(
        "recalculated tournament {}: {} results ({} changed), {} players",
        tournament_id,
        results.len(),
        changed,
        players_updated
    );
    Ok(RecalculationSummary {
        tournament_id,
        results_processed: results.len(),
        results_changed: changed,
        players_updated,
    })
}

/// Loads the stage overrides and conditional rules of the tournament's
/// template, if it references one. A dangling template id is a 404.
pub async fn load_template_config(
    db: &Database,
    tournament: &Tournament,
) -> Result<(Vec<StagePoints>, Vec<ConditionalRule>), ApiError> {
    match tournament.template_id {
        Some(template_id) => {
            db.find_template(template_id)
                .await?
                .ok_or_else(|| ApiError::not_found("point system template", template_id))?;
            let stages = db.stage_points_for_template(template_id).await?;
            let rules = db.rules_for_template(template_id).await?;
            Ok((stages, rules))
        }
        None => Ok((Vec::new(), Vec::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config(win: i32, draw: i32, loss: i32, scored: i32, conceded: i32) -> PointConfig {
        PointConfig {
            win,
            draw,
            loss,
            per_goal_scored: scored,
            per_goal_conceded: conceded,
        }
    }

    fn rule(
        id: i32,
        condition_type: &str,
        operator: &str,
        threshold: i32,
        point_adjustment: i32,
    ) -> ConditionalRule {
        ConditionalRule {
            id,
            template_id: 1,
            condition_type: condition_type.to_string(),
            operator: operator.to_string(),
            threshold,
            point_adjustment,
        }
    }

    fn result(id: i32, player_id: i32, outcome: &str, gs: i32, gc: i32, points: (i32, i32)) -> MatchResult {
        MatchResult {
            id,
            match_id: 1,
            player_id,
            outcome: outcome.to_string(),
            goals_scored: gs,
            goals_conceded: gc,
            base_points: points.0,
            conditional_points: points.1,
            points_earned: points.0 + points.1,
            created_at: None,
            updated_at: None,
        }
    }

    fn tournament() -> Tournament {
        Tournament {
            id: 1,
            name: "Summer Cup".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: None,
            club_id: None,
            template_id: Some(1),
            points_per_win: 3,
            points_per_draw: 1,
            points_per_loss: 0,
            points_per_goal_scored: 1,
            points_per_goal_conceded: -1,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn base_points_combine_outcome_and_goal_coefficients() {
        let cfg = config(3, 1, 0, 1, -1);
        assert_eq!(base_points(Outcome::Win, 2, 1, &cfg), 4);
        assert_eq!(base_points(Outcome::Draw, 0, 0, &cfg), 1);
        assert_eq!(base_points(Outcome::Loss, 1, 3, &cfg), -2);
    }

    #[test]
    fn threshold_rule_fires_strictly_above_the_threshold() {
        let rules = vec![rule(1, "GOALS_SCORED", "GREATER_THAN", 3, 1)];
        assert_eq!(conditional_points(&rules, 4, 0), 1);
        assert_eq!(conditional_points(&rules, 3, 0), 0);
    }

    #[test]
    fn rules_sum_and_may_subtract() {
        let rules = vec![
            rule(1, "GOALS_SCORED", "GREATER_THAN_OR_EQUAL", 2, 2),
            rule(2, "GOALS_CONCEDED", "EQUAL_TO", 0, 1),
            rule(3, "GOALS_CONCEDED", "GREATER_THAN", 4, -3),
        ];
        // clean sheet with 2 goals: first two fire
        assert_eq!(conditional_points(&rules, 2, 0), 3);
        // heavy defeat: only the penalty fires
        assert_eq!(conditional_points(&rules, 1, 5), -3);
    }

    #[test]
    fn unknown_rule_strings_are_skipped() {
        let rules = vec![rule(1, "SHOTS_TAKEN", "GREATER_THAN", 1, 100)];
        assert_eq!(conditional_points(&rules, 10, 10), 0);
    }

    #[test]
    fn total_is_always_base_plus_conditional() {
        let cfg = config(3, 1, 0, 1, -1);
        let rules = vec![
            rule(1, "GOALS_SCORED", "GREATER_THAN", 3, 1),
            rule(2, "GOALS_CONCEDED", "EQUAL_TO", 0, 2),
        ];
        for (outcome, gs, gc) in [
            (Outcome::Win, 4, 0),
            (Outcome::Draw, 2, 2),
            (Outcome::Loss, 0, 6),
        ] {
            let scored = score_result(outcome, gs, gc, &cfg, &rules);
            assert_eq!(scored.total, scored.base + scored.conditional);
        }
    }

    #[test]
    fn stage_override_replaces_outcome_points_only() {
        let stages = vec![StagePoints {
            id: 1,
            template_id: 1,
            stage_name: "FINAL".to_string(),
            points_per_win: 5,
            points_per_draw: 2,
            points_per_loss: 1,
            sort_order: 0,
        }];
        let t = tournament();
        let final_cfg = resolve_config(&t, &stages, Some("FINAL"));
        assert_eq!(final_cfg.win, 5);
        assert_eq!(final_cfg.per_goal_scored, 1);
        assert_eq!(final_cfg.per_goal_conceded, -1);

        let group_cfg = resolve_config(&t, &stages, Some("GROUP"));
        assert_eq!(group_cfg.win, 3);
        let no_stage_cfg = resolve_config(&t, &stages, None);
        assert_eq!(no_stage_cfg, group_cfg);
    }

    #[test]
    fn rollups_sum_each_players_results() {
        let results = vec![
            (result(1, 7, "WIN", 2, 1, (4, 1)), None),
            (result(2, 7, "LOSS", 0, 2, (-2, 0)), Some("FINAL".to_string())),
            (result(3, 9, "DRAW", 1, 1, (1, 0)), None),
        ];
        let rollups = accumulate_stats(42, &results);
        assert_eq!(rollups.len(), 2);

        let p7 = &rollups[0];
        assert_eq!(p7.player_id, 7);
        assert_eq!(p7.matches_played, 2);
        assert_eq!((p7.wins, p7.draws, p7.losses), (1, 0, 1));
        assert_eq!((p7.goals_scored, p7.goals_conceded), (2, 3));
        assert_eq!(p7.conditional_points, 1);
        assert_eq!(p7.total_points, 3);

        let p9 = &rollups[1];
        assert_eq!(p9.player_id, 9);
        assert_eq!(p9.matches_played, 1);
        assert_eq!(p9.total_points, 1);
    }

    #[test]
    fn accumulation_is_deterministic() {
        let results = vec![
            (result(1, 3, "WIN", 1, 0, (4, 0)), None),
            (result(2, 1, "LOSS", 0, 1, (-1, 0)), None),
            (result(3, 2, "DRAW", 2, 2, (1, 0)), None),
        ];
        let first = accumulate_stats(5, &results);
        let second = accumulate_stats(5, &results);
        assert_eq!(first, second);
        let ids: Vec<i32> = first.iter().map(|r| r.player_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
