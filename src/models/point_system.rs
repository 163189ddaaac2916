use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Which statistic of a match result a conditional rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionType {
    GoalsScored,
    GoalsConceded,
}

impl ConditionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionType::GoalsScored => "GOALS_SCORED",
            ConditionType::GoalsConceded => "GOALS_CONCEDED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "GOALS_SCORED" => Some(ConditionType::GoalsScored),
            "GOALS_CONCEDED" => Some(ConditionType::GoalsConceded),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonOperator {
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    EqualTo,
    NotEqualTo,
}

impl ComparisonOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::GreaterThan => "GREATER_THAN",
            ComparisonOperator::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            ComparisonOperator::LessThan => "LESS_THAN",
            ComparisonOperator::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            ComparisonOperator::EqualTo => "EQUAL_TO",
            ComparisonOperator::NotEqualTo => "NOT_EQUAL_TO",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "GREATER_THAN" => Some(ComparisonOperator::GreaterThan),
            "GREATER_THAN_OR_EQUAL" => Some(ComparisonOperator::GreaterThanOrEqual),
            "LESS_THAN" => Some(ComparisonOperator::LessThan),
            "LESS_THAN_OR_EQUAL" => Some(ComparisonOperator::LessThanOrEqual),
            "EQUAL_TO" => Some(ComparisonOperator::EqualTo),
            "NOT_EQUAL_TO" => Some(ComparisonOperator::NotEqualTo),
            _ => None,
        }
    }

    pub fn compare(&self, value: i32, threshold: i32) -> bool {
        match self {
            ComparisonOperator::GreaterThan => value > threshold,
            ComparisonOperator::GreaterThanOrEqual => value >= threshold,
            ComparisonOperator::LessThan => value < threshold,
            ComparisonOperator::LessThanOrEqual => value <= threshold,
            ComparisonOperator::EqualTo => value == threshold,
            ComparisonOperator::NotEqualTo => value != threshold,
        }
    }
}

#[derive(Debug, Clone, Serialize, Queryable)]
pub struct PointSystemTemplate {
    pub id: i32,
    pub name: String,
    #[serde(rename = "pointsPerWin")]
    pub points_per_win: i32,
    #[serde(rename = "pointsPerDraw")]
    pub points_per_draw: i32,
    #[serde(rename = "pointsPerLoss")]
    pub points_per_loss: i32,
    #[serde(rename = "pointsPerGoalScored")]
    pub points_per_goal_scored: i32,
    #[serde(rename = "pointsPerGoalConceded")]
    pub points_per_goal_conceded: i32,
    #[serde(rename = "walkoverPoints")]
    pub walkover_points: i32,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::models::schema::point_system_templates)]
pub struct NewPointSystemTemplate {
    pub name: String,
    pub points_per_win: i32,
    pub points_per_draw: i32,
    pub points_per_loss: i32,
    pub points_per_goal_scored: i32,
    pub points_per_goal_conceded: i32,
    pub walkover_points: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Queryable)]
pub struct StagePoints {
    pub id: i32,
    #[serde(rename = "templateId")]
    pub template_id: i32,
    #[serde(rename = "stageName")]
    pub stage_name: String,
    #[serde(rename = "pointsPerWin")]
    pub points_per_win: i32,
    #[serde(rename = "pointsPerDraw")]
    pub points_per_draw: i32,
    #[serde(rename = "pointsPerLoss")]
    pub points_per_loss: i32,
    #[serde(rename = "sortOrder")]
    pub sort_order: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::models::schema::stage_points)]
pub struct NewStagePoints {
    pub template_id: i32,
    pub stage_name: String,
    pub points_per_win: i32,
    pub points_per_draw: i32,
    pub points_per_loss: i32,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Queryable)]
pub struct ConditionalRule {
    pub id: i32,
    #[serde(rename = "templateId")]
    pub template_id: i32,
    #[serde(rename = "conditionType")]
    pub condition_type: String,
    pub operator: String,
    pub threshold: i32,
    #[serde(rename = "pointAdjustment")]
    pub point_adjustment: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::models::schema::conditional_rules)]
pub struct NewConditionalRule {
    pub template_id: i32,
    pub condition_type: String,
    pub operator: String,
    pub threshold: i32,
    pub point_adjustment: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct StagePointsSchema {
    #[validate(length(min = 1, max = 80, message = "must be between 1 and 80 characters"))]
    #[serde(rename = "stageName")]
    pub stage_name: String,
    #[serde(rename = "pointsPerWin")]
    pub points_per_win: i32,
    #[serde(rename = "pointsPerDraw")]
    pub points_per_draw: i32,
    #[serde(rename = "pointsPerLoss")]
    pub points_per_loss: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ConditionalRuleSchema {
    #[serde(rename = "conditionType")]
    pub condition_type: ConditionType,
    pub operator: ComparisonOperator,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub threshold: i32,
    #[serde(rename = "pointAdjustment")]
    pub point_adjustment: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TemplateSchema {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,
    #[serde(rename = "pointsPerWin", default)]
    pub points_per_win: i32,
    #[serde(rename = "pointsPerDraw", default)]
    pub points_per_draw: i32,
    #[serde(rename = "pointsPerLoss", default)]
    pub points_per_loss: i32,
    #[serde(rename = "pointsPerGoalScored", default)]
    pub points_per_goal_scored: i32,
    #[serde(rename = "pointsPerGoalConceded", default)]
    pub points_per_goal_conceded: i32,
    #[serde(rename = "walkoverPoints", default)]
    pub walkover_points: i32,
    #[serde(rename = "stagePoints", default)]
    pub stage_points: Vec<StagePointsSchema>,
    #[serde(default)]
    pub rules: Vec<ConditionalRuleSchema>,
}

/// A template together with its ordered stage overrides and rules.
#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    #[serde(flatten)]
    pub template: PointSystemTemplate,
    #[serde(rename = "stagePoints")]
    pub stage_points: Vec<StagePoints>,
    pub rules: Vec<ConditionalRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_compare_against_the_threshold() {
        assert!(ComparisonOperator::GreaterThan.compare(4, 3));
        assert!(!ComparisonOperator::GreaterThan.compare(3, 3));
        assert!(ComparisonOperator::GreaterThanOrEqual.compare(3, 3));
        assert!(ComparisonOperator::LessThan.compare(2, 3));
        assert!(ComparisonOperator::LessThanOrEqual.compare(3, 3));
        assert!(ComparisonOperator::EqualTo.compare(3, 3));
        assert!(ComparisonOperator::NotEqualTo.compare(2, 3));
    }

    #[test]
    fn enums_round_trip_through_their_storage_strings() {
        for op in [
            ComparisonOperator::GreaterThan,
            ComparisonOperator::GreaterThanOrEqual,
            ComparisonOperator::LessThan,
            ComparisonOperator::LessThanOrEqual,
            ComparisonOperator::EqualTo,
            ComparisonOperator::NotEqualTo,
        ] {
            assert_eq!(ComparisonOperator::parse(op.as_str()), Some(op));
        }
        assert_eq!(
            ConditionType::parse("GOALS_SCORED"),
            Some(ConditionType::GoalsScored)
        );
        assert_eq!(ConditionType::parse("SHOTS_TAKEN"), None);
    }
}
