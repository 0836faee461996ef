use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use discipline_core_api::domain::{
    days_until_expiration, expiring_soon, window_start, DisciplineLevel,
};
use discipline_core_api::error::{DomainError, DomainResult};
use discipline_core_api::service::{ExpiringContribution, PointStanding, PointsSummary};

use crate::repository::{
    CorrectiveActionRepository, EmployeeDirectory, PointAdjustmentRepository,
};

/// Read-only derivation of an employee's standing under the rolling window.
///
/// Mutates nothing; the only failure mode beyond store errors is an unknown
/// employee, so callers may invoke it speculatively.
pub struct PointsService {
    actions: Arc<dyn CorrectiveActionRepository>,
    adjustments: Arc<dyn PointAdjustmentRepository>,
    employees: Arc<dyn EmployeeDirectory>,
}

impl PointsService {
    pub fn new(
        actions: Arc<dyn CorrectiveActionRepository>,
        adjustments: Arc<dyn PointAdjustmentRepository>,
        employees: Arc<dyn EmployeeDirectory>,
    ) -> Self {
        Self {
            actions,
            adjustments,
            employees,
        }
    }
}

#[async_trait]
impl PointStanding for PointsService {
    async fn summary(
        &self,
        employee_id: Uuid,
        as_of: Option<DateTime<Utc>>,
    ) -> DomainResult<PointsSummary> {
        let found = self
            .employees
            .exists(employee_id)
            .await
            .map_err(DomainError::from_store)?;
        if !found {
            return Err(DomainError::NotFound(format!("employee {employee_id}")));
        }

        // `as_of` is explicit so the derivation is deterministic; the wall
        // clock only enters at this call boundary.
        let as_of = as_of.unwrap_or_else(Utc::now);
        let start = window_start(as_of);

        let countable = self
            .actions
            .find_countable_since(employee_id, start)
            .await
            .map_err(DomainError::from_store)?;

        let current_points: i32 = countable.iter().map(|a| a.effective_points()).sum();
        let level = DisciplineLevel::for_points(current_points);

        let mut expiring: Vec<ExpiringContribution> = countable
            .iter()
            .filter(|a| expiring_soon(a.violation_date, as_of))
            .map(|a| ExpiringContribution {
                action_id: a.id,
                category_id: a.category_id,
                effective_points: a.effective_points(),
                violation_date: a.violation_date,
                expires_at: a.expires_at(),
                days_remaining: days_until_expiration(a.violation_date, as_of),
            })
            .collect();
        expiring.sort_by_key(|e| e.expires_at);

        // Adjustments ride alongside the ledger sum; they are reported with
        // their own total and never folded into `current_points`.
        let adjustments = self
            .adjustments
            .find_effective_between(employee_id, start, as_of)
            .await
            .map_err(DomainError::from_store)?;
        let adjustment_total: i32 = adjustments.iter().map(|a| a.delta).sum();

        Ok(PointsSummary {
            employee_id,
            as_of,
            window_start: start,
            current_points,
            level,
            next_threshold: level.next_threshold(),
            points_to_next: level.points_to_next(current_points),
            expiring_soon: expiring,
            adjustments: adjustments.iter().map(Into::into).collect(),
            adjustment_total,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use uuid::Uuid;

    use discipline_core_api::domain::DisciplineLevel;
    use discipline_core_api::error::DomainError;
    use discipline_core_api::service::{
        CorrectiveActionLedger, IssueActionRequest, PointStanding, RecordAdjustmentRequest,
        VoidActionRequest,
    };

    use crate::service::fixtures::{admin_ctx, harness, Harness};

    /// Issue an action with an explicit violation date; returns the action id.
    async fn issue_on(
        h: &Harness,
        employee_id: Uuid,
        category_id: Uuid,
        violation_date: DateTime<Utc>,
    ) -> Uuid {
        h.ledger
            .issue(
                &admin_ctx(),
                IssueActionRequest {
                    employee_id,
                    category_id,
                    violation_date,
                    points: None,
                },
            )
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn fresh_six_point_action_lands_at_verbal_warning() {
        let h = harness();
        let employee_id = h.seed_employee();
        let category_id = h.seed_category(6);
        let now = Utc::now();

        issue_on(&h, employee_id, category_id, now).await;

        let summary = h.points.summary(employee_id, Some(now)).await.unwrap();
        assert_eq!(summary.current_points, 6);
        assert_eq!(summary.level, DisciplineLevel::VerbalWarning);
        assert_eq!(summary.next_threshold, Some(10));
        assert_eq!(summary.points_to_next, Some(4));
    }

    #[tokio::test]
    async fn points_older_than_the_window_decay_out() {
        let h = harness();
        let employee_id = h.seed_employee();
        let category_id = h.seed_category(4);
        let day_zero = Utc::now() - Duration::days(100);

        // Two 4-point actions on relative day 0 and day 95, summarized at
        // day 100: only the day-95 action is inside the 90-day window.
        issue_on(&h, employee_id, category_id, day_zero).await;
        issue_on(&h, employee_id, category_id, day_zero + Duration::days(95)).await;

        let summary = h
            .points
            .summary(employee_id, Some(day_zero + Duration::days(100)))
            .await
            .unwrap();
        assert_eq!(summary.current_points, 4);
        assert_eq!(summary.level, DisciplineLevel::Coaching);
    }

    #[tokio::test]
    async fn voided_actions_are_excluded_from_the_sum() {
        let h = harness();
        let employee_id = h.seed_employee();
        let category_id = h.seed_category(6);
        let now = Utc::now();

        let action_id = issue_on(&h, employee_id, category_id, now).await;
        h.ledger
            .void(
                &admin_ctx(),
                action_id,
                VoidActionRequest {
                    reason: "Filed in error".to_string(),
                },
            )
            .await
            .unwrap();

        let summary = h.points.summary(employee_id, Some(now)).await.unwrap();
        assert_eq!(summary.current_points, 0);
        assert_eq!(summary.level, DisciplineLevel::GoodStanding);
        assert_eq!(summary.next_threshold, Some(6));

        // Still on file though.
        let history = h.ledger.history(employee_id).await.unwrap();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn adjusted_points_replace_assigned_points_in_the_sum() {
        let h = harness();
        let employee_id = h.seed_employee();
        let category_id = h.seed_category(6);
        let now = Utc::now();

        let action_id = issue_on(&h, employee_id, category_id, now).await;
        h.ledger
            .adjust_points(&admin_ctx(), action_id, Some(2))
            .await
            .unwrap();

        let summary = h.points.summary(employee_id, Some(now)).await.unwrap();
        assert_eq!(summary.current_points, 2);
        assert_eq!(summary.level, DisciplineLevel::Coaching);
    }

    #[tokio::test]
    async fn escalation_accumulates_across_actions() {
        let h = harness();
        let employee_id = h.seed_employee();
        let category_id = h.seed_category(6);
        let now = Utc::now();

        issue_on(&h, employee_id, category_id, now - Duration::days(10)).await;
        issue_on(&h, employee_id, category_id, now - Duration::days(5)).await;
        issue_on(&h, employee_id, category_id, now).await;

        let summary = h.points.summary(employee_id, Some(now)).await.unwrap();
        assert_eq!(summary.current_points, 18);
        assert_eq!(summary.level, DisciplineLevel::Termination);
        assert_eq!(summary.next_threshold, None);
        assert_eq!(summary.points_to_next, None);
    }

    #[tokio::test]
    async fn expiring_soon_lists_only_the_warning_horizon_sorted() {
        let h = harness();
        let employee_id = h.seed_employee();
        let category_id = h.seed_category(2);
        let now = Utc::now();

        // Expires in 5 days.
        let oldest = issue_on(&h, employee_id, category_id, now - Duration::days(85)).await;
        // Expires in 20 days.
        let middle = issue_on(&h, employee_id, category_id, now - Duration::days(70)).await;
        // Expires in 60 days: outside the warning horizon.
        issue_on(&h, employee_id, category_id, now - Duration::days(30)).await;

        let summary = h.points.summary(employee_id, Some(now)).await.unwrap();
        assert_eq!(summary.current_points, 6);

        let ids: Vec<Uuid> = summary.expiring_soon.iter().map(|e| e.action_id).collect();
        assert_eq!(ids, vec![oldest, middle]);
        assert!(summary.expiring_soon[0].days_remaining <= summary.expiring_soon[1].days_remaining);
        assert!(summary
            .expiring_soon
            .iter()
            .all(|e| e.days_remaining > 0 && e.days_remaining <= 30));
    }

    #[tokio::test]
    async fn adjustments_ride_alongside_without_merging() {
        let h = harness();
        let employee_id = h.seed_employee();
        let category_id = h.seed_category(6);
        let now = Utc::now();

        issue_on(&h, employee_id, category_id, now).await;
        h.ledger
            .record_adjustment(
                &admin_ctx(),
                RecordAdjustmentRequest {
                    employee_id,
                    delta: -4,
                    effective_date: now - Duration::days(1),
                    note: None,
                },
            )
            .await
            .unwrap();

        let summary = h.points.summary(employee_id, Some(now)).await.unwrap();
        // The ledger sum stays untouched; the adjustment shows up next to it.
        assert_eq!(summary.current_points, 6);
        assert_eq!(summary.level, DisciplineLevel::VerbalWarning);
        assert_eq!(summary.adjustments.len(), 1);
        assert_eq!(summary.adjustment_total, -4);
    }

    #[tokio::test]
    async fn unknown_employee_is_the_only_failure_mode() {
        let h = harness();
        let missing = h.points.summary(Uuid::new_v4(), None).await;
        assert!(matches!(missing, Err(DomainError::NotFound(_))));

        let employee_id = h.seed_employee();
        let summary = h.points.summary(employee_id, None).await.unwrap();
        assert_eq!(summary.current_points, 0);
        assert_eq!(summary.level, DisciplineLevel::GoodStanding);
        assert!(summary.expiring_soon.is_empty());
        assert!(summary.adjustments.is_empty());
    }
}
