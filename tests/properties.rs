//! Property tests for the derived-metric rules.

use chrono::{NaiveTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use workforce_metrics::calculation::{
    efficiency_percentage, elapsed_hours, is_overdue, performance_score, productivity_score,
    progress_percentage, total_work_time, validate_time_log,
};
use workforce_metrics::config::{EfficiencyFormula, ProductivityRules, ScoringRules};
use workforce_metrics::models::{MetricType, PerformanceMetric, Task, TaskPriority, TaskStatus};

fn arb_time() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

// Repeating fractions of an hour are rounded at the last decimal place
fn tolerance() -> Decimal {
    Decimal::new(1, 20)
}

fn metric(target: i64, min: i64) -> PerformanceMetric {
    PerformanceMetric {
        id: "packages_per_hour".to_string(),
        name: "Packages per hour".to_string(),
        metric_type: MetricType::Productivity,
        unit: "packages/hour".to_string(),
        target_value: Some(Decimal::from(target)),
        min_value: Some(Decimal::from(min)),
        max_value: None,
        weight: Decimal::ONE,
    }
}

proptest! {
    #[test]
    fn test_elapsed_hours_within_a_day(start in arb_time(), end in arb_time()) {
        let hours = elapsed_hours(start, end);
        prop_assert!(hours >= Decimal::ZERO);
        prop_assert!(hours < Decimal::from(24));
    }

    #[test]
    fn test_elapsed_hours_wraps_to_a_full_day(start in arb_time(), end in arb_time()) {
        prop_assume!(start != end);
        let there = elapsed_hours(start, end);
        let back = elapsed_hours(end, start);
        prop_assert!((there + back - Decimal::from(24)).abs() < tolerance());
    }

    #[test]
    fn test_work_time_is_span_minus_break(
        start in arb_time(),
        end in arb_time(),
        break_minutes in 0u32..600,
    ) {
        let work = total_work_time(start, end, break_minutes);
        let span = elapsed_hours(start, end);
        let break_hours = Decimal::from(break_minutes) / Decimal::from(60);
        prop_assert!((work + break_hours - span).abs() < tolerance());
    }

    #[test]
    fn test_productivity_score_bounded(
        packages in 0u32..10_000,
        received in 0u32..10_000,
        dispatched in 0u32..10_000,
    ) {
        let score = productivity_score(packages, received, dispatched, &ProductivityRules::default());
        prop_assert!(score <= 100);
    }

    #[test]
    fn test_productivity_score_monotonic(packages in 0u32..100, received in 0u32..50) {
        let rules = ProductivityRules::default();
        prop_assert!(
            productivity_score(packages + 1, received, 0, &rules)
                >= productivity_score(packages, received, 0, &rules)
        );
    }

    #[test]
    fn test_performance_score_bounded(
        actual in -1_000i64..1_000,
        min in -100i64..100,
        width in 1i64..200,
    ) {
        let m = metric(min + width, min);
        let score = performance_score(Decimal::from(actual), &m, ScoringRules::default())
            .unwrap()
            .unwrap();
        prop_assert!(score >= Decimal::ZERO);
        prop_assert!(score <= Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_performance_score_monotonic(a in 0i64..200, b in 0i64..200) {
        let m = metric(150, 50);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let rules = ScoringRules::default();
        let low_score = performance_score(Decimal::from(low), &m, rules).unwrap().unwrap();
        let high_score = performance_score(Decimal::from(high), &m, rules).unwrap().unwrap();
        prop_assert!(low_score <= high_score);
    }

    #[test]
    fn test_efficiency_formulas_diverge_with_break(
        span_minutes in 60u32..720,
        break_minutes in 1u32..30,
    ) {
        let span = Decimal::from(span_minutes) / Decimal::from(60);
        let break_hours = Decimal::from(break_minutes) / Decimal::from(60);

        let over_span = efficiency_percentage(span, break_hours, EfficiencyFormula::WorkOverSpan);
        let doubled = efficiency_percentage(span, break_hours, EfficiencyFormula::DoubleDeduction);

        // Deducting the break twice always reports a lower efficiency
        prop_assert!(doubled < over_span);
        prop_assert!(over_span < Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_efficiency_within_percentage_range(
        span_minutes in 0u32..1_440,
        break_minutes in 0u32..1_440,
        double_deduction in any::<bool>(),
    ) {
        let formula = if double_deduction {
            EfficiencyFormula::DoubleDeduction
        } else {
            EfficiencyFormula::WorkOverSpan
        };
        let efficiency = efficiency_percentage(
            Decimal::from(span_minutes) / Decimal::from(60),
            Decimal::from(break_minutes) / Decimal::from(60),
            formula,
        );
        prop_assert!(efficiency >= Decimal::ZERO);
        prop_assert!(efficiency <= Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_progress_clamped(estimated in 1i64..100, actual in 0i64..500) {
        let task = Task {
            id: "task_001".to_string(),
            title: String::new(),
            assigned_to: "emp_001".to_string(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::Medium,
            due_date: Utc.with_ymd_and_hms(2026, 1, 16, 17, 0, 0).unwrap(),
            estimated_hours: Some(Decimal::from(estimated)),
            actual_hours: Some(Decimal::from(actual)),
            start_date: None,
            completion_date: None,
        };
        let progress = progress_percentage(&task);
        prop_assert!(progress >= Decimal::ZERO);
        prop_assert!(progress <= Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_terminal_tasks_never_overdue(
        due_offset_hours in -1_000i64..1_000,
        cancelled in any::<bool>(),
    ) {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let task = Task {
            id: "task_001".to_string(),
            title: String::new(),
            assigned_to: "emp_001".to_string(),
            status: if cancelled { TaskStatus::Cancelled } else { TaskStatus::Completed },
            priority: TaskPriority::Urgent,
            due_date: now + chrono::Duration::hours(due_offset_hours),
            estimated_hours: None,
            actual_hours: None,
            start_date: None,
            completion_date: None,
        };
        prop_assert!(!is_overdue(&task, now));
    }

    #[test]
    fn test_time_log_valid_iff_end_after_start(offset_minutes in -600i64..600) {
        let start = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let end = start + chrono::Duration::minutes(offset_minutes);
        prop_assert_eq!(validate_time_log(start, Some(end)).is_ok(), offset_minutes > 0);
    }
}
