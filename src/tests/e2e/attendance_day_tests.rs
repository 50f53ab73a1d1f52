use crate::modules::attendance::core::timesheet::TimesheetStatus;
use crate::modules::attendance::use_cases::clock_in::handler::ClockInHandler;
use crate::modules::attendance::use_cases::clock_out::handler::ClockOutHandler;
use crate::modules::attendance::use_cases::end_break::handler::EndBreakHandler;
use crate::modules::attendance::use_cases::review_timesheet::handler::{
    ReviewAction, ReviewTimesheetHandler,
};
use crate::modules::attendance::use_cases::start_break::handler::StartBreakHandler;
use crate::modules::attendance::use_cases::summarize_timesheet::handler::SummarizeTimesheetHandler;
use crate::shared::core::primitives::Minutes;
use crate::shared::infrastructure::timesheet_store::in_memory::InMemoryTimesheetStore;
use crate::tests::fixtures::{AttendanceCommandBuilder, january};
use std::sync::Arc;

fn punch(timestamp: &str) -> crate::modules::attendance::use_cases::punch::AttendanceCommand {
    AttendanceCommandBuilder::new().timestamp(timestamp).build()
}

#[tokio::test]
async fn records_two_days_summarizes_and_locks_the_month_on_submit() {
    let store = Arc::new(InMemoryTimesheetStore::new());
    let clock_in = ClockInHandler::new(store.clone());
    let start_break = StartBreakHandler::new(store.clone());
    let end_break = EndBreakHandler::new(store.clone());
    let clock_out = ClockOutHandler::new(store.clone());
    let summarize = SummarizeTimesheetHandler::new(store.clone(), Minutes::from_hours(8).unwrap());
    let review = ReviewTimesheetHandler::new(store.clone());

    // Monday: 09:00-18:00 with a 30 minute lunch and a 15 minute coffee break.
    assert!(clock_in.handle(punch("2024-01-15T09:00:00")).await.success);
    assert!(start_break.handle(punch("2024-01-15T10:30:00")).await.success);
    let coffee = end_break.handle(punch("2024-01-15T10:45:00")).await;
    assert_eq!(coffee.break_duration_minutes, Some(15));
    assert!(start_break.handle(punch("2024-01-15T12:00:00")).await.success);
    let lunch = end_break.handle(punch("2024-01-15T12:30:00")).await;
    assert_eq!(lunch.break_duration_minutes, Some(30));
    let monday = clock_out.handle(punch("2024-01-15T18:00:00")).await;
    assert_eq!(monday.worked_minutes, Some(495));

    // Tuesday: a short day without breaks.
    assert!(clock_in.handle(punch("2024-01-16T09:00:00")).await.success);
    let tuesday = clock_out.handle(punch("2024-01-16T15:00:00")).await;
    assert_eq!(tuesday.worked_minutes, Some(360));

    let summary = summarize.handle("EMP001", january()).await.unwrap();
    assert_eq!(summary.total_worked_minutes, 855);
    assert_eq!(summary.overtime_minutes, 15);
    assert_eq!(summary.entries.len(), 2);
    assert_eq!(summary.entries[0].break_count, 2);

    let status = review
        .handle("EMP001", january(), ReviewAction::Submit)
        .await
        .unwrap();
    assert_eq!(status, TimesheetStatus::Submitted);

    // Submitted months accept no new days.
    let locked = clock_in.handle(punch("2024-01-17T09:00:00")).await;
    assert!(!locked.success);
    assert_eq!(
        locked.message,
        "cannot modify timesheet with status submitted"
    );

    // A rejection reopens the month for corrections.
    review
        .handle("EMP001", january(), ReviewAction::Reject)
        .await
        .unwrap();
    review
        .handle("EMP001", january(), ReviewAction::Reopen)
        .await
        .unwrap();
    assert!(clock_in.handle(punch("2024-01-17T09:00:00")).await.success);

    let summary = summarize.handle("EMP001", january()).await.unwrap();
    assert_eq!(summary.status, TimesheetStatus::Draft);
    assert_eq!(summary.entries.len(), 3);
    assert_eq!(summary.total_worked_minutes, 855);
}

#[tokio::test]
async fn keeps_months_and_employees_apart() {
    let store = Arc::new(InMemoryTimesheetStore::new());
    let clock_in = ClockInHandler::new(store.clone());

    assert!(clock_in.handle(punch("2024-01-31T22:00:00")).await.success);
    assert!(clock_in.handle(punch("2024-02-01T08:00:00")).await.success);
    let other = AttendanceCommandBuilder::new()
        .employee_id("EMP002")
        .timestamp("2024-01-31T09:00:00")
        .build();
    assert!(clock_in.handle(other).await.success);

    assert_eq!(store.len().await, 3);
}
