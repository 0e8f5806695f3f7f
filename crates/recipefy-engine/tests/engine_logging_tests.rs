#![allow(clippy::unwrap_used, clippy::expect_used)]

use recipefy_core::logging_facility::init_test_capture;
use recipefy_core::{Ingredient, Snapshot};
use recipefy_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_BRANCH, FIELD_CACHE_HITS, FIELD_COMMIT_ID,
    FIELD_ERR_CODE,
    FIELD_DURATION_MS, FIELD_HISTORY_LEN,
};
use recipefy_core_types::AuthorId;
use recipefy_engine::{
    branch_history, commit_changes, ChangeCache, HistorySettings, MemoryVersionControl,
    VersionControl,
};

fn two_commit_history(branch: &str) -> MemoryVersionControl {
    let mut vcs = MemoryVersionControl::new();
    let snapshot = |amount| Snapshot::new(2, vec![Ingredient::new("oats", "cups", amount)], Vec::new());
    vcs.init_recipe(branch, snapshot(1.0), "Initial", AuthorId::from("u1"))
        .unwrap();
    vcs.commit(branch, snapshot(2.0), "More oats", AuthorId::from("u1"))
        .unwrap();
    vcs
}

#[test]
fn test_branch_history_logs_start_and_end() {
    let capture = init_test_capture();
    let branch = "logging-branch-unique-1";
    let vcs = two_commit_history(branch);
    let cache = ChangeCache::new();

    branch_history(&vcs, branch, &HistorySettings::default(), Some(&cache)).unwrap();
    branch_history(&vcs, branch, &HistorySettings::default(), Some(&cache)).unwrap();

    let events: Vec<_> = capture
        .events_for_op("branch_history")
        .into_iter()
        .filter(|e| e.field(FIELD_BRANCH) == Some(branch))
        .collect();

    let starts = events.iter().filter(|e| e.event.as_deref() == Some(EVENT_START)).count();
    let ends: Vec<_> = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert_eq!(starts, 2);
    assert_eq!(ends.len(), 2);
    assert!(ends.iter().all(|e| e.field(FIELD_DURATION_MS).is_some()));
    assert_eq!(ends[0].field(FIELD_HISTORY_LEN), Some("2"));
    assert_eq!(ends[0].field(FIELD_CACHE_HITS), Some("0"));
    assert_eq!(ends[1].field(FIELD_CACHE_HITS), Some("2"));
}

#[test]
fn test_branch_history_logs_error() {
    let capture = init_test_capture();
    let branch = "logging-branch-missing-unique-2";
    let vcs = MemoryVersionControl::new();

    branch_history(&vcs, branch, &HistorySettings::default(), None).unwrap_err();

    let errors: Vec<_> = capture
        .events_for_op("branch_history")
        .into_iter()
        .filter(|e| e.field(FIELD_BRANCH) == Some(branch) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
}

#[test]
fn test_commit_changes_logs_commit_id() {
    let capture = init_test_capture();
    let vcs = two_commit_history("main");
    let head = vcs.branch_head("main").unwrap();

    commit_changes(&vcs, &head, None).unwrap();

    let events: Vec<_> = capture
        .events_for_op("commit_changes")
        .into_iter()
        .filter(|e| e.field(FIELD_COMMIT_ID) == Some(head.as_str()))
        .collect();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[1].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[1].field("first_commit"), Some("false"));
}
