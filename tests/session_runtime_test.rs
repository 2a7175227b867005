// ABOUTME: Integration tests for the live session task under paused tokio time
// ABOUTME: Covers frame backpressure, wall-clock hold ticks, re-arming on selection, and snapshot publishing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{
    builtin_catalog, catalog_with_short_plank, good_plank, init_test_logging, pushup_frame,
    sagging_plank,
};
use form_coach::session::{FrameSubmission, RuntimeConfig, SessionHandle};
use form_core::errors::ErrorCode;
use form_intelligence::{Direction, HoldPhase};
use std::time::Duration;
use tokio::time::sleep;

fn spawn_pushup() -> SessionHandle {
    init_test_logging();
    SessionHandle::spawn(builtin_catalog(), "pushup", RuntimeConfig::default()).unwrap()
}

fn spawn_short_plank() -> SessionHandle {
    init_test_logging();
    SessionHandle::spawn(
        catalog_with_short_plank(),
        "shortPlank",
        RuntimeConfig::default(),
    )
    .unwrap()
}

// ============================================================================
// Frames
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_frames_are_evaluated_in_order() {
    let handle = spawn_pushup();

    for elbow in [170.0, 75.0, 120.0, 170.0] {
        assert_eq!(
            handle.submit_frame(pushup_frame(elbow, 175.0)),
            FrameSubmission::Accepted
        );
        // Wait for the evaluation so the next frame finds the queue empty
        handle.snapshot().await.unwrap();
    }

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.evaluation.rep_count, 1);
    assert_eq!(snapshot.frames_evaluated, 4);
    assert_eq!(snapshot.frames_dropped, 0);
    assert_eq!(snapshot.session_id, handle.session_id());
}

#[tokio::test(start_paused = true)]
async fn test_frames_beyond_queue_depth_are_dropped() {
    let handle = spawn_pushup();

    // The session task has not run yet, so only the first frame fits
    let outcomes: Vec<_> = (0..5)
        .map(|_| handle.submit_frame(pushup_frame(170.0, 175.0)))
        .collect();

    assert_eq!(outcomes[0], FrameSubmission::Accepted);
    assert!(outcomes[1..]
        .iter()
        .all(|outcome| *outcome == FrameSubmission::Dropped));
    assert_eq!(handle.frames_dropped(), 4);

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.frames_evaluated, 1);
    assert_eq!(snapshot.frames_dropped, 4);
}

#[tokio::test(start_paused = true)]
async fn test_deeper_queue_accepts_bursts() {
    init_test_logging();
    let config = RuntimeConfig {
        frame_queue_depth: 3,
        ..RuntimeConfig::default()
    };
    let handle = SessionHandle::spawn(builtin_catalog(), "pushup", config).unwrap();

    let accepted = (0..4)
        .map(|_| handle.submit_frame(pushup_frame(170.0, 175.0)))
        .filter(|outcome| *outcome == FrameSubmission::Accepted)
        .count();
    assert_eq!(accepted, 3);
    assert_eq!(handle.snapshot().await.unwrap().frames_evaluated, 3);
}

// ============================================================================
// Hold ticks
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_hold_completes_on_wall_clock_ticks() {
    let handle = spawn_short_plank();
    handle.submit_frame(good_plank());
    handle.snapshot().await.unwrap();

    sleep(Duration::from_millis(3500)).await;

    let snapshot = handle.snapshot().await.unwrap();
    assert!(snapshot.evaluation.is_complete);
    assert_eq!(snapshot.evaluation.elapsed_hold_seconds, 3);
    assert_eq!(snapshot.evaluation.feedback_message, "Plank complete");

    // Completion is terminal
    sleep(Duration::from_secs(5)).await;
    assert_eq!(
        handle.snapshot().await.unwrap().evaluation.elapsed_hold_seconds,
        3
    );
}

#[tokio::test(start_paused = true)]
async fn test_broken_form_pauses_the_clock() {
    let handle = spawn_short_plank();
    handle.submit_frame(good_plank());
    handle.snapshot().await.unwrap();

    sleep(Duration::from_millis(1500)).await;
    handle.submit_frame(sagging_plank());
    let paused = handle.snapshot().await.unwrap();
    assert_eq!(paused.evaluation.hold_phase, HoldPhase::Paused);
    assert_eq!(paused.evaluation.elapsed_hold_seconds, 1);

    sleep(Duration::from_secs(3)).await;
    assert_eq!(
        handle.snapshot().await.unwrap().evaluation.elapsed_hold_seconds,
        1
    );
}

#[tokio::test(start_paused = true)]
async fn test_selection_rearms_the_timer() {
    let handle = spawn_short_plank();
    handle.submit_frame(good_plank());
    handle.snapshot().await.unwrap();

    // First tick at 1000 ms
    sleep(Duration::from_millis(1500)).await;
    assert_eq!(
        handle.snapshot().await.unwrap().evaluation.elapsed_hold_seconds,
        1
    );

    let selected = handle.select_exercise("shortPlank").await.unwrap();
    assert_eq!(selected.generation, 1);
    assert_eq!(selected.evaluation.elapsed_hold_seconds, 0);
    assert_eq!(selected.evaluation.hold_phase, HoldPhase::Idle);

    handle.submit_frame(good_plank());
    handle.snapshot().await.unwrap();

    // The old schedule would tick at 2000 ms; the re-armed one ticks at 2500 ms
    sleep(Duration::from_millis(900)).await;
    assert_eq!(
        handle.snapshot().await.unwrap().evaluation.elapsed_hold_seconds,
        0
    );
    sleep(Duration::from_millis(200)).await;
    assert_eq!(
        handle.snapshot().await.unwrap().evaluation.elapsed_hold_seconds,
        1
    );
}

// ============================================================================
// Commands
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_switching_exercise_resets_state() {
    let handle = spawn_pushup();
    for elbow in [170.0, 70.0, 170.0] {
        handle.submit_frame(pushup_frame(elbow, 175.0));
        handle.snapshot().await.unwrap();
    }
    assert_eq!(handle.snapshot().await.unwrap().evaluation.rep_count, 1);

    let snapshot = handle.select_exercise("squat").await.unwrap();
    assert_eq!(snapshot.exercise_key, "squat");
    assert_eq!(snapshot.evaluation.exercise_name, "Squats");
    assert_eq!(snapshot.evaluation.rep_count, 0);
    assert_eq!(snapshot.evaluation.direction, Direction::Extending);
    assert_eq!(snapshot.evaluation.feedback_message, "Stand straight");
    assert_eq!(snapshot.frames_evaluated, 0);
}

#[tokio::test(start_paused = true)]
async fn test_unknown_exercise_rejected() {
    let handle = spawn_pushup();
    let err = handle.select_exercise("burpee").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.exercise_key, "pushup");
    assert_eq!(snapshot.generation, 0);
}

#[tokio::test(start_paused = true)]
async fn test_spawn_with_unknown_exercise_fails() {
    init_test_logging();
    let err = SessionHandle::spawn(builtin_catalog(), "burpee", RuntimeConfig::default())
        .err()
        .expect("unknown exercise must not start a session");
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test(start_paused = true)]
async fn test_restart_zeroes_progress() {
    let handle = spawn_pushup();
    for elbow in [170.0, 70.0, 170.0] {
        handle.submit_frame(pushup_frame(elbow, 175.0));
        handle.snapshot().await.unwrap();
    }

    let snapshot = handle.restart().await.unwrap();
    assert_eq!(snapshot.generation, 1);
    assert_eq!(snapshot.exercise_key, "pushup");
    assert_eq!(snapshot.evaluation.rep_count, 0);
    assert_eq!(snapshot.evaluation.feedback_message, "Get in plank position");
}

// ============================================================================
// Publishing and shutdown
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_progress_changes_only() {
    let handle = spawn_pushup();
    let mut updates = handle.subscribe();
    updates.borrow_and_update();

    handle.submit_frame(pushup_frame(70.0, 175.0));
    handle.snapshot().await.unwrap();
    assert!(updates.has_changed().unwrap());
    {
        let latest = updates.borrow_and_update();
        assert_eq!(latest.evaluation.direction, Direction::Flexing);
        assert_eq!(latest.evaluation.feedback_message, "Push back up");
    }

    // Same position again: only the streak and angle readings move
    handle.submit_frame(pushup_frame(72.0, 175.0));
    handle.snapshot().await.unwrap();
    assert!(!updates.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_returns_final_snapshot() {
    let handle = spawn_pushup();
    let mut updates = handle.subscribe();
    handle.submit_frame(pushup_frame(70.0, 175.0));

    let last = handle.shutdown().await.unwrap();
    assert_eq!(last.frames_evaluated, 1);
    assert_eq!(last.evaluation.direction, Direction::Flexing);

    // Drain the final update, then the closed channel reports an error
    while updates.changed().await.is_ok() {}
    assert_eq!(updates.borrow().frames_evaluated, 1);
}
