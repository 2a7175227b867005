// ABOUTME: Replay command for form-coach
// ABOUTME: Evaluates a recorded frame file deterministically and prints snapshots and a summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use form_coach::catalog::ExerciseCatalog;
use form_coach::config::CoachConfig;
use form_coach::replay::{parse_frames, Replay};
use form_coach::session::ExerciseSession;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::helpers::display::{print_json_line, print_json_pretty};

/// Replay `frames_path` against `exercise`
pub fn run(
    catalog: Arc<ExerciseCatalog>,
    config: &CoachConfig,
    exercise: &str,
    frames_path: &Path,
    verbose_frames: bool,
) -> Result<()> {
    let file = File::open(frames_path)
        .with_context(|| format!("Failed to open {}", frames_path.display()))?;
    let frames = parse_frames(BufReader::new(file))?;
    info!(
        path = %frames_path.display(),
        frames = frames.len(),
        exercise,
        "Replaying recording"
    );

    let session = ExerciseSession::new(catalog, exercise, config.hold_timer_policy)?;
    let mut replay = Replay::new(session, config.tick_interval);
    for frame in &frames {
        let snapshot = replay.feed(frame);
        if verbose_frames {
            print_json_line(&snapshot)?;
        }
    }

    let summary = replay.finish();
    info!(
        frames = summary.frames,
        ticks = summary.ticks,
        reps = summary.snapshot.evaluation.rep_count,
        held = summary.snapshot.evaluation.elapsed_hold_seconds,
        "Replay finished"
    );
    print_json_pretty(&summary)
}
