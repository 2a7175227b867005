// ABOUTME: Live stream command for form-coach
// ABOUTME: Feeds stdin frames to the session runtime and prints each snapshot whose progress changed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use form_coach::catalog::ExerciseCatalog;
use form_coach::config::CoachConfig;
use form_coach::replay::parse_frame;
use form_coach::session::{FrameSubmission, RuntimeConfig, SessionHandle};
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::helpers::display::{print_json_line, print_json_pretty};

/// Stream stdin frames through a live session until EOF
pub async fn run(
    catalog: Arc<ExerciseCatalog>,
    config: &CoachConfig,
    exercise: &str,
) -> Result<()> {
    let handle = SessionHandle::spawn(catalog, exercise, RuntimeConfig::from(config))?;
    let mut updates = handle.subscribe();
    let initial = updates.borrow_and_update().clone();
    print_json_line(&initial)?;

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut line_number = 0_usize;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                line_number += 1;
                if line.trim().is_empty() {
                    continue;
                }
                match parse_frame(&line, line_number) {
                    Ok(frame) => {
                        if handle.submit_frame(frame) == FrameSubmission::Closed {
                            warn!("Session stopped while frames were still arriving");
                            break;
                        }
                    }
                    Err(e) => warn!(error = %e, "Skipping malformed frame"),
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                print_json_line(&snapshot)?;
            }
        }
    }

    let final_snapshot = handle.shutdown().await?;
    info!(
        frames = final_snapshot.frames_evaluated,
        dropped = final_snapshot.frames_dropped,
        "Stream ended"
    );
    print_json_pretty(&final_snapshot)
}
