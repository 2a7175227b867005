// ABOUTME: Deterministic replay of recorded pose frames through an exercise session
// ABOUTME: Parses JSON-lines frame files and derives hold timer ticks from frame timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Frame replay
//!
//! A recording is one [`PoseFrame`] per line. Replay feeds the frames through
//! an [`ExerciseSession`] in order and issues one tick per whole tick period
//! elapsed since the first timestamped frame, before evaluating the frame
//! that crosses it. Frames without a timestamp are evaluated but never tick.
//! Ticks only advance a timer that is holding, so the rest of a gap is
//! counted without being issued one by one.

use crate::session::{ExerciseSession, SessionSnapshot};
use form_core::errors::{AppError, AppResult};
use form_core::models::PoseFrame;
use form_intelligence::{HoldPhase, TickTransition};
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::time::Duration;
use tracing::debug;

/// Parse one JSON line into a frame; `line_number` is 1-based
///
/// # Errors
///
/// Returns an invalid-input error naming the line when the JSON is malformed
pub fn parse_frame(line: &str, line_number: usize) -> AppResult<PoseFrame> {
    serde_json::from_str(line).map_err(|e| {
        AppError::invalid_input(format!("Invalid frame on line {line_number}: {e}"))
            .with_details(serde_json::json!({ "line": line_number }))
    })
}

/// Parse a JSON-lines recording, skipping blank lines
///
/// # Errors
///
/// Returns an error on the first unreadable or malformed line
pub fn parse_frames<R: BufRead>(reader: R) -> AppResult<Vec<PoseFrame>> {
    let mut frames = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            AppError::internal(format!("Failed to read frame recording: {e}")).with_source(e)
        })?;
        if line.trim().is_empty() {
            continue;
        }
        frames.push(parse_frame(&line, index + 1)?);
    }
    Ok(frames)
}

/// Totals of a finished replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplaySummary {
    /// Frames evaluated
    pub frames: u64,
    /// Ticks issued
    pub ticks: u64,
    /// Frames with invalid form
    pub wrong_form_frames: u64,
    /// Final session state
    pub snapshot: SessionSnapshot,
}

/// Replays frames through a session with timestamp-derived ticks
#[derive(Debug)]
pub struct Replay {
    session: ExerciseSession,
    tick_ms: u64,
    origin_ms: Option<u64>,
    frames: u64,
    ticks: u64,
    wrong_form_frames: u64,
}

impl Replay {
    /// Replay into `session`, ticking once per `tick_interval` of recording time
    #[must_use]
    pub fn new(session: ExerciseSession, tick_interval: Duration) -> Self {
        Self {
            session,
            tick_ms: u64::try_from(tick_interval.as_millis())
                .unwrap_or(u64::MAX)
                .max(1),
            origin_ms: None,
            frames: 0,
            ticks: 0,
            wrong_form_frames: 0,
        }
    }

    /// Issue any ticks the frame's timestamp makes due, then evaluate it
    pub fn feed(&mut self, frame: &PoseFrame) -> SessionSnapshot {
        if let Some(timestamp) = frame.timestamp_ms {
            let origin = *self.origin_ms.get_or_insert(timestamp);
            let due = timestamp.saturating_sub(origin) / self.tick_ms;
            while self.ticks < due {
                if self.session.state().hold_phase != HoldPhase::Holding {
                    self.ticks = due;
                    break;
                }
                let transition = self.session.tick(self.session.generation());
                if let Some(TickTransition::Completed { elapsed }) = transition {
                    debug!(timestamp, elapsed, "Hold completed during replay");
                }
                self.ticks += 1;
            }
        }

        let evaluation = self.session.process_frame(frame);
        if !evaluation.form.valid {
            self.wrong_form_frames += 1;
        }
        self.frames += 1;
        self.session.snapshot()
    }

    /// Session being replayed into
    #[must_use]
    pub const fn session(&self) -> &ExerciseSession {
        &self.session
    }

    /// Finish and summarize
    #[must_use]
    pub fn finish(self) -> ReplaySummary {
        ReplaySummary {
            frames: self.frames,
            ticks: self.ticks,
            wrong_form_frames: self.wrong_form_frames,
            snapshot: self.session.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frames_skips_blank_lines() {
        let input = "{\"timestamp_ms\":0,\"landmarks\":[]}\n\n{\"landmarks\":[null]}\n";
        let frames = parse_frames(input.as_bytes()).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].timestamp_ms, Some(0));
        assert_eq!(frames[1].timestamp_ms, None);
    }

    #[test]
    fn test_parse_frames_reports_line_number() {
        let input = "{\"landmarks\":[]}\nnot json\n";
        let err = parse_frames(input.as_bytes()).unwrap_err();
        assert!(err.message.contains("line 2"), "{}", err.message);
    }
}
