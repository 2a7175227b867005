// ABOUTME: Session runtime task serializing frame evaluations, timer ticks, and control commands
// ABOUTME: Frames are submitted with try_send and dropped when the queue is full; snapshots go out on a watch channel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Live session runtime
//!
//! One task owns the [`ExerciseSession`] and is the only code that touches
//! it, so frames, ticks, and commands never overlap. The task waits on three
//! sources:
//!
//! - a bounded command channel (select, restart, snapshot, shutdown)
//! - a bounded frame channel; [`SessionHandle::submit_frame`] never waits and
//!   drops the frame when the queue is full
//! - an interval that ticks the hold timer, re-armed on every selection and
//!   restart so the first tick of a new generation is a full period away
//!
//! Frames already queued when a command arrives are evaluated before the
//! command, so a command observes every frame accepted before it was sent.

use super::{ExerciseSession, SessionSnapshot};
use crate::catalog::ExerciseCatalog;
use crate::config::CoachConfig;
use form_core::constants::timing::{
    COMMAND_CHANNEL_CAPACITY, DEFAULT_FRAME_QUEUE_DEPTH, DEFAULT_TICK_INTERVAL_MS,
};
use form_core::errors::{AppError, AppResult};
use form_core::models::PoseFrame;
use form_intelligence::{HoldTimerPolicy, TickTransition};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

/// Session runtime settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Hold timer tick period
    pub tick_interval: Duration,
    /// Frames allowed to wait while one is being evaluated
    pub frame_queue_depth: usize,
    /// Elapsed-time behavior when a hold is interrupted
    pub hold_timer_policy: HoldTimerPolicy,
    /// Log every published snapshot at debug level
    pub snapshot_log: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            frame_queue_depth: DEFAULT_FRAME_QUEUE_DEPTH,
            hold_timer_policy: HoldTimerPolicy::default(),
            snapshot_log: false,
        }
    }
}

impl From<&CoachConfig> for RuntimeConfig {
    fn from(config: &CoachConfig) -> Self {
        Self {
            tick_interval: config.tick_interval,
            frame_queue_depth: config.frame_queue_depth,
            hold_timer_policy: config.hold_timer_policy,
            snapshot_log: config.snapshot_log,
        }
    }
}

/// Outcome of submitting a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSubmission {
    /// Queued for evaluation
    Accepted,
    /// Queue full; the frame was discarded
    Dropped,
    /// Session task has stopped
    Closed,
}

enum SessionCommand {
    Select {
        exercise_key: String,
        reply: oneshot::Sender<AppResult<SessionSnapshot>>,
    },
    Restart {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    Snapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    Shutdown {
        reply: oneshot::Sender<SessionSnapshot>,
    },
}

/// Handle to a running session task.
///
/// Dropping the handle closes both channels and ends the task.
pub struct SessionHandle {
    session_id: Uuid,
    commands: mpsc::Sender<SessionCommand>,
    frames: mpsc::Sender<PoseFrame>,
    snapshots: watch::Receiver<SessionSnapshot>,
    dropped: Arc<AtomicU64>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    /// Start a session task on `exercise_key`.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the key is not in the catalog
    pub fn spawn(
        catalog: Arc<ExerciseCatalog>,
        exercise_key: &str,
        config: RuntimeConfig,
    ) -> AppResult<Self> {
        let session = ExerciseSession::new(catalog, exercise_key, config.hold_timer_policy)?;
        let session_id = session.id();

        let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
        let (frame_tx, frame_rx) = mpsc::channel(config.frame_queue_depth.max(1));
        let (snapshot_tx, snapshot_rx) = watch::channel(session.snapshot());
        let dropped = Arc::new(AtomicU64::new(0));

        let worker = SessionWorker {
            session,
            commands: command_rx,
            frames: frame_rx,
            snapshots: snapshot_tx,
            dropped: Arc::clone(&dropped),
            snapshot_log: config.snapshot_log,
        };
        let span = info_span!("session", id = %session_id);
        let task = tokio::spawn(worker.run(config.tick_interval).instrument(span));

        Ok(Self {
            session_id,
            commands: command_tx,
            frames: frame_tx,
            snapshots: snapshot_rx,
            dropped,
            task,
        })
    }

    /// Session identifier
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Queue a frame for evaluation without waiting
    pub fn submit_frame(&self, frame: PoseFrame) -> FrameSubmission {
        match self.frames.try_send(frame) {
            Ok(()) => FrameSubmission::Accepted,
            Err(TrySendError::Full(_)) => {
                let total = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                if total == 1 || total % 100 == 0 {
                    warn!(dropped = total, "Evaluation busy, dropping frames");
                } else {
                    debug!(dropped = total, "Frame dropped");
                }
                FrameSubmission::Dropped
            }
            Err(TrySendError::Closed(_)) => FrameSubmission::Closed,
        }
    }

    /// Frames dropped so far
    #[must_use]
    pub fn frames_dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Switch exercise, resetting all state and re-arming the timer
    ///
    /// # Errors
    ///
    /// Returns a not-found error for unknown keys, or an unavailable error if
    /// the task has stopped
    pub async fn select_exercise(&self, exercise_key: &str) -> AppResult<SessionSnapshot> {
        self.request(|reply| SessionCommand::Select {
            exercise_key: exercise_key.to_owned(),
            reply,
        })
        .await?
    }

    /// Restart the current exercise from zero
    ///
    /// # Errors
    ///
    /// Returns an unavailable error if the task has stopped
    pub async fn restart(&self) -> AppResult<SessionSnapshot> {
        self.request(|reply| SessionCommand::Restart { reply }).await
    }

    /// Current snapshot, after every frame accepted so far has been evaluated
    ///
    /// # Errors
    ///
    /// Returns an unavailable error if the task has stopped
    pub async fn snapshot(&self) -> AppResult<SessionSnapshot> {
        self.request(|reply| SessionCommand::Snapshot { reply }).await
    }

    /// Receiver notified whenever visible progress changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// Stop the task and return the final snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the task already stopped or panicked
    pub async fn shutdown(self) -> AppResult<SessionSnapshot> {
        let snapshot = self
            .request(|reply| SessionCommand::Shutdown { reply })
            .await?;
        self.task
            .await
            .map_err(|e| AppError::internal(format!("Session task failed: {e}")))?;
        Ok(snapshot)
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> SessionCommand,
    ) -> AppResult<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(build(reply_tx))
            .await
            .map_err(|_| AppError::unavailable("Session task has stopped"))?;
        reply_rx
            .await
            .map_err(|_| AppError::unavailable("Session task has stopped"))
    }
}

struct SessionWorker {
    session: ExerciseSession,
    commands: mpsc::Receiver<SessionCommand>,
    frames: mpsc::Receiver<PoseFrame>,
    snapshots: watch::Sender<SessionSnapshot>,
    dropped: Arc<AtomicU64>,
    snapshot_log: bool,
}

impl SessionWorker {
    async fn run(mut self, period: Duration) {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut armed_generation = self.session.generation();

        info!(exercise = %self.session.exercise_key(), "Session task started");

        loop {
            tokio::select! {
                command = self.commands.recv() => {
                    let Some(command) = command else { break };
                    self.drain_frames();
                    if !self.handle_command(command, &mut ticker, &mut armed_generation) {
                        break;
                    }
                }
                frame = self.frames.recv() => {
                    let Some(frame) = frame else { break };
                    self.evaluate(&frame);
                }
                _ = ticker.tick() => {
                    self.on_tick(armed_generation);
                }
            }
        }

        info!(
            exercise = %self.session.exercise_key(),
            frames_dropped = self.dropped.load(Ordering::Relaxed),
            "Session task stopped"
        );
    }

    /// Returns `false` when the task should stop
    fn handle_command(
        &mut self,
        command: SessionCommand,
        ticker: &mut Interval,
        armed_generation: &mut u64,
    ) -> bool {
        match command {
            SessionCommand::Select {
                exercise_key,
                reply,
            } => {
                let result = match self.session.select(&exercise_key) {
                    Ok(generation) => {
                        ticker.reset();
                        *armed_generation = generation;
                        self.publish();
                        Ok(self.snapshot())
                    }
                    Err(e) => {
                        warn!(exercise = %exercise_key, error = %e, "Exercise selection rejected");
                        Err(e)
                    }
                };
                send_reply(reply, result);
                true
            }
            SessionCommand::Restart { reply } => {
                *armed_generation = self.session.restart();
                ticker.reset();
                self.publish();
                send_reply(reply, self.snapshot());
                true
            }
            SessionCommand::Snapshot { reply } => {
                send_reply(reply, self.snapshot());
                true
            }
            SessionCommand::Shutdown { reply } => {
                send_reply(reply, self.snapshot());
                false
            }
        }
    }

    fn drain_frames(&mut self) {
        while let Ok(frame) = self.frames.try_recv() {
            self.evaluate(&frame);
        }
    }

    fn evaluate(&mut self, frame: &PoseFrame) {
        self.session.process_frame(frame);
        self.publish();
    }

    fn on_tick(&mut self, generation: u64) {
        match self.session.tick(generation) {
            Some(TickTransition::Idle) | None => {}
            Some(_) => self.publish(),
        }
    }

    fn snapshot(&mut self) -> SessionSnapshot {
        self.session
            .record_dropped_frames(self.dropped.load(Ordering::Relaxed));
        self.session.snapshot()
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        if self.snapshot_log {
            debug!(?snapshot, "Session snapshot");
        }
        self.snapshots.send_if_modified(|current| {
            let changed = snapshot.progress_differs(current);
            *current = snapshot;
            changed
        });
    }
}

fn send_reply<T>(reply: oneshot::Sender<T>, value: T) {
    if reply.send(value).is_err() {
        debug!("Session requester went away before the reply");
    }
}
