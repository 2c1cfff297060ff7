//! Delayed host restart
//!
//! The deadline is polled from the UI loop. Closing the window before the
//! deadline leaves nothing pending.

use std::process::Command;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, warn};

/// Lifecycle of a one-shot deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskState {
    Idle,
    Pending { deadline: Instant },
    Fired,
    Cancelled,
}

/// One-shot cancellable deadline driven by explicit `poll` calls
#[derive(Debug, Clone)]
pub struct ScheduledTask {
    state: TaskState,
}

impl ScheduledTask {
    pub fn new() -> Self {
        Self {
            state: TaskState::Idle,
        }
    }

    /// Arm the task to fire `delay` after `now`. Re-arming a fired or
    /// cancelled task is ignored.
    pub fn schedule(&mut self, delay: Duration, now: Instant) {
        match self.state {
            TaskState::Idle | TaskState::Pending { .. } => {
                self.state = TaskState::Pending {
                    deadline: now + delay,
                };
            }
            TaskState::Fired | TaskState::Cancelled => {}
        }
    }

    /// Prevent a pending task from firing. Returns true if it was pending.
    pub fn cancel(&mut self) -> bool {
        if self.is_pending() {
            self.state = TaskState::Cancelled;
            true
        } else {
            false
        }
    }

    /// True exactly once: on the first poll at or after the deadline
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            TaskState::Pending { deadline } if now >= deadline => {
                self.state = TaskState::Fired;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, TaskState::Pending { .. })
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        self.state == TaskState::Fired
    }

    /// Time left until the deadline, `None` unless pending
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            TaskState::Pending { deadline } => Some(deadline.saturating_duration_since(now)),
            _ => None,
        }
    }
}

impl Default for ScheduledTask {
    fn default() -> Self {
        Self::new()
    }
}

/// Seam between the viewer and the host's power management
pub trait PowerControl {
    /// Ask the host to restart after `grace`
    fn request_restart(&self, grace: Duration) -> Result<()>;
}

/// Invokes the platform `shutdown` utility
pub struct SystemShutdown;

impl SystemShutdown {
    /// Program and arguments for a restart after `grace`
    pub fn command_line(grace: Duration) -> (&'static str, Vec<String>) {
        if cfg!(windows) {
            (
                "shutdown",
                vec!["/r".to_string(), "/t".to_string(), grace.as_secs().to_string()],
            )
        } else {
            // POSIX shutdown counts in whole minutes
            let minutes = grace.as_secs().div_ceil(60).max(1);
            (
                "shutdown",
                vec!["-r".to_string(), format!("+{minutes}")],
            )
        }
    }
}

impl PowerControl for SystemShutdown {
    fn request_restart(&self, grace: Duration) -> Result<()> {
        let (program, args) = Self::command_line(grace);
        info!(program, ?args, "Requesting host restart");

        // Not waited on: the utility returns at once and the host restart
        // ends the viewer before the child matters
        let child = Command::new(program)
            .args(&args)
            .spawn()
            .with_context(|| format!("Failed to spawn {program}"))?;

        info!(pid = child.id(), "Shutdown command started");
        Ok(())
    }
}

/// Fire the restart request if the task is due, logging failures
///
/// Returns true when the request was issued on this call.
pub fn poll_and_fire(
    task: &mut ScheduledTask,
    power: &dyn PowerControl,
    grace: Duration,
    now: Instant,
) -> bool {
    if !task.poll(now) {
        return false;
    }

    if let Err(err) = power.request_restart(grace) {
        warn!(error = ?err, "Shutdown request failed");
    }
    true
}
