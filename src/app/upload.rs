//! Simulated upload lifecycle
//!
//! A locally generated, non-network progress sequence standing in for a real
//! transfer. Each admitted file gets its own tokio task which advances a
//! cumulative value by a random amount in `(0, max_step_percent]` per tick
//! and reports the floored integer. On reaching or exceeding 100 the task
//! reports exactly 100 once, sleeps for a settle delay so observers can
//! render a full bar, then emits a single completion event and exits.
//!
//! Simulations are independent: no shared state, no ordering guarantees
//! between two files' events. If the observer goes away the next send fails
//! and the task winds down silently, so abandoned simulations never leak.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

use crate::constants::upload::{
    COMPLETE_PERCENT, MAX_STEP_PERCENT, SETTLE_DELAY, TICK_INTERVAL,
};

/// Timing and step configuration for simulated uploads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Interval between progress ticks
    pub tick_interval: Duration,
    /// Upper bound of the random per-tick advance, in percent
    pub max_step_percent: f64,
    /// Pause between reporting 100% and signalling completion
    pub settle_delay: Duration,
}

impl UploadConfig {
    /// Create a configuration with the shipped defaults
    pub fn new() -> Self {
        Self {
            tick_interval: TICK_INTERVAL,
            max_step_percent: MAX_STEP_PERCENT,
            settle_delay: SETTLE_DELAY,
        }
    }

    /// Millisecond-scale timings for tests
    pub fn for_testing() -> Self {
        Self {
            tick_interval: Duration::from_millis(1),
            max_step_percent: MAX_STEP_PERCENT,
            settle_delay: Duration::from_millis(1),
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.max_step_percent <= 0.0 {
            return Err("max_step_percent must be greater than 0".to_string());
        }
        if self.tick_interval.is_zero() {
            return Err("tick_interval must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Event emitted by a running simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEvent {
    /// A progress tick; values are non-decreasing and end at exactly 100
    Progress { name: String, percent: u8 },
    /// The single completion signal, after the settle delay
    Completed { name: String },
}

impl UploadEvent {
    /// The file this event belongs to
    pub fn name(&self) -> &str {
        match self {
            UploadEvent::Progress { name, .. } => name,
            UploadEvent::Completed { name } => name,
        }
    }
}

/// Start a simulation task for one file
///
/// Events are delivered through `events`; the task exits silently once the
/// receiver is dropped. The returned handle can be awaited but does not need
/// to be — the task tears itself down after completion.
pub fn spawn(
    name: String,
    config: UploadConfig,
    events: mpsc::UnboundedSender<UploadEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut progress = 0.0_f64;

        loop {
            sleep(config.tick_interval).await;
            progress += random_step(config.max_step_percent);

            if progress >= f64::from(COMPLETE_PERCENT) {
                let full = UploadEvent::Progress {
                    name: name.clone(),
                    percent: COMPLETE_PERCENT,
                };
                if events.send(full).is_err() {
                    debug!("observer gone, abandoning simulation for {name}");
                    return;
                }

                sleep(config.settle_delay).await;
                if events.send(UploadEvent::Completed { name: name.clone() }).is_err() {
                    debug!("observer gone before completion of {name}");
                }
                debug!("upload simulation finished for {name}");
                return;
            }

            let tick = UploadEvent::Progress {
                name: name.clone(),
                percent: progress.floor() as u8,
            };
            if events.send(tick).is_err() {
                debug!("observer gone, abandoning simulation for {name}");
                return;
            }
        }
    })
}

/// Random advance in `(0, max]` percent
fn random_step(max: f64) -> f64 {
    // rand::random::<f64>() is uniform over [0, 1); flipping it keeps the
    // step strictly positive.
    max * (1.0 - rand::random::<f64>())
}
