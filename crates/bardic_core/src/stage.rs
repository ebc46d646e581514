//! Pipeline stages and the per-invocation state machine.

use serde::Serialize;
use tracing::{debug, warn};

/// Stages of one pipeline invocation, in execution order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    /// Checking the prompt and image
    Validating,
    /// Uploading the image to the generation service
    Staging,
    /// Waiting on the generation engine
    Generating,
    /// Waiting on the speech engine
    Synthesizing,
}

impl Stage {
    /// Lowercase stage name.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Where an invocation is.
///
/// `Idle → Validating → (Staging) → Generating → Synthesizing → Done`, with any
/// stage able to end in `Failed`. Transitions only move forward.
///
/// # Examples
///
/// ```
/// use bardic_core::{InvocationState, Stage};
///
/// let mut state = InvocationState::Idle;
/// state.enter(Stage::Validating);
/// state.enter(Stage::Generating);
/// state.fail();
/// assert_eq!(state, InvocationState::Failed(Stage::Generating));
/// assert!(state.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InvocationState {
    Idle,
    Running(Stage),
    Done,
    Failed(Stage),
}

impl InvocationState {
    /// Move to a later stage.
    pub fn enter(&mut self, next: Stage) {
        match *self {
            InvocationState::Idle => {}
            InvocationState::Running(current) if current < next => {}
            other => {
                warn!(from = ?other, to = %next, "Ignoring backward or post-terminal transition");
                return;
            }
        }
        debug!(stage = %next, "Entering stage");
        *self = InvocationState::Running(next);
    }

    /// Mark the current stage as failed.
    pub fn fail(&mut self) {
        if let InvocationState::Running(stage) = *self {
            *self = InvocationState::Failed(stage);
        } else {
            warn!(state = ?self, "fail() called outside a running stage");
        }
    }

    /// Mark the invocation complete.
    pub fn finish(&mut self) {
        if let InvocationState::Running(_) = *self {
            *self = InvocationState::Done;
        } else {
            warn!(state = ?self, "finish() called outside a running stage");
        }
    }

    /// The stage a failed invocation stopped in.
    pub fn failed_stage(&self) -> Option<Stage> {
        match self {
            InvocationState::Failed(stage) => Some(*stage),
            _ => None,
        }
    }

    /// Whether the invocation has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, InvocationState::Done | InvocationState::Failed(_))
    }
}
