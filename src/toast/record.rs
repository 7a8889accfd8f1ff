//! Toast record types.
//!
//! A `Toast` is the display-side snapshot of one notification. The manager
//! owns the timers; records only carry what a renderer needs plus the timing
//! state required to pause and resume the countdown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// Shortest lifetime a toast can be given. Requests below this are clamped.
pub const MIN_DURATION: Duration = Duration::from_millis(1);

/// Opaque toast identifier, unique among the live toasts of one manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub(crate) u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Severity of a toast. Determines its default lifetime and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    /// All severities, in declaration order.
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Info,
        Severity::Warning,
    ];

    /// Built-in lifetime used when neither the caller nor the config gives one.
    ///
    /// Success and info toasts are short; errors and warnings stay a bit
    /// longer so they can be read.
    pub fn default_duration(&self) -> Duration {
        match self {
            Severity::Success | Severity::Info => Duration::from_millis(3000),
            Severity::Error | Severity::Warning => Duration::from_millis(4000),
        }
    }

    /// Lowercase name, as used in style classes and config keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Countdown state of a live toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    /// An expiry timer is pending.
    Running,
    /// Countdown suspended; `remaining` is what the next resume will wait.
    Paused { remaining: Duration },
}

/// A live toast notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub(crate) id: ToastId,
    pub(crate) message: String,
    pub(crate) severity: Severity,
    pub(crate) duration: Duration,
    pub(crate) style_hint: Option<String>,
    /// When the countdown most recently (re)started.
    pub(crate) started_at: Instant,
    pub(crate) state: ToastState,
}

impl Toast {
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Requested visible lifetime.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Optional style tag (e.g. a CSS class) supplied at creation.
    pub fn style_hint(&self) -> Option<&str> {
        self.style_hint.as_deref()
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn state(&self) -> ToastState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, ToastState::Paused { .. })
    }

    /// Remaining countdown, if paused.
    pub fn remaining(&self) -> Option<Duration> {
        match self.state {
            ToastState::Paused { remaining } => Some(remaining),
            ToastState::Running => None,
        }
    }
}
