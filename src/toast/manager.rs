//! Toast lifecycle management.
//!
//! `ToastManager` owns the live collection and one expiry timer per running
//! toast. Timers are Tokio tasks; every operation runs to completion under a
//! single lock, so pause/resume/remove/expiry are totally ordered per toast.

use super::record::{Severity, Toast, ToastId, ToastState, MIN_DURATION};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

/// Default lifetimes per severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastConfig {
    pub success: Duration,
    pub error: Duration,
    pub info: Duration,
    pub warning: Duration,
}

impl ToastConfig {
    /// Override the default lifetime of one severity.
    pub fn with_duration(mut self, severity: Severity, duration: Duration) -> Self {
        let duration = duration.max(MIN_DURATION);
        match severity {
            Severity::Success => self.success = duration,
            Severity::Error => self.error = duration,
            Severity::Info => self.info = duration,
            Severity::Warning => self.warning = duration,
        }
        self
    }

    /// Lifetime used when `notify` is not given one.
    pub fn duration_for(&self, severity: Severity) -> Duration {
        match severity {
            Severity::Success => self.success,
            Severity::Error => self.error,
            Severity::Info => self.info,
            Severity::Warning => self.warning,
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            success: Severity::Success.default_duration(),
            error: Severity::Error.default_duration(),
            info: Severity::Info.default_duration(),
            warning: Severity::Warning.default_duration(),
        }
    }
}

/// Pending expiry of a running toast.
struct Timer {
    /// Identifies the running period that scheduled this timer.
    generation: u64,
    handle: JoinHandle<()>,
}

#[derive(Default)]
struct State {
    next_id: u64,
    next_generation: u64,
    timers: HashMap<ToastId, Timer>,
}

struct Inner {
    config: ToastConfig,
    runtime: Handle,
    state: Mutex<State>,
    /// Live collection in display order. Only written while `state` is held.
    live: watch::Sender<Vec<Toast>>,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Timer callback. Stale generations are ignored.
    fn expire(&self, id: ToastId, generation: u64) {
        let mut state = self.lock();
        match state.timers.get(&id) {
            Some(timer) if timer.generation == generation => {}
            _ => return,
        }
        state.timers.remove(&id);
        self.live.send_if_modified(|toasts| remove_from(toasts, id));
        debug!("Toast {} expired", id);
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        for (_, timer) in state.timers.drain() {
            timer.handle.abort();
        }
    }
}

/// Handle to a toast collection. Clones share the same collection.
#[derive(Clone)]
pub struct ToastManager {
    inner: Arc<Inner>,
}

impl ToastManager {
    /// Create a manager whose timers run on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime. Use [`ToastManager::with_handle`]
    /// to supply a runtime explicitly.
    pub fn new(config: ToastConfig) -> Self {
        Self::with_handle(config, Handle::current())
    }

    /// Create a manager whose timers are spawned on `runtime`.
    pub fn with_handle(config: ToastConfig, runtime: Handle) -> Self {
        let (live, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(Inner {
                config,
                runtime,
                state: Mutex::new(State::default()),
                live,
            }),
        }
    }

    pub fn config(&self) -> &ToastConfig {
        &self.inner.config
    }

    /// Show a toast with the default lifetime for its severity.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> ToastId {
        self.notify_with(message, severity, None, None)
    }

    /// Show a toast.
    ///
    /// `duration` defaults to the configured lifetime for `severity` and is
    /// clamped to [`MIN_DURATION`]. The toast is appended to the end of the
    /// live collection and its countdown starts immediately.
    pub fn notify_with(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
        style_hint: Option<String>,
    ) -> ToastId {
        let message = message.into();
        if message.is_empty() {
            warn!("Showing {} toast with an empty message", severity);
        }
        let duration = duration
            .unwrap_or_else(|| self.inner.config.duration_for(severity))
            .max(MIN_DURATION);

        let mut state = self.inner.lock();
        let id = ToastId(state.next_id);
        state.next_id += 1;

        let toast = Toast {
            id,
            message,
            severity,
            duration,
            style_hint,
            started_at: Instant::now(),
            state: ToastState::Running,
        };
        self.inner.live.send_modify(|toasts| toasts.push(toast));
        self.schedule(&mut state, id, duration);

        debug!("Toast {} ({}) shown for {:?}", id, severity, duration);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, Severity::Error)
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, Severity::Info)
    }

    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, Severity::Warning)
    }

    /// Dismiss a toast now. Unknown ids are ignored.
    pub fn remove(&self, id: ToastId) {
        let mut state = self.inner.lock();
        if let Some(timer) = state.timers.remove(&id) {
            timer.handle.abort();
        }
        if self.inner.live.send_if_modified(|toasts| remove_from(toasts, id)) {
            debug!("Toast {} removed", id);
        }
    }

    /// Suspend the countdown of a running toast. No-op otherwise.
    pub fn pause(&self, id: ToastId) {
        let mut state = self.inner.lock();
        let Some(timer) = state.timers.remove(&id) else {
            return;
        };
        timer.handle.abort();

        self.inner.live.send_if_modified(|toasts| {
            let Some(toast) = toasts.iter_mut().find(|t| t.id == id) else {
                return false;
            };
            let elapsed = Instant::now().saturating_duration_since(toast.started_at);
            let remaining = toast.duration.saturating_sub(elapsed);
            toast.state = ToastState::Paused { remaining };
            debug!("Toast {} paused with {:?} remaining", id, remaining);
            true
        });
    }

    /// Restart the countdown of a paused toast from where it stopped. No-op otherwise.
    pub fn resume(&self, id: ToastId) {
        let mut state = self.inner.lock();
        let mut resumed = None;
        self.inner.live.send_if_modified(|toasts| {
            let Some(toast) = toasts.iter_mut().find(|t| t.id == id) else {
                return false;
            };
            let ToastState::Paused { remaining } = toast.state else {
                return false;
            };
            toast.started_at = Instant::now();
            toast.state = ToastState::Running;
            resumed = Some(remaining);
            true
        });

        if let Some(remaining) = resumed {
            self.schedule(&mut state, id, remaining);
            debug!("Toast {} resumed for {:?}", id, remaining);
        }
    }

    /// Cancel every timer and empty the collection.
    pub fn clear_all(&self) {
        let mut state = self.inner.lock();
        let cancelled = state.timers.len();
        for (_, timer) in state.timers.drain() {
            timer.handle.abort();
        }
        self.inner.live.send_replace(Vec::new());
        debug!("Cleared all toasts ({} timers cancelled)", cancelled);
    }

    /// Snapshot of the live collection in display order.
    pub fn toasts(&self) -> Vec<Toast> {
        self.inner.live.borrow().clone()
    }

    pub fn get(&self, id: ToastId) -> Option<Toast> {
        self.inner.live.borrow().iter().find(|t| t.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.live.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Observe the live collection. Every change is published before the
    /// operation that made it returns.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.inner.live.subscribe()
    }

    fn schedule(&self, state: &mut State, id: ToastId, delay: Duration) {
        let generation = state.next_generation;
        state.next_generation += 1;

        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let handle = self.inner.runtime.spawn(async move {
            sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                inner.expire(id, generation);
            }
        });

        if let Some(previous) = state.timers.insert(id, Timer { generation, handle }) {
            previous.handle.abort();
        }
    }
}

impl fmt::Debug for ToastManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastManager")
            .field("config", &self.inner.config)
            .field("live", &self.len())
            .finish()
    }
}

fn remove_from(toasts: &mut Vec<Toast>, id: ToastId) -> bool {
    let before = toasts.len();
    toasts.retain(|t| t.id != id);
    toasts.len() != before
}
