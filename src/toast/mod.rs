//! Toast notifications: short-lived, pausable status messages.
//!
//! # Architecture
//!
//! - `record`: `Toast`, `ToastId`, `Severity` and the per-toast countdown state
//! - `manager`: `ToastManager`, the service object that owns the live
//!   collection and the expiry timers
//!
//! # Example
//!
//! ```rust,ignore
//! use site_kit::toast::{ToastConfig, ToastManager};
//!
//! let toasts = ToastManager::new(ToastConfig::default());
//! let id = toasts.success("Key copied to clipboard");
//!
//! // Hovering a toast suspends its countdown
//! toasts.pause(id);
//! toasts.resume(id);
//!
//! // Leaving the page
//! toasts.clear_all();
//! ```

mod manager;
mod record;

pub use manager::{ToastConfig, ToastManager};
pub use record::{Severity, Toast, ToastId, ToastState, MIN_DURATION};
