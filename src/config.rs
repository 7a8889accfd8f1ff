use crate::toast::{Severity, ToastConfig};
use anyhow::{bail, Result};
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

static LOCALE_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Config {
    // Locales
    pub locales_dir: PathBuf,
    pub default_locale: String,

    // Toasts (milliseconds)
    pub toast_success_ms: u64,
    pub toast_info_ms: u64,
    pub toast_warning_ms: u64,
    pub toast_error_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_locale = std::env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string());
        if !is_locale_code(&default_locale) {
            bail!("DEFAULT_LOCALE is not a valid locale code: '{}'", default_locale);
        }

        Ok(Self {
            // Locales
            locales_dir: std::env::var("LOCALES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("locales")),
            default_locale,

            // Toasts
            toast_success_ms: env_millis("TOAST_SUCCESS_MS", Severity::Success),
            toast_info_ms: env_millis("TOAST_INFO_MS", Severity::Info),
            toast_warning_ms: env_millis("TOAST_WARNING_MS", Severity::Warning),
            toast_error_ms: env_millis("TOAST_ERROR_MS", Severity::Error),
        })
    }

    /// Per-severity toast lifetimes. Zero is clamped to the minimum.
    pub fn toast_config(&self) -> ToastConfig {
        ToastConfig::default()
            .with_duration(Severity::Success, Duration::from_millis(self.toast_success_ms))
            .with_duration(Severity::Info, Duration::from_millis(self.toast_info_ms))
            .with_duration(Severity::Warning, Duration::from_millis(self.toast_warning_ms))
            .with_duration(Severity::Error, Duration::from_millis(self.toast_error_ms))
    }
}

fn env_millis(name: &str, severity: Severity) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(severity.default_duration().as_millis() as u64)
}

fn is_locale_code(code: &str) -> bool {
    let regex = LOCALE_CODE_REGEX
        .get_or_init(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]+)*$").expect("valid regex"));
    regex.is_match(code)
}
