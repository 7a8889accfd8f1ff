//! Integration tests for site-kit
//!
//! These tests exercise the bundled locale files and the toast manager
//! together, the way page code uses them.

use std::path::{Path, PathBuf};
use std::time::Duration;

use site_kit::config::Config;
use site_kit::i18n::{deep_merge, resolve, Dictionary, LocaleCatalog, Vars};
use site_kit::toast::{Severity, ToastManager, ToastState};
use tempfile::TempDir;

// ==================== Test Helpers ====================

fn locales_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("locales")
}

fn bundled_catalog() -> LocaleCatalog {
    LocaleCatalog::load_dir(locales_dir(), "en").expect("bundled locales should load")
}

fn test_config() -> Config {
    Config {
        locales_dir: locales_dir(),
        default_locale: "en".to_string(),
        toast_success_ms: 1000,
        toast_info_ms: 1000,
        toast_warning_ms: 2000,
        toast_error_ms: 2000,
    }
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
}

// ==================== Bundled Locale Tests ====================

#[test]
fn test_bundled_locales_load() {
    let catalog = bundled_catalog();
    assert_eq!(catalog.base_code(), "en");
    assert!(catalog.contains("sk"));
    assert!(catalog.contains("ru"));
}

#[test]
fn test_overlay_translations_win() {
    let catalog = bundled_catalog();
    assert_eq!(catalog.translate("sk", "common.cancel", None), "Zrušiť");
    assert_eq!(catalog.translate("ru", "navbar.home", None), "Главная");
    assert_eq!(catalog.translate("en", "navbar.home", None), "Home");
}

#[test]
fn test_messages_missing_from_overlay_fall_back_to_base() {
    let catalog = bundled_catalog();
    // Neither overlay translates the support section.
    assert_eq!(catalog.translate("sk", "support.title", None), "Support");
    assert_eq!(
        catalog.translate("ru", "support.errors.pleaseEnterYourQuestion", None),
        "Please enter your question"
    );
}

#[test]
fn test_merged_locales_keep_base_shape() {
    let catalog = bundled_catalog();
    let base_paths = catalog.base().leaf_paths();
    for code in ["sk", "ru"] {
        assert_eq!(catalog.dictionary(code).leaf_paths(), base_paths, "locale {code}");
    }
}

#[test]
fn test_interpolated_footer() {
    let catalog = bundled_catalog();
    let vars = Vars::new().with("year", 2026);
    assert_eq!(
        catalog.translate("en", "footer.copyright", Some(&vars)),
        "© Copyright 2025-2026 Mota"
    );
    assert_eq!(
        catalog.translate("sk", "footer.copyright", Some(&vars)),
        "© 2025–2026 Wall Money"
    );
}

#[test]
fn test_missing_key_is_visible() {
    let catalog = bundled_catalog();
    assert_eq!(
        catalog.translate("sk", "footer.links.about", None),
        "footer.links.about"
    );
}

#[test]
fn test_base_unchanged_after_loading_overlays() {
    let base_text = std::fs::read_to_string(locales_dir().join("en.json")).unwrap();
    let base = Dictionary::from_json_str(&base_text, "en.json").unwrap();

    let catalog = bundled_catalog();
    assert_eq!(catalog.base(), &base);
    assert_eq!(resolve("common.cancel", catalog.base(), None), "Cancel");
}

#[test]
fn test_catalog_from_temp_dir_with_broken_overlay() {
    let temp = TempDir::new().unwrap();
    std::fs::copy(locales_dir().join("en.json"), temp.path().join("en.json")).unwrap();
    std::fs::write(temp.path().join("sk.json"), "{ \"common\": ").unwrap();

    let catalog = LocaleCatalog::load_dir(temp.path(), "en").unwrap();
    assert!(!catalog.contains("sk"));
    assert_eq!(catalog.translate("sk", "common.cancel", None), "Cancel");
}

#[test]
fn test_deep_merge_against_bundled_base() {
    let catalog = bundled_catalog();
    let overlay = Dictionary::new().with("navbar", Dictionary::new().with("home", "Start"));
    let merged = deep_merge(catalog.base(), &overlay);

    assert_eq!(resolve("navbar.home", &merged, None), "Start");
    assert_eq!(resolve("navbar.support", &merged, None), "Support");
    assert_eq!(resolve("navbar.home", catalog.base(), None), "Home");
}

// ==================== Toast + Locale Tests ====================

#[tokio::test(start_paused = true)]
async fn test_translated_toast_lifecycle() {
    let config = test_config();
    let catalog = bundled_catalog();
    let toasts = ToastManager::new(config.toast_config());

    let message = catalog.translate("sk", "helpers.keys.copiedToClipboard", None);
    let id = toasts.success(message);

    let toast = toasts.get(id).unwrap();
    assert_eq!(toast.message(), "Kľúč bol skopírovaný do schránky");
    assert_eq!(toast.duration(), Duration::from_millis(1000));

    advance(1001).await;
    assert!(toasts.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_hovered_toast_outlives_its_duration() {
    let toasts = ToastManager::new(test_config().toast_config());
    let id = toasts.notify_with("Failed to copy key", Severity::Error, None, Some("toast-error".into()));

    advance(500).await;
    toasts.pause(id);
    advance(5000).await;
    assert_eq!(
        toasts.get(id).unwrap().state(),
        ToastState::Paused {
            remaining: Duration::from_millis(1500)
        }
    );

    toasts.resume(id);
    advance(1499).await;
    assert!(toasts.get(id).is_some());
    advance(2).await;
    assert!(toasts.get(id).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_clear_all_on_navigation() {
    let toasts = ToastManager::new(test_config().toast_config());
    let mut rx = toasts.subscribe();

    toasts.notify_with("one", Severity::Info, Some(Duration::from_millis(1)), None);
    toasts.warning("two");
    toasts.clear_all();

    assert!(rx.borrow_and_update().is_empty());
    advance(50).await;
    assert!(toasts.is_empty());
    assert!(!rx.has_changed().unwrap());
}
