//! Locale catalog: one base dictionary plus merged dictionaries per locale.

use crate::i18n::merge::deep_merge;
use crate::i18n::resolve::resolve;
use crate::i18n::{Dictionary, LocaleError, Vars};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Complete dictionaries for every known locale.
///
/// Overlays are merged against the base once, when inserted; the base itself
/// is never changed by an overlay.
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    base_code: String,
    base: Dictionary,
    merged: BTreeMap<String, Dictionary>,
}

impl LocaleCatalog {
    pub fn new(base_code: impl Into<String>, base: Dictionary) -> Self {
        Self {
            base_code: base_code.into(),
            base,
            merged: BTreeMap::new(),
        }
    }

    /// Merge `overlay` onto the base and register it under `code`.
    ///
    /// Replaces an earlier overlay for the same code. An overlay for the base
    /// code is ignored.
    pub fn insert_overlay(&mut self, code: impl Into<String>, overlay: &Dictionary) {
        let code = code.into();
        if code == self.base_code {
            warn!("Ignoring overlay for base locale '{}'", code);
            return;
        }

        let merged = deep_merge(&self.base, overlay);
        debug!(
            "Locale '{}' overrides {} of {} base messages",
            code,
            overlay.leaf_paths().len(),
            self.base.leaf_paths().len()
        );
        self.merged.insert(code, merged);
    }

    /// Load `<code>.json` files from `dir`. `<base_code>.json` is required and
    /// must be valid; broken overlay files are skipped with a warning.
    pub fn load_dir(dir: impl AsRef<Path>, base_code: &str) -> Result<Self, LocaleError> {
        let dir = dir.as_ref();
        let io_err = |source| LocaleError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = BTreeMap::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(code) = path.file_stem().and_then(|s| s.to_str()) {
                files.insert(code.to_string(), path.clone());
            }
        }

        let Some(base_path) = files.remove(base_code) else {
            return Err(LocaleError::MissingBaseLocale {
                code: base_code.to_string(),
                dir: dir.to_path_buf(),
            });
        };
        let mut catalog = Self::new(base_code, read_dictionary(&base_path)?);

        for (code, path) in files {
            match read_dictionary(&path) {
                Ok(overlay) => catalog.insert_overlay(code, &overlay),
                Err(e) => warn!("Skipping locale '{}': {}", code, e),
            }
        }

        info!(
            "Loaded {} locale(s) from {} (base: {})",
            catalog.merged.len() + 1,
            dir.display(),
            base_code
        );
        Ok(catalog)
    }

    pub fn base_code(&self) -> &str {
        &self.base_code
    }

    pub fn base(&self) -> &Dictionary {
        &self.base
    }

    pub fn contains(&self, code: &str) -> bool {
        code == self.base_code || self.merged.contains_key(code)
    }

    /// Complete dictionary for `code`, or the base for unknown codes.
    pub fn dictionary(&self, code: &str) -> &Dictionary {
        self.merged.get(code).unwrap_or(&self.base)
    }

    /// Resolve `key` in the dictionary for `code`.
    pub fn translate(&self, code: &str, key: &str, vars: Option<&Vars>) -> String {
        resolve(key, self.dictionary(code), vars)
    }
}

fn read_dictionary(path: &Path) -> Result<Dictionary, LocaleError> {
    let content = fs::read_to_string(path).map_err(|source| LocaleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Dictionary::from_json_str(&content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn dict(value: serde_json::Value) -> Dictionary {
        Dictionary::from_json(&value).unwrap()
    }

    fn base() -> Dictionary {
        dict(json!({
            "common": { "save": "Save", "cancel": "Cancel" },
            "footer": { "copyright": "© 2025-{year} Mota" }
        }))
    }

    // ==================== Overlay Tests ====================

    #[test]
    fn test_overlay_falls_back_to_base_messages() {
        let mut catalog = LocaleCatalog::new("en", base());
        catalog.insert_overlay("sk", &dict(json!({ "common": { "save": "Uložiť" } })));

        assert_eq!(catalog.translate("sk", "common.save", None), "Uložiť");
        assert_eq!(catalog.translate("sk", "common.cancel", None), "Cancel");
        assert_eq!(catalog.translate("en", "common.save", None), "Save");
    }

    #[test]
    fn test_unknown_locale_uses_base() {
        let catalog = LocaleCatalog::new("en", base());
        assert!(!catalog.contains("de"));
        assert_eq!(catalog.dictionary("de"), catalog.base());
    }

    #[test]
    fn test_overlay_for_base_code_is_ignored() {
        let mut catalog = LocaleCatalog::new("en", base());
        catalog.insert_overlay("en", &dict(json!({ "common": { "save": "Keep" } })));
        assert_eq!(catalog.translate("en", "common.save", None), "Save");
    }

    #[test]
    fn test_translate_with_vars() {
        let catalog = LocaleCatalog::new("en", base());
        let vars = Vars::new().with("year", 2026);
        assert_eq!(
            catalog.translate("en", "footer.copyright", Some(&vars)),
            "© 2025-2026 Mota"
        );
    }

    // ==================== Directory Loading Tests ====================

    #[test]
    fn test_load_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("en.json"), base_json()).unwrap();
        fs::write(temp.path().join("sk.json"), r#"{"common":{"cancel":"Zrušiť"}}"#).unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();

        let catalog = LocaleCatalog::load_dir(temp.path(), "en").unwrap();
        assert_eq!(catalog.base_code(), "en");
        assert!(catalog.contains("sk"));
        assert!(!catalog.contains("notes"));
        assert_eq!(catalog.translate("sk", "common.cancel", None), "Zrušiť");
        assert_eq!(catalog.translate("sk", "common.save", None), "Save");
    }

    #[test]
    fn test_load_dir_skips_broken_overlay() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("en.json"), base_json()).unwrap();
        fs::write(temp.path().join("ru.json"), "{ broken").unwrap();
        fs::write(temp.path().join("de.json"), "[1, 2]").unwrap();

        let catalog = LocaleCatalog::load_dir(temp.path(), "en").unwrap();
        assert!(!catalog.contains("ru"));
        assert!(!catalog.contains("de"));
    }

    #[test]
    fn test_load_dir_requires_base() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("sk.json"), "{}").unwrap();

        let err = LocaleCatalog::load_dir(temp.path(), "en").unwrap_err();
        assert!(matches!(err, LocaleError::MissingBaseLocale { .. }));
    }

    #[test]
    fn test_load_dir_invalid_base_is_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("en.json"), "\"just a string\"").unwrap();

        let err = LocaleCatalog::load_dir(temp.path(), "en").unwrap_err();
        assert!(matches!(err, LocaleError::InvalidRoot("string")));
    }

    #[test]
    fn test_load_dir_missing_directory() {
        let temp = TempDir::new().unwrap();
        let err = LocaleCatalog::load_dir(temp.path().join("nope"), "en").unwrap_err();
        assert!(matches!(err, LocaleError::Io { .. }));
    }

    fn base_json() -> &'static str {
        r#"{
            "common": { "save": "Save", "cancel": "Cancel" },
            "footer": { "copyright": "© 2025-{year} Mota" }
        }"#
    }
}
