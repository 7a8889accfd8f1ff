//! Internationalization (i18n) module for translated site text.
//!
//! Each locale is a nested dictionary of messages. The default locale ships a
//! complete base dictionary; other locales ship partial overlays that are
//! deep-merged onto it, so a message missing from an overlay falls back to
//! the base text.
//!
//! # Architecture
//!
//! - `dictionary`: `Dictionary`, `Entry` and `Translator`, plus JSON loading
//! - `vars`: named variables for interpolation and translators
//! - `merge`: non-destructive deep merge of an overlay onto a base
//! - `resolve`: dotted-key lookup with `{name}` interpolation and
//!   fallback to the key itself
//! - `catalog`: base plus merged dictionaries, loaded from a directory
//!
//! # Example
//!
//! ```rust,ignore
//! use site_kit::i18n::{resolve, LocaleCatalog, Vars};
//!
//! let catalog = LocaleCatalog::load_dir("locales", "en")?;
//! let vars = Vars::new().with("year", 2026);
//! let text = resolve("footer.copyright", catalog.dictionary("sk"), Some(&vars));
//! ```

mod catalog;
mod dictionary;
mod error;
mod merge;
mod resolve;
mod vars;

pub use catalog::LocaleCatalog;
pub use dictionary::{Dictionary, Entry, Translator};
pub use error::LocaleError;
pub use merge::{deep_merge, deep_merge_json, merge_overlay};
pub use resolve::{interpolate, lookup, resolve};
pub use vars::{VarValue, Vars};
