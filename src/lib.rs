//! Runtime pieces of the site starter: toast notifications and locale
//! dictionaries.

pub mod config;
pub mod i18n;
pub mod toast;
