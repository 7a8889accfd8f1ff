//! Translation preview - resolves a message key from the bundled locales
//!
//! Usage:
//!   cargo run -- footer.copyright year=2026        # default locale
//!   cargo run -- sk common.keys.keyId keyId=ABC1    # specific locale
//!
//! Optional environment variables:
//! - LOCALES_DIR (defaults to locales)
//! - DEFAULT_LOCALE (defaults to en)

use anyhow::{bail, Context, Result};
use site_kit::config::Config;
use site_kit::i18n::{LocaleCatalog, VarValue, Vars};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_kit=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (locale, key, assignments) = match args.as_slice() {
        [] => bail!("Usage: site-kit [LOCALE] KEY [NAME=VALUE ...]"),
        [locale, key, rest @ ..] if !key.contains('=') => (locale.as_str(), key.as_str(), rest),
        [key, rest @ ..] => (config.default_locale.as_str(), key.as_str(), rest),
    };

    let catalog = LocaleCatalog::load_dir(&config.locales_dir, &config.default_locale)
        .with_context(|| format!("Failed to load locales from {}", config.locales_dir.display()))?;

    if !catalog.contains(locale) {
        warn!("Unknown locale '{}', using '{}'", locale, catalog.base_code());
    }

    let vars = parse_vars(assignments)?;
    let text = catalog.translate(locale, key, (!vars.is_empty()).then_some(&vars));
    if text == key {
        warn!("No message for '{}' in locale '{}'", key, locale);
    }

    info!("Resolved {} ({})", key, locale);
    println!("{}", text);
    Ok(())
}

/// Parse `name=value` pairs. Integer values stay numeric.
fn parse_vars(assignments: &[String]) -> Result<Vars> {
    let mut vars = Vars::new();
    for assignment in assignments {
        let Some((name, value)) = assignment.split_once('=') else {
            bail!("Expected NAME=VALUE, got '{}'", assignment);
        };
        let value = match value.parse::<i64>() {
            Ok(n) => VarValue::Int(n),
            Err(_) => VarValue::from(value),
        };
        vars.insert(name, value);
    }
    Ok(vars)
}
