//! Dotted-key lookup with placeholder interpolation.

use crate::i18n::{Dictionary, Entry, Vars};
use regex::{Captures, Regex};
use std::sync::OnceLock;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Resolve a dotted key such as `"footer.links.about"` against `dictionary`.
///
/// - translator leaves are called with `vars` (or an empty set)
/// - text leaves are returned verbatim, or interpolated when `vars` is given
/// - a missing segment, or a path ending on a branch or list, yields `key`
///   itself so missing translations stay visible
pub fn resolve(key: &str, dictionary: &Dictionary, vars: Option<&Vars>) -> String {
    let Some(entry) = lookup(key, dictionary) else {
        return key.to_string();
    };

    match entry {
        Entry::Translator(translator) => match vars {
            Some(vars) => translator.call(vars),
            None => translator.call(&Vars::new()),
        },
        Entry::Text(text) => match vars {
            Some(vars) => interpolate(text, vars),
            None => text.clone(),
        },
        Entry::List(_) | Entry::Branch(_) => key.to_string(),
    }
}

/// Walk `key` segment by segment. `None` if any segment is missing.
pub fn lookup<'a>(key: &str, dictionary: &'a Dictionary) -> Option<&'a Entry> {
    let mut segments = key.split('.');
    let mut current = dictionary.get(segments.next()?)?;
    for segment in segments {
        current = current.as_branch()?.get(segment)?;
    }
    Some(current)
}

/// Replace every `{name}` with the rendered variable; absent or null
/// variables become the empty string.
pub fn interpolate(text: &str, vars: &Vars) -> String {
    let regex =
        PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([^{}]+)\}").expect("valid regex"));

    regex
        .replace_all(text, |caps: &Captures| vars.render(&caps[1]))
        .into_owned()
}
