//! Translation dictionaries: nested maps of message keys to leaves.
//!
//! A base dictionary holds every message for the default locale. An overlay
//! has the same type with any subtree left out; `merge::deep_merge` combines
//! the two.

use crate::i18n::{LocaleError, Vars};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A message computed from variables at resolve time.
#[derive(Clone)]
pub struct Translator(Arc<dyn Fn(&Vars) -> String + Send + Sync>);

impl Translator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Vars) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, vars: &Vars) -> String {
        (self.0)(vars)
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Translator(..)")
    }
}

/// Two translators are equal only if they are the same function object.
impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// One value in a dictionary.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Plain message, may contain `{name}` placeholders.
    Text(String),
    Translator(Translator),
    /// Replaced wholesale by merges, never merged element-wise.
    List(Vec<Entry>),
    Branch(Dictionary),
}

impl Entry {
    pub fn as_branch(&self) -> Option<&Dictionary> {
        match self {
            Entry::Branch(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, Entry::Branch(_))
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Entry::Text(value.to_string())
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Entry::Text(value)
    }
}

impl From<Translator> for Entry {
    fn from(value: Translator) -> Self {
        Entry::Translator(value)
    }
}

impl From<Dictionary> for Entry {
    fn from(value: Dictionary) -> Self {
        Entry::Branch(value)
    }
}

/// Nested message map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary(BTreeMap<String, Entry>);

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, entry: impl Into<Entry>) -> Self {
        self.insert(key, entry);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<Entry>) -> Option<Entry> {
        self.0.insert(key.into(), entry.into())
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Dotted paths of every leaf, in key order.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(self, String::new(), &mut paths);
        paths
    }

    /// Build a dictionary from a JSON object.
    ///
    /// Strings become `Text`, objects `Branch`, arrays `List`; numbers and
    /// booleans are kept as their JSON text. `null` is rejected.
    pub fn from_json(value: &Value) -> Result<Self, LocaleError> {
        match value {
            Value::Object(map) => {
                let mut dict = Dictionary::new();
                for (key, val) in map {
                    dict.insert(key.clone(), entry_from_json(val, key.clone())?);
                }
                Ok(dict)
            }
            other => Err(LocaleError::InvalidRoot(json_kind(other))),
        }
    }

    /// Parse JSON text. `origin` names the source in error messages.
    pub fn from_json_str(content: &str, origin: &str) -> Result<Self, LocaleError> {
        let value: Value = serde_json::from_str(content).map_err(|source| LocaleError::Json {
            origin: origin.to_string(),
            source,
        })?;
        Self::from_json(&value)
    }
}

impl<K: Into<String>, V: Into<Entry>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        for (key, entry) in iter {
            dict.insert(key, entry);
        }
        dict
    }
}

fn entry_from_json(value: &Value, path: String) -> Result<Entry, LocaleError> {
    Ok(match value {
        Value::String(s) => Entry::Text(s.clone()),
        Value::Number(n) => Entry::Text(n.to_string()),
        Value::Bool(b) => Entry::Text(b.to_string()),
        Value::Array(items) => Entry::List(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| entry_from_json(item, format!("{}.{}", path, i)))
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(map) => {
            let mut dict = Dictionary::new();
            for (key, val) in map {
                dict.insert(key.clone(), entry_from_json(val, format!("{}.{}", path, key))?);
            }
            Entry::Branch(dict)
        }
        Value::Null => return Err(LocaleError::UnsupportedValue(path)),
    })
}

fn collect_leaf_paths(dict: &Dictionary, prefix: String, out: &mut Vec<String>) {
    for (key, entry) in dict.iter() {
        let path = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        };
        match entry {
            Entry::Branch(child) => collect_leaf_paths(child, path, out),
            _ => out.push(path),
        }
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
