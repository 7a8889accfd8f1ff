//! Named variables passed to translations.

use std::collections::BTreeMap;
use std::fmt;

/// A single interpolation value.
#[derive(Debug, Clone, PartialEq)]
pub enum VarValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Renders as the empty string.
    Null,
}

impl fmt::Display for VarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarValue::Str(s) => f.write_str(s),
            VarValue::Int(n) => write!(f, "{}", n),
            VarValue::Float(n) => write!(f, "{}", n),
            VarValue::Bool(b) => write!(f, "{}", b),
            VarValue::Null => Ok(()),
        }
    }
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        VarValue::Str(value.to_string())
    }
}

impl From<String> for VarValue {
    fn from(value: String) -> Self {
        VarValue::Str(value)
    }
}

macro_rules! int_var {
    ($($t:ty),*) => {
        $(impl From<$t> for VarValue {
            fn from(value: $t) -> Self {
                VarValue::Int(i64::from(value))
            }
        })*
    };
}

int_var!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for VarValue {
    fn from(value: f64) -> Self {
        VarValue::Float(value)
    }
}

impl From<bool> for VarValue {
    fn from(value: bool) -> Self {
        VarValue::Bool(value)
    }
}

impl<T: Into<VarValue>> From<Option<T>> for VarValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(VarValue::Null)
    }
}

/// Variables for one `resolve` call, keyed by placeholder name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vars(BTreeMap<String, VarValue>);

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<VarValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<VarValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&VarValue> {
        self.0.get(name)
    }

    /// Rendered value of `name`; absent and null both give `""`.
    pub fn render(&self, name: &str) -> String {
        self.get(name).map(ToString::to_string).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VarValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<VarValue>> FromIterator<(K, V)> for Vars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Vars::new();
        for (name, value) in iter {
            vars.insert(name, value);
        }
        vars
    }
}
