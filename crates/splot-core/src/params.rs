// File: crates/splot-core/src/params.rs
// Summary: Ordered named parameters passed alongside a plotted function.

use std::fmt;

use crate::error::{Result, SplotError};

#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl ParamValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(v) => Some(*v),
            ParamValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Number(_) => None,
        }
    }

    /// Parse a raw string, preferring a number when it reads as one.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<f64>() {
            Ok(v) => ParamValue::Number(v),
            Err(_) => ParamValue::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(v) => write!(f, "{v}"),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self { ParamValue::Number(v) }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self { ParamValue::Number(v as f64) }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self { ParamValue::Text(v.to_string()) }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self { ParamValue::Text(v) }
}

/// Named parameters in insertion order. Setting an existing key keeps its position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Remove `key` and return its value.
    pub fn take(&mut self, key: &str) -> Option<ParamValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Numeric parameter, or `default` when absent. A text value is an error.
    pub fn number_or(&self, key: &str, default: f64) -> Result<f64> {
        match self.get(key) {
            None => Ok(default),
            Some(v) => v
                .as_number()
                .ok_or_else(|| SplotError::invalid_param(key, format!("expected a number, got '{v}'"))),
        }
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `self` with every entry of `overrides` set on top; keys of `self` keep their position.
    pub fn merged(&self, overrides: &Params) -> Params {
        let mut out = self.clone();
        for (k, v) in overrides.iter() {
            out.set(k, v.clone());
        }
        out
    }

    /// Legend suffix: `", k=v"` per parameter, empty when there are none.
    pub fn suffix(&self) -> String {
        let mut out = String::new();
        for (k, v) in &self.entries {
            out.push_str(&format!(", {k}={v}"));
        }
        out
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut p = Params::new();
        for (k, v) in iter {
            p.set(k, v);
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_keeps_insertion_order() {
        let p = Params::new().with("sigma", 0.5).with("mu", 2.0);
        assert_eq!(p.suffix(), ", sigma=0.5, mu=2");
        assert_eq!(Params::new().suffix(), "");
    }

    #[test]
    fn merged_overrides_win_and_keep_order() {
        let base = Params::new().with("k", 1.0).with("x0", 5.0);
        let group = Params::new().with("x0", 2.0).with("w", 3.0);
        let m = base.merged(&group);
        assert_eq!(m.suffix(), ", k=1, x0=2, w=3");
        assert_eq!(base.merged(&Params::new()), base);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut p = Params::new().with("a", 1.0).with("b", 2.0);
        p.set("a", 3.0);
        assert_eq!(p.suffix(), ", a=3, b=2");
    }

    #[test]
    fn take_removes_entry() {
        let mut p = Params::new().with("yaxis", "right").with("k", 1.5);
        assert_eq!(p.take("yaxis"), Some(ParamValue::Text("right".into())));
        assert!(p.get("yaxis").is_none());
        assert_eq!(p.len(), 1);
        assert_eq!(p.take("missing"), None);
    }

    #[test]
    fn number_or_rejects_text() {
        let p = Params::new().with("k", "fast");
        assert!(p.number_or("k", 1.0).is_err());
        assert_eq!(p.number_or("other", 4.0).unwrap(), 4.0);
    }

    #[test]
    fn parse_prefers_numbers() {
        assert_eq!(ParamValue::parse(" 2.5 "), ParamValue::Number(2.5));
        assert_eq!(ParamValue::parse("right"), ParamValue::Text("right".into()));
    }
}
