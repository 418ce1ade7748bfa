use std::collections::BTreeMap;

use serde::Serialize;

/// A single rendered parameter value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Scalar text. Booleans and numbers are rendered into this form.
    Text(String),
    /// Ordered list of strings.
    List(Vec<String>),
    /// Nested key/value structure (e.g. contextual metadata).
    Map(ParamMap),
}

impl ParamValue {
    /// Empty values are never serialized by [`ParamMap::add`].
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Map(map) => map.is_empty(),
        }
    }

    /// Scalar text, if this is a [`ParamValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    fn write_signing(&self, out: &mut String) {
        match self {
            Self::Text(s) => out.push_str(s),
            Self::List(items) => out.push_str(&items.join(",")),
            Self::Map(map) => {
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        out.push('|');
                    }
                    out.push_str(&escape_pair_text(k));
                    out.push('=');
                    let mut inner = String::new();
                    v.write_signing(&mut inner);
                    out.push_str(&escape_pair_text(&inner));
                }
            }
        }
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Text(if v { "true" } else { "false" }.to_string())
    }
}

macro_rules! numeric_param_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(v: $t) -> Self {
                    Self::Text(v.to_string())
                }
            }
        )*
    };
}

numeric_param_value!(i32, i64, u32, u64, f32, f64);

impl From<Vec<String>> for ParamValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

impl From<ParamMap> for ParamValue {
    fn from(v: ParamMap) -> Self {
        Self::Map(v)
    }
}

impl From<&BTreeMap<String, String>> for ParamValue {
    fn from(v: &BTreeMap<String, String>) -> Self {
        let mut map = ParamMap::new();
        for (k, val) in v {
            map.put(k.clone(), val.as_str());
        }
        Self::Map(map)
    }
}

/// Ordered wire parameters of one request.
///
/// Iteration is always in lexicographic key order, independent of insertion order, so the
/// signing input computed from a map is reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParamMap {
    entries: BTreeMap<String, ParamValue>,
}

impl ParamMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`, even when the value is empty.
    ///
    /// Used for sentinel values such as `"false"` that must always be sent.
    pub fn put(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Insert or overwrite `key`, omitting empty values entirely.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let value = value.into();
        if !value.is_empty() {
            self.entries.insert(key.into(), value);
        }
    }

    /// Like [`ParamMap::add`], omitting `None` as well.
    pub fn add_opt<V: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.add(key, value);
        }
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    /// Scalar text stored under `key`.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_text)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no parameter is present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.entries.remove(key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Canonical `key=value&key=value` text handed to the signer.
    ///
    /// Empty values are skipped, lists join with `,` and nested maps encode as
    /// `k=v|k=v` with `=`, `|` and `\` escaped by a backslash.
    pub fn to_signing_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.entries.iter().filter(|(_, v)| !v.is_empty()) {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            value.write_signing(&mut out);
        }
        out
    }
}

impl<'a> IntoIterator for &'a ParamMap {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn escape_pair_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '=' | '|' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/params/map.rs"]
mod tests;
