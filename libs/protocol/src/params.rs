//! Form-parameter encoding.
//!
//! Every request type flattens into a [`ParamMap`]: unique string keys, one
//! or more string values per key. The server treats key order as
//! irrelevant; a `BTreeMap` keeps encoding deterministic for tests.

use std::collections::BTreeMap;
use std::fmt;

use crate::file::FileParam;

/// Flat string multimap sent as an urlencoded form body or as the text
/// parts of a multipart request.
pub type ParamMap = BTreeMap<String, Vec<String>>;

/// Converts a request value into its form-parameter encoding.
pub trait ToParamMap {
    fn to_param_map(&self) -> ParamMap;
}

/// Surfaces file-backed fields separately from the string parameter map.
///
/// File parameters never appear in [`ToParamMap::to_param_map`] output; the
/// transport decides whether each one becomes a plain text field (remote
/// URL) or a multipart file part (local upload).
pub trait HasFileParams {
    fn file_params(&self) -> Vec<&FileParam> {
        Vec::new()
    }
}

/// Builder for a [`ParamMap`].
///
/// Unset (`None`) fields are omitted entirely, which is how the wire format
/// distinguishes "not provided" from an explicit `false` or zero. Booleans
/// encode as the literals `"true"` and `"false"`; everything else uses its
/// canonical `Display` form.
#[derive(Debug, Default)]
pub struct ParamMapBuilder {
    map: ParamMap,
}

impl ParamMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single-valued parameter, or nothing if the value is unset.
    pub fn put<V: fmt::Display>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.map.insert(key.to_string(), vec![value.to_string()]);
        }
        self
    }

    /// Adds a collection as one comma-joined value under `key`.
    ///
    /// Empty collections are omitted like unset scalars.
    pub fn put_joined<V: fmt::Display>(mut self, key: &str, values: &[V]) -> Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",");
            self.map.insert(key.to_string(), vec![joined]);
        }
        self
    }

    /// Adds a collection as repeated values under the same key.
    pub fn put_repeated<V: fmt::Display>(mut self, key: &str, values: &[V]) -> Self {
        if !values.is_empty() {
            self.map.insert(
                key.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            );
        }
        self
    }

    /// Merges a nested map under bracketed subkeys: `prefix[subkey]`.
    ///
    /// Used for inline addresses, which the server accepts as
    /// `to[line1]=...&to[city]=...` alongside flat fields.
    pub fn put_nested(mut self, prefix: &str, nested: ParamMap) -> Self {
        for (key, values) in nested {
            self.map.insert(format!("{prefix}[{key}]"), values);
        }
        self
    }

    pub fn build(self) -> ParamMap {
        self.map
    }
}

/// Flattens a [`ParamMap`] into key/value pairs, repeating keys with
/// multiple values. This is the shape urlencoded and multipart encoders
/// consume.
pub fn to_pairs(map: &ParamMap) -> Vec<(String, String)> {
    map.iter()
        .flat_map(|(k, vs)| vs.iter().map(move |v| (k.clone(), v.clone())))
        .collect()
}
