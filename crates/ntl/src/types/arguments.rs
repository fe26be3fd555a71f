//! Named argument lists.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::datum::Datum;

/// Insertion-ordered named value lists, typically decoded from a request's
/// query parameters.
///
/// Keys may carry a leading `?` marker (the formula convention for
/// user-supplied parameters); the marker is stripped wherever the key
/// appears in a coordinate expression, and [`Arguments::lookup`] accepts
/// either form. Iteration order is insertion order, which makes argument
/// match precedence deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arguments(IndexMap<String, Vec<Datum>>);

impl Arguments {
    pub fn new() -> Self {
        Arguments(IndexMap::new())
    }

    /// Inserts a value list under `key`, replacing any previous list.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<Datum>) {
        self.0.insert(key.into(), values);
    }

    /// The value list stored under exactly `key`.
    pub fn get(&self, key: &str) -> Option<&[Datum]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// The value list for `key`, trying the bare key first and then the
    /// `?`-marked form.
    pub fn lookup(&self, key: &str) -> Option<&[Datum]> {
        self.get(key).or_else(|| self.get(&format!("?{key}")))
    }

    /// Key/value-list pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Datum])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<IndexMap<String, Vec<Datum>>> for Arguments {
    fn from(map: IndexMap<String, Vec<Datum>>) -> Self {
        Arguments(map)
    }
}

impl FromIterator<(String, Vec<Datum>)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Datum>)>>(iter: I) -> Self {
        Arguments(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_tries_the_marked_form() {
        let mut args = Arguments::new();
        args.insert("?color", vec![Datum::from("red"), Datum::from("blue")]);
        assert!(args.get("color").is_none());
        assert_eq!(
            args.lookup("color"),
            Some(&[Datum::from("red"), Datum::from("blue")][..])
        );
    }

    #[test]
    fn iteration_is_insertion_ordered() {
        let mut args = Arguments::new();
        args.insert("b", vec![Datum::Int(1)]);
        args.insert("a", vec![Datum::Int(2)]);
        let keys: Vec<&str> = args.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a"]);
    }
}
