//! Request payload decoding shared by the templatize and render commands.

use std::fs::read_to_string;
use std::path::Path;

use indexmap::IndexMap;
use ntl::{Arguments, Dataset, Datum};
use serde::Deserialize;

/// A templatization request: free text, row-oriented records, and named
/// arguments. Every field may be omitted.
#[derive(Debug, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub data: Vec<IndexMap<String, Datum>>,

    #[serde(default)]
    pub args: Arguments,
}

impl Payload {
    /// Read and decode a payload file.
    pub fn load(path: &Path) -> miette::Result<Self> {
        let content = read_to_string(path)
            .map_err(|e| miette::miette!("cannot read payload file {}: {}", path.display(), e))?;
        serde_json::from_str(&content)
            .map_err(|e| miette::miette!("invalid payload JSON in {}: {}", path.display(), e))
    }

    /// Build the dataset from the payload's records.
    pub fn dataset(&self) -> miette::Result<Dataset> {
        Dataset::from_records(self.data.clone())
            .map_err(|e| miette::miette!("invalid data records: {}", e))
    }
}
