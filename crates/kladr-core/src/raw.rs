// crates/kladr-core/src/raw.rs

//! Raw dataset structures as they come from the source JSON.
//!
//! NOTE: These types mirror the exported classifier tables. They are only
//! used on the way in; the query engine works on [`crate::model::LevelRecord`].

use serde::{Deserialize, Serialize};

/// One row of any classifier table.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecordRaw {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub socr: String,
    /// Postal index, absent in region rows and in parts of the locality table.
    #[serde(default, rename = "index")]
    pub index: Option<String>,
    /// Wing identifiers, house rows only.
    #[serde(default)]
    pub korp: Option<String>,
}

/// The whole dataset: `{ "region": [...], "kladr": [...], "street": [...], "doma": [...] }`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TablesRaw {
    #[serde(default)]
    pub region: Vec<RecordRaw>,
    #[serde(default)]
    pub kladr: Vec<RecordRaw>,
    #[serde(default)]
    pub street: Vec<RecordRaw>,
    #[serde(default)]
    pub doma: Vec<RecordRaw>,
}

impl RecordRaw {
    /// Shorthand used by builders and fixtures.
    pub fn new(code: &str, name: &str, socr: &str) -> Self {
        Self {
            code: code.to_owned(),
            name: name.to_owned(),
            socr: socr.to_owned(),
            index: None,
            korp: None,
        }
    }

    pub fn with_index(mut self, index: &str) -> Self {
        self.index = Some(index.to_owned());
        self
    }

    pub fn with_korp(mut self, korp: &str) -> Self {
        self.korp = Some(korp.to_owned());
        self
    }
}
