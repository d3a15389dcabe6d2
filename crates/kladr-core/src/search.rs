// crates/kladr-core/src/search.rs

//! # Prefix search
//!
//! Lists the children of a scope code at one level, filtered by a substring.
//! Named levels return `name socr` sorted by name; the `postalcode` level
//! returns postal indices from the first grain of the postal cascade that
//! has anything under the scope.

use crate::error::Result;
use crate::resolve;
use crate::schema::{self, Level, SearchLevel};
use crate::traits::LevelStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One search result line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRow {
    pub code: String,
    pub value: String,
}

/// Runs a search under `scope` at `level`.
///
/// `pattern` is trimmed and matched as a case-sensitive substring; an empty
/// pattern keeps everything.
pub fn search<S: LevelStore + ?Sized>(
    store: &S,
    scope: &str,
    level: SearchLevel,
    pattern: &str,
) -> Result<Vec<SearchRow>> {
    let pattern = pattern.trim();
    match level {
        SearchLevel::Named(level) => search_named(store, scope, level, pattern),
        SearchLevel::PostalCode => search_postal(store, scope, pattern),
    }
}

/// Digits of the scope that fix the parent of `level`. A region search
/// keeps the region digits, so a non-empty scope selects its own region.
fn scope_prefix(scope: &str, level: Level) -> &str {
    let width = level
        .parent()
        .map_or(Level::Region.boundary(), Level::boundary);
    schema::head(scope, width)
}

fn search_named<S: LevelStore + ?Sized>(
    store: &S,
    scope: &str,
    level: Level,
    pattern: &str,
) -> Result<Vec<SearchRow>> {
    let prefix = scope_prefix(scope, level);
    let rows = store.prefix_range(level.table(), prefix)?;
    let scanned = rows.len();

    let mut hits: Vec<(String, SearchRow)> = rows
        .into_iter()
        .filter(|r| schema::is_node_of(level, &r.code))
        .filter_map(|r| {
            let value = r.display();
            value.contains(pattern).then(|| {
                (
                    r.name,
                    SearchRow {
                        code: r.code,
                        value,
                    },
                )
            })
        })
        .collect();
    hits.sort_by(|a, b| a.0.cmp(&b.0));

    debug!(level = %level, prefix, scanned, hits = hits.len(), "named search");
    Ok(hits.into_iter().map(|(_, row)| row).collect())
}

fn search_postal<S: LevelStore + ?Sized>(store: &S, scope: &str, pattern: &str) -> Result<Vec<SearchRow>> {
    // The first grain with any record decides; an empty filter result there
    // does not fall through to coarser grains.
    let Some((step, rows)) = resolve::first_grain(store, scope)? else {
        return Ok(Vec::new());
    };
    let Some(prefix) = step.prefix(scope) else {
        return Ok(Vec::new());
    };

    let mut out: Vec<SearchRow> = Vec::new();
    for r in rows {
        if !r.index.contains(pattern) {
            continue;
        }
        if step.distinct && out.iter().any(|seen| seen.value == r.index) {
            continue;
        }
        out.push(SearchRow {
            code: prefix.to_owned(),
            value: r.index,
        });
    }
    debug!(grain = %step.grain, prefix, hits = out.len(), "postal search");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KladrDb;
    use crate::raw::{RecordRaw, TablesRaw};

    fn db() -> KladrDb {
        KladrDb::from_raw(TablesRaw {
            region: vec![
                RecordRaw::new("7700000000000", "Москва", "г"),
                RecordRaw::new("7700000000051", "Москва", "г"),
                RecordRaw::new("0200000000000", "Башкортостан", "Респ"),
            ],
            kladr: vec![
                RecordRaw::new("0200000000000", "Башкортостан", "Респ"),
                RecordRaw::new("0200200000000", "Альшеевский", "р-н"),
                RecordRaw::new("0200100000000", "Абзелиловский", "р-н"),
                RecordRaw::new("0200000500000", "Салават", "г"),
                RecordRaw::new("0200100000100", "Аскарово", "с").with_index("453620"),
            ],
            street: vec![
                RecordRaw::new("77000000000021200", "Люблинская", "ул").with_index("109382"),
            ],
            doma: vec![
                RecordRaw::new("7700000000002120001", "1", "ДОМ").with_index("109382"),
                RecordRaw::new("7700000000002120002", "2", "ДОМ").with_index("109382"),
                RecordRaw::new("7700000000002120003", "3", "ДОМ").with_index("109387"),
            ],
            ..Default::default()
        })
        .unwrap()
    }

    fn values(rows: &[SearchRow]) -> Vec<&str> {
        rows.iter().map(|r| r.value.as_str()).collect()
    }

    #[test]
    fn regions_sorted_and_current_only() {
        let rows = search(&db(), "", SearchLevel::Named(Level::Region), "").unwrap();
        assert_eq!(values(&rows), vec!["Башкортостан Респ", "Москва г"]);
    }

    #[test]
    fn districts_exclude_region_and_towns() {
        let rows = search(&db(), "02", SearchLevel::Named(Level::District), "").unwrap();
        assert_eq!(values(&rows), vec!["Абзелиловский р-н", "Альшеевский р-н"]);
        assert_eq!(rows[0].code, "0200100000000");

        let rows = search(&db(), "02", SearchLevel::Named(Level::District), "Аль").unwrap();
        assert_eq!(values(&rows), vec!["Альшеевский р-н"]);
    }

    #[test]
    fn pattern_is_case_sensitive() {
        let rows = search(&db(), "02000", SearchLevel::Named(Level::Town), "салават").unwrap();
        assert!(rows.is_empty());
        let rows = search(&db(), "02000", SearchLevel::Named(Level::Town), " Салават ").unwrap();
        assert_eq!(values(&rows), vec!["Салават г"]);
    }

    #[test]
    fn postal_rows_are_distinct_per_house_prefix() {
        let rows = search(&db(), "77000000000021200", SearchLevel::PostalCode, "").unwrap();
        assert_eq!(values(&rows), vec!["109382", "109387"]);
        assert!(rows.iter().all(|r| r.code == "77000000000021200"));
    }

    #[test]
    fn postal_pattern_does_not_fall_through() {
        let rows = search(&db(), "77000000000021200", SearchLevel::PostalCode, "453").unwrap();
        assert!(rows.is_empty());
    }
}
