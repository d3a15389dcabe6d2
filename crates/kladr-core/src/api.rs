// crates/kladr-core/src/api.rs

//! # Query entry points
//!
//! `resolve` and `search` take a [`StoreSource`], acquire a store for the
//! duration of the call and drop it before returning, whether the call
//! succeeded or not.

use crate::error::Result;
use crate::expand::{self, Address};
use crate::resolve::{self, PostalMatch};
use crate::schema::{self, Level, SearchLevel};
use crate::search::{self, SearchRow};
use crate::traits::{LevelStore, StoreSource};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Postal index plus the names of all seven levels of a code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub postal: PostalMatch,
    pub address: Address,
}

impl Resolution {
    /// Resolves `code` against an already acquired store.
    pub fn compute<S: LevelStore + ?Sized>(store: &S, code: &str) -> Result<Self> {
        schema::validate(code)?;
        let postal = resolve::resolve_postal(store, code)?;
        let address = expand::expand(store, code)?;
        Ok(Self { postal, address })
    }

    /// The 16 output fields in their fixed order:
    /// `postalcode, postaltype`, then `name, name_socr` per level.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::with_capacity(2 + 2 * Level::ALL.len());
        out.push(("postalcode", self.postal.index.as_str()));
        out.push(("postaltype", self.postal.grain.as_str()));
        for (level, d) in self.address.iter() {
            out.push((level.field_name(), d.name.as_str()));
            out.push((level.socr_field_name(), d.socr.as_str()));
        }
        out
    }
}

/// Scoped hold on a store for one call.
struct Session<S> {
    store: S,
}

fn open_session<Src: StoreSource + ?Sized>(source: &Src) -> Result<Session<Src::Store<'_>>> {
    let store = source.acquire()?;
    debug!("store acquired");
    Ok(Session { store })
}

impl<S> Drop for Session<S> {
    fn drop(&mut self) {
        debug!("store released");
    }
}

/// Resolves `code` into its postal index and the names of every level.
///
/// Rejects codes shorter than five digits before touching the store.
///
/// # Examples
///
/// ```rust
/// use kladr_core::raw::{RecordRaw, TablesRaw};
/// use kladr_core::{resolve, Grain, KladrDb};
///
/// let db = KladrDb::from_raw(TablesRaw {
///     region: vec![RecordRaw::new("7700000000000", "Москва", "г")],
///     kladr: vec![RecordRaw::new("7700000001000", "Измайловская Пасека", "п").with_index("111123")],
///     ..Default::default()
/// })
/// .unwrap();
///
/// let r = resolve(&db, "7700000001000").unwrap();
/// assert_eq!(r.postal.grain, Grain::Point);
/// assert_eq!(r.address.point.name, "Измайловская Пасека");
/// ```
pub fn resolve<Src: StoreSource + ?Sized>(source: &Src, code: &str) -> Result<Resolution> {
    schema::validate(code)?;
    let session = open_session(source)?;
    Resolution::compute(&session.store, code)
}

/// Searches `level` (by name) under `scope` for `pattern`.
///
/// Unknown level names are a usage error.
pub fn search<Src: StoreSource + ?Sized>(
    source: &Src,
    scope: &str,
    level: &str,
    pattern: &str,
) -> Result<Vec<SearchRow>> {
    let level: SearchLevel = level.parse()?;
    schema::validate_scope(scope)?;
    let session = open_session(source)?;
    search::search(&session.store, scope, level, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KladrError;
    use crate::model::KladrDb;

    #[test]
    fn empty_resolution_still_has_sixteen_fields() {
        let r = Resolution::compute(&KladrDb::default(), "77000").unwrap();
        let fields = r.fields();
        assert_eq!(fields.len(), 16);
        assert!(fields.iter().all(|(_, v)| v.is_empty()));
        assert_eq!(fields[0].0, "postalcode");
        assert_eq!(fields[13].0, "doma_socr");
        assert_eq!(fields[15].0, "korp_socr");
    }

    #[test]
    fn unknown_level_is_usage_error() {
        let err = search(&KladrDb::default(), "77", "house", "").unwrap_err();
        assert!(matches!(err, KladrError::Usage(_)));
    }

    #[test]
    fn short_code_rejected_before_store() {
        let err = resolve(&KladrDb::default(), "7700").unwrap_err();
        assert!(matches!(err, KladrError::InputTooShort { .. }));
    }
}
