//! kladr-cli
//! =========
//!
//! Command-line interface for the `kladr-core` address classifier.
//!
//! This crate primarily provides a binary (`kladr`). The library target
//! exists so that docs.rs renders an overview page.
//!
//! Basic usage:
//!
//! ```text
//! kladr --help
//! kladr info 7700000001000
//! kladr query 77000000000021200 postalcode 387
//! kladr --db kladr.bin.gz query "" region Моск
//! ```
//!
//! For programmatic access use the [`kladr-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
