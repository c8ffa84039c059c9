//! # Specs
//!
//! A *spec* knows how to read one remote page: which elements carry the data
//! and how to turn them into typed values. Specs are pure; fetching lives in
//! `core::net` and ordering of the run lives in `runner`.
//!
//! ## Conventions
//! - Input is the raw page body. Invalid UTF-8 is replaced, not rejected;
//!   `Error::Parse` is left for selectors that do not compile.
//! - Nothing found is an empty result, not an error.
//! - Elements that match but carry no data are skipped with a warning.
//! - Specs should be testable **offline** against inline HTML fixtures.
pub mod icons;
