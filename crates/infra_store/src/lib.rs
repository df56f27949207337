//! Flat-file claim store
//!
//! Replaces a database with a single in-memory collection that is mirrored
//! to a JSON state file after every write. Consistency is deliberately
//! demo-grade: last-writer-wins, no transactions, no corruption recovery
//! beyond falling back to the seed data.

pub mod reference;
pub mod seed;
pub mod store;

pub use reference::{DamageTypeReference, ReferenceDatabase, ValuationSource};
pub use seed::seed_claims;
pub use store::{ClaimStore, StoreError};
