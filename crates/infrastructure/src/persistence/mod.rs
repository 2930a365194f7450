//! Local persistence
//!
//! Redb-backed key-value storage for durable dashboard state.

mod redb_state;

pub use redb_state::RedbStateStore;
