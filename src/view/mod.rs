//! Read-only snapshots for presentation layers.
//!
//! Engines never render. A view polls a snapshot after each intent (and on
//! each timer tick for the elapsed time) and draws from it. Snapshots
//! serialize to JSON with camelCase keys for web front ends.

mod snapshot;

pub use snapshot::{FifteenSnapshot, HanoiSnapshot};
