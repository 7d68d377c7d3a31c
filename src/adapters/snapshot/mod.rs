//! Snapshot Adapter
//!
//! Loads a user's records and weather from a JSON file and exposes them
//! through the in-memory port implementations.

mod snapshot_file;

pub use snapshot_file::{Snapshot, SnapshotError, SnapshotFile};
