pub mod snapshot_builder;

pub use snapshot_builder::{BuildStats, Snapshot, SnapshotBuilder};
