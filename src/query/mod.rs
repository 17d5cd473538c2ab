//! Read-only queries over a catalog snapshot.

/// Case-insensitive substring search.
pub mod search;
/// Read counts and genre histogram.
pub mod stats;
