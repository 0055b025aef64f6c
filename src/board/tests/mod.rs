//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_unmake.rs` - Move/drop followed by undo restores the position
//! - `edge_cases.rs` - Scenarios and error paths of the mutating calls
//! - `proptest.rs` - Property-based tests over random operation sequences
