//! Board module tests.
//!
//! - `edge_cases.rs` - Unusual placements the decoder accepts or rejects
//! - `proptest.rs` - Property-based tests
