//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts against published perft tables
//! - `edge_cases.rs` - Special positions, pins, mates and stalemates
//! - `castling.rs` - Castling generation and rook relocation
//! - `executor.rs` - Move executor behaviour (captures, promotion)
//! - `proptest.rs` - Property-based tests

mod edge_cases;
