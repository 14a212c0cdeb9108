//! Property-based tests for operator synthesis.
//!
//! Uses proptest to verify invariants across wide input spaces.
