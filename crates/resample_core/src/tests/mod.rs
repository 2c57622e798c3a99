//! Integration tests for the resampling engine
//!
//! Tests are organized by topic:
//! - `extraction` - Pairing prices into transactions
//! - `sampling` - Permutation and with-replacement invariants, determinism, ordering
//! - `end_to_end` - Full experiment runs with the reference parameters

mod extraction;
