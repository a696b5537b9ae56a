//! Partial document integration tests
//!
//! This module tests the tombstone-aware merge shared by the reducer, the
//! shadow overlay and the storage adapters, and the JSON wire form.

mod helpers;
