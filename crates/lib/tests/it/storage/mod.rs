//! Persistence integration tests
//!
//! This module tests the snapshot stores and the Editor's load and
//! write-back cycle against them.

mod editor_tests;
pub mod helpers;
