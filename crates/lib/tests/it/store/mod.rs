//! Document store integration tests
//!
//! This module tests the fragment log, the incremental reducer, position
//! allocation through the ordered view, the shadow overlay and list grouping.

mod document_tests;
mod position_tests;
mod shadow_tests;
