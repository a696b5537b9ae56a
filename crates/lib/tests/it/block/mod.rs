//! Block model integration tests
//!
//! This module tests block identity, the wire form of blocks and the
//! type-directed block data merge.

mod merge_tests;
