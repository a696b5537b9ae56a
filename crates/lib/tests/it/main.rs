/*! Integration tests for Folio.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - crdt: Tests for the partial document merge (Doc, Value, tombstones)
 * - block: Tests for the block model and block data merge
 * - store: Tests for the fragment log, reducer, shadow overlay and Document
 * - markdown: Tests for the inline markdown tokenizer, parser and emitters
 * - actions: Tests for the editing actions on Editor
 * - storage: Tests for the snapshot stores and Editor persistence
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "folio=info".parse() {
        filter = filter.add_directive(directive);
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

mod block;
mod crdt;
mod helpers;
mod storage;
mod store;
