use folio::crdt::{Doc, TombstonePolicy};

/// Fold fragments from an empty snapshot, one at a time
pub fn fold(fragments: &[Doc]) -> Doc {
    let mut snapshot = Doc::new();
    snapshot.apply_all(fragments);
    snapshot
}

/// Fold fragments in chunks, each chunk applied on top of the previous result
pub fn fold_in_chunks(fragments: &[Doc], chunk: usize) -> Doc {
    let mut snapshot = Doc::new();
    for slice in fragments.chunks(chunk) {
        snapshot.apply_all(slice);
    }
    snapshot
}

/// Compose fragments with tombstones kept, the way the shadow overlay does
pub fn compose(fragments: &[Doc]) -> Doc {
    let mut overlay = Doc::new();
    for fragment in fragments {
        overlay.merge(fragment, TombstonePolicy::Retain);
    }
    overlay
}
