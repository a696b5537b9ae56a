//! Sort keys for blocks.
//!
//! Blocks are ordered by a real-valued position. A new block takes a
//! position computed from its neighbours in the ordered view, so inserting
//! between two blocks never renumbers anything else.
//!
//! Repeated insertion into the same gap halves it each time and eventually
//! runs out of precision; there is no renumbering fallback.

use crate::constants::POSITION_HEADROOM;

/// Computes a position between two optional neighbouring positions.
///
/// - Both present: the rounded midpoint. Callers keep `before < after` by
///   always allocating from adjacent blocks of the ordered view.
/// - Only `before`: `before` plus a large headroom (append after the tail).
/// - Only `after`: half of `after` (prepend before the head).
/// - Neither: the headroom itself (first block of an empty document).
///
/// ```
/// # use folio::position::position_between;
/// assert_eq!(position_between(Some(1000.0), Some(3000.0)), 2000.0);
/// assert_eq!(position_between(Some(1000.0), None), 1000.0 + 1e9);
/// assert_eq!(position_between(None, Some(1000.0)), 500.0);
/// assert_eq!(position_between(None, None), 1e9);
/// ```
pub fn position_between(before: Option<f64>, after: Option<f64>) -> f64 {
    match (before, after) {
        (Some(before), Some(after)) => ((before + after) / 2.0).round(),
        (Some(before), None) => before + POSITION_HEADROOM,
        (None, Some(after)) => after / 2.0,
        (None, None) => POSITION_HEADROOM,
    }
}
