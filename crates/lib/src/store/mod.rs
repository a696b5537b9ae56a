//! The fragment log, its reducer, the shadow overlay and the document that
//! ties them together.
//!
//! Data flows one way:
//!
//! ```text
//! edits ──push──▶ FragmentLog ──reduce──▶ committed snapshot ─┐
//!                     ▲                                       ├─apply─▶ ordered view
//! previews ─merge─▶ ShadowOverlay ────────────────────────────┘
//!                     └──flush──▶ (one fragment)
//! ```
//!
//! The reducer only folds the unseen suffix of the log, so long editing
//! sessions stay linear.

mod document;
mod fragments;
mod reducer;
mod registry;
mod shadow;

pub use document::Document;
pub use fragments::FragmentLog;
pub use reducer::{SnapshotReducer, ordered_view};
pub use registry::{Entry, ListGroup, group_blocks};
pub use shadow::ShadowOverlay;
