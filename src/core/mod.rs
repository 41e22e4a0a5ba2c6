//! Scanning engine: usage extraction, declaration lookup, classification.
//!
//! The whole document is held in memory and scanned in a single pass; there
//! is no streaming and no state outlives one `classify` call.

pub mod classify;
pub mod declaration;
pub mod usage;

pub use classify::{ScanOutcome, classify};
pub use declaration::find_declaration;
pub use usage::{ResourceKind, Usage, usages};
