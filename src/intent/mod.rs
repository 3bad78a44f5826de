//! Intent layer: turn a free-text request into a typed parsing context
//!
//! - `router`: trigger-word classification
//! - `context`: per-intent contexts built from slots
//! - `slots`: regex slot extraction

pub mod context;
pub mod router;
pub mod slots;

pub use context::{ContextKind, DisplayContext, ParsingContext, TransferContext};
pub use router::{classify, detect};
pub use slots::Slot;
