//! Checklist catalog types.
//!
//! Controls are owned by an external checklist service; this crate only
//! reads them.

mod control;
mod gap;

pub use control::{Checklist, Control};
pub use gap::{Gap, Priority};
