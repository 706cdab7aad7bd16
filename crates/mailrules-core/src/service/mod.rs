//! Network operations against the automation backend.
//!
//! Both operations are single-shot: one request, one reported outcome, no
//! retry. They are also independent; nothing stops a caller from firing the
//! same operation twice, in which case whichever response resolves last is
//! the one the caller ends up displaying. Callers wanting stronger
//! guarantees must add their own in-flight guard.

mod apply;
mod folders;

pub use apply::{ApplyResponse, apply_rules};
pub use folders::{Folder, fetch_folders};
