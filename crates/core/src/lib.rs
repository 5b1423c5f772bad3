//! Pure domain logic for the feedback relay.
//!
//! Everything in this crate is synchronous and I/O-free: shared type
//! aliases, the category presentation table, and HTML escaping for
//! user-submitted text. The async crates build on top of it.

pub mod category;
pub mod html;
pub mod types;
