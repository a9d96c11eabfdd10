//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `settings`) so pages depend on small
//! focused models. `gate` holds the navigation policy over the session.

pub mod gate;
pub mod session;
pub mod settings;
