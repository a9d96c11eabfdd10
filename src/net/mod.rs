//! Networking modules for the console REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and defines the `AuthApi` seam used by the
//! session store; `types` defines the wire schema shared with the server.

pub mod api;
pub mod types;
