//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `weather`, `auth`) so pages and
//! components can depend on small focused models. The structs are plain data
//! with pure transition methods; pages wrap them in `RwSignal`s provided via
//! context.

pub mod auth;
pub mod session;
pub mod weather;
