//! Server module: the HTTP boundary in front of the services
//!
//! `ServerBuilder` wires a storage backend into the services and exposes them
//! through the REST router.

pub mod builder;
pub mod exposure;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use state::AppState;
