//! Session gate
//!
//! - [`store`] - key-value stores holding the flag
//! - [`context`] - [`SessionContext`] and the storage-sync task
//! - [`gate`] - route classification, [`resolve`] and the middleware

pub mod context;
pub mod gate;
pub mod store;

pub use context::{SESSION_KEY, SessionContext, spawn_storage_sync};
pub use gate::{GateDecision, Route, RouteKind, require_session, resolve};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
