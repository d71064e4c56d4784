//! Dinefy Dashboard - admin dashboard service for restaurant call automation
//!
//! # Overview
//!
//! Restaurant owners sign in, review AI phone-call activity, tune the
//! assistant's settings, connect POS platforms and manage billing. All
//! data is mock data; every "remote" call is a simulated delay.
//!
//! - **Session gate** (`session`): one boolean flag in a key-value store,
//!   route classification and redirects
//! - **Forms** (`forms`): field rules, live re-validation, submit validation
//! - **Metrics** (`metrics`): call aggregates, satisfaction buckets, minute
//!   pricing, password strength
//! - **Views** (`views`): the mounted screen and the layout shell
//! - **HTTP API** (`api`): axum routes over the above
//!
//! # Layout
//!
//! ```text
//! dinefy-dashboard/src/
//! ├── core/          # config, state, server, startup errors
//! ├── session/       # flag store, gate, storage sync
//! ├── forms/         # validators per form
//! ├── metrics/       # pure computations
//! ├── views/         # per-screen state machines
//! ├── client/        # simulated account calls, credential check
//! ├── api/           # HTTP routes and handlers
//! ├── utils/         # logger, time
//! └── fixtures.rs    # static datasets
//! ```

pub mod api;
pub mod client;
pub mod core;
pub mod fixtures;
pub mod forms;
pub mod metrics;
pub mod session;
pub mod utils;
pub mod views;

// Re-export public types
pub use client::{AccountClient, SimulatedClient};
pub use core::{Config, Server, ServerError, ServerState};
pub use session::{FileStore, KeyValueStore, MemoryStore, SessionContext};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - fields are recorded with their Display impl
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = %$value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    ____  _            ____
   / __ \(_)___  ___  / __/_  __
  / / / / / __ \/ _ \/ /_/ / / /
 / /_/ / / / / /  __/ __/ /_/ /
/_____/_/_/ /_/\___/_/  \__, /
                       /____/
    "#
    );
}
