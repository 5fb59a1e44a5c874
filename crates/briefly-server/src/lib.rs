//! Briefly HTTP server — JSON endpoints over the analysis core.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
