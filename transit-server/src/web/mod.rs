//! JSON-over-HTTP surface for the transit adapter.
//!
//! One endpoint per query. Fail-soft queries always answer `200` with a
//! possibly empty list; only the nearby lookup can answer with an error.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
