//! Application state — view routing and the session reducer.
//!
//! The current view is a plain sum type resolved by one function, so
//! transition legality (e.g. the dashboard needs a present analysis) is
//! enforced by construction. Authentication arrives as discrete events
//! consumed by a single reducer rather than ambient callbacks.

pub mod session;
pub mod view;

pub use session::{AppState, AuthEvent, Session};
pub use view::{AppView, resolve};
