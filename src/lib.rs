//! CareerPilot — career-guidance service core.

pub mod analysis;
pub mod app;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod profile;
pub mod routes;
pub mod store;
