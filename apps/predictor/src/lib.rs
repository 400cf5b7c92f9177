//! Client-side career prediction workflow.
//!
//! Option loading, the profile form, submission to the prediction service,
//! the session-scoped result handoff and the results view all live here so
//! they can be driven and tested without a browser or a running backend.

pub mod api_client;
pub mod config;
pub mod errors;
pub mod form;
pub mod models;
pub mod results;
pub mod routes;
pub mod state;
pub mod store;
