//! # persons-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API under `/persons` (list, get, create, update, delete)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses; a missing record becomes
//!   `404 Not Found` with an empty body
//! - Expose a `/health` liveness probe
//!
//! ## Dependency rule
//! Depends on `persons-app` (for port traits and services) and `persons-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
