//! # persons-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PersonRepository` — list, look up, create, update and delete persons
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PersonService` — the five operations exposed over HTTP
//! - Own the presence checks: id-addressed operations fail with
//!   `NotFound` before the store is touched for a missing record
//!
//! ## Dependency rule
//! Depends on `persons-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
