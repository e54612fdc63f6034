//! # persons-domain
//!
//! Pure domain model for the persons service.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`PersonId`](id::PersonId) and error conventions
//! - Define the **Person** record (identity, name, age)
//! - Define the **details** payload clients send on create and update
//! - Own the copy-on-update rule (name and age change, identity never does)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod person;
