//! Quiz web application: HTTP server library.
//!
//! `main.rs` wires configuration, telemetry and the database pool into
//! [`routes::app`]; integration tests build the same router over test doubles.

pub mod config;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;
pub mod telemetry;
pub mod views;
