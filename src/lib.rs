//! Migration Wizard - guided EKS version migration backed by a mock engine
//!
//! The library holds the wizard state machine, the static catalog, the
//! REST API and its client, and the terminal front end. `main.rs` wires
//! them into the CLI.

pub mod api;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod rest;
pub mod types;
pub mod ui;
pub mod wizard;
