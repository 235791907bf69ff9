//! # Roster Architecture
//!
//! Roster is a **UI-agnostic library** for administering a list of user accounts kept in
//! a single JSON file. The `roster` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View-State (view/)                                         │
//! │  - Working copy, search query, sort direction               │
//! │  - Optimistic add/delete with snapshot rollback             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, bounded by a timeout          │
//! │  - Store failures become `OperationFailed`                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load whole collection, apply one change, save it back    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Async UserStore trait                                    │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! Library code takes Rust values and returns `Result`s. It never prints, never exits
//! the process and never assumes a terminal; diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`view`]: The list view-state machine and its projection
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `User`, `NewUser`, `Role`, `Status`
//! - [`validation`]: Candidate checks run before an add
//! - [`selector`]: Turning row numbers, ids and usernames into a selection
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod selector;
pub mod store;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod validation;
pub mod view;
