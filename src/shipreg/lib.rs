//! # Shipreg Architecture
//!
//! Shipreg is a **UI-agnostic ship registry library** with a small CLI client on
//! top. It stores ship records, keeps their derived rating consistent, and answers
//! filtered, sorted, paginated queries.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders ships, maps errors to exits    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses external ids/dates/numbers (MalformedInput)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create / get / update / delete / list / count            │
//! │  - validation.rs, rating.rs, query/ do the actual work      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write Path
//!
//! Create and update run validation first, then the rating calculator, then a
//! single `DataStore::save`. A ship whose speed, usage or production date changed
//! is never saved with its old rating, and a rejected update saves nothing.
//!
//! ## Read Path
//!
//! `list` is filter → sort → page over a snapshot from `DataStore::find_all`;
//! `count` is the filter alone. See [`query`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values, returns `Result<CmdResult>`,
//! and never writes to stdout/stderr or exits the process. Diagnostics go
//! through `tracing`; installing a subscriber is the client's job.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`query`]: Filter, sort and pagination engines
//! - [`validation`]: Field rules
//! - [`rating`]: Rating formula
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Ship`, `ShipType`, `ShipInput`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod rating;
pub mod store;
pub mod validation;
