//! # Stockroom
//!
//! **A product catalog HTTP service with a deterministic query engine.**
//!
//! Stockroom exposes a collection of product records over a JSON API with
//! retrieval, creation, update, and deletion, plus a query layer
//! supporting free-text search, field filters, numeric range filters,
//! sorting, and pagination.
//!
//! ## Data Flow
//!
//! 1. The **CLI** (`stockd`) loads configuration and optionally seeds the
//!    store from a JSON catalog file ([`seed`]).
//! 2. The **HTTP server** ([`server`]) parses raw query-string parameters
//!    into a typed bundle ([`params`]) and validates request bodies
//!    ([`validate`]).
//! 3. The **query engine** (`stockroom_core::query`) runs the
//!    filter → sort → paginate pipeline over a store snapshot and returns
//!    the result envelope the server serializes.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`params`] | Query-string coercion into engine parameters |
//! | [`validate`] | Request-body validation for create/update payloads |
//! | [`seed`] | Catalog seeding from JSON files and the built-in samples |
//! | [`server`] | Axum HTTP server with CORS and the JSON error contract |
//!
//! ## Configuration
//!
//! Stockroom is configured via a TOML file (default:
//! `config/stockd.toml`). See [`config`] for all available options.

pub mod config;
pub mod params;
pub mod seed;
pub mod server;
pub mod validate;

pub use stockroom_core::models::{NewProduct, Product, ProductPatch};
pub use stockroom_core::query::{execute, QueryParams, QueryResult};
pub use stockroom_core::store::{MemoryStore, ProductStore};
