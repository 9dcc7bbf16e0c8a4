//! # Stockroom Core
//!
//! Transport-free logic for Stockroom: the product data model, the
//! deterministic query engine (filter → sort → paginate), and the store
//! abstraction with an in-memory implementation.
//!
//! This crate contains no tokio, axum, filesystem I/O, or other
//! native-only dependencies. The HTTP layer, configuration, and CLI live
//! in the `stockroom` application crate.

pub mod models;
pub mod query;
pub mod store;
