//! Storage abstraction for Stockroom.
//!
//! The [`ProductStore`] trait defines all storage operations needed by the
//! query engine and the CRUD surface, enabling pluggable backends. The
//! engine itself never touches a store directly; it consumes the
//! point-in-time copy returned by [`ProductStore::snapshot`], which keeps
//! it decoupled from any storage or concurrency strategy.
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{NewProduct, Product, ProductPatch};

pub use memory::MemoryStore;

/// Abstract storage backend for Stockroom.
///
/// All operations are async (via `async-trait`); in-memory implementations
/// return immediately-ready futures.
///
/// # Operations
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`snapshot`](ProductStore::snapshot) | Point-in-time copy of the live collection |
/// | [`get`](ProductStore::get) | Retrieve one record by id |
/// | [`insert`](ProductStore::insert) | Create a record with the next id |
/// | [`update`](ProductStore::update) | Apply a partial update |
/// | [`delete`](ProductStore::delete) | Remove and return a record |
/// | [`len`](ProductStore::len) | Count of live records |
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// A stable, point-in-time copy of the collection in insertion order.
    ///
    /// The returned vector is owned by the caller; later store mutations
    /// never show through it.
    async fn snapshot(&self) -> Result<Vec<Product>>;

    /// Retrieve a single record by id.
    async fn get(&self, id: u64) -> Result<Option<Product>>;

    /// Insert a new record, assigning the next monotonic id and stamping
    /// `created_at == updated_at == now`.
    async fn insert(&self, draft: NewProduct) -> Result<Product>;

    /// Apply the present fields of `patch` to the record with `id`,
    /// bumping `updated_at`. Returns `None` when the id is unknown.
    async fn update(&self, id: u64, patch: ProductPatch) -> Result<Option<Product>>;

    /// Remove the record with `id`, returning it if it existed.
    async fn delete(&self, id: u64) -> Result<Option<Product>>;

    /// Number of live records.
    async fn len(&self) -> Result<usize>;
}
