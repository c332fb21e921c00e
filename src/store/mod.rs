//! Contact persistence.
//!
//! Handlers talk to a [`ContactStore`]; production uses [`PgContactStore`],
//! local runs and tests can use [`MemoryStore`]. Each method maps to exactly
//! one statement against the backing table.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgContactStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Contact, ContactPayload};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("null value in column \"{0}\" violates not-null constraint")]
    NotNull(&'static str),

    #[error("nextval: reached maximum value of sequence \"contacts_id_seq\"")]
    SequenceExhausted,
}

#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All contacts ordered by id ascending.
    async fn list(&self) -> Result<Vec<Contact>, StoreError>;

    async fn get(&self, id: i32) -> Result<Option<Contact>, StoreError>;

    async fn create(&self, contact: &ContactPayload) -> Result<Contact, StoreError>;

    /// Overwrites name, phone and email. `None` when no row has `id`.
    async fn update(&self, id: i32, contact: &ContactPayload)
        -> Result<Option<Contact>, StoreError>;

    /// `false` when no row has `id`.
    async fn delete(&self, id: i32) -> Result<bool, StoreError>;
}
