//! Phonebook: a contacts REST service over a single Postgres table, plus the
//! client that lists, adds and deletes contacts through it.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod server;
pub mod store;

pub use models::{Contact, ContactPayload};
pub use server::{router, AppState};
pub use store::{ContactStore, MemoryStore, PgContactStore};
