//! Client side of the phonebook: a typed HTTP client for the `/api` routes
//! and the UI state it feeds.

pub mod actions;
mod api;
mod state;

pub use api::{ClientError, ContactsClient};
pub use state::{ClientState, ContactForm, Event, FormField, ADD_FAILED, DELETE_FAILED, LOAD_FAILED};
