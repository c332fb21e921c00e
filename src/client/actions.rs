//! User actions: one request each, with the outcome folded into the state.

use anyhow::anyhow;

use super::api::ContactsClient;
use super::state::{ClientState, Event};

pub async fn load(client: &ContactsClient, state: &mut ClientState) {
    state.apply(Event::FetchStarted);
    match client.list().await {
        Ok(items) => state.apply(Event::FetchSucceeded(items)),
        Err(err) => {
            tracing::warn!(error = %err, "loading contacts failed");
            state.apply(Event::FetchFailed);
        }
    }
}

/// Submit the current form.
pub async fn submit(client: &ContactsClient, state: &mut ClientState) {
    state.apply(Event::SubmitStarted);
    match client.create(&state.form.to_payload()).await {
        Ok(contact) => state.apply(Event::Created(contact)),
        Err(err) => {
            tracing::warn!(error = %err, "adding contact failed");
            state.apply(Event::CreateFailed);
        }
    }
}

pub async fn remove(client: &ContactsClient, state: &mut ClientState, id: i32) {
    match client.delete(id).await {
        Ok(()) => state.apply(Event::Deleted(id)),
        Err(err) => {
            tracing::warn!(id, error = %err, "deleting contact failed");
            state.apply(Event::DeleteFailed);
        }
    }
}

/// Turn the error a failed action left in the state into an `Err`, so the
/// command exits non-zero.
pub fn outcome(state: &ClientState) -> anyhow::Result<()> {
    match state.error {
        Some(message) => Err(anyhow!(message)),
        None => Ok(()),
    }
}
