use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::{Contact, ContactPayload};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("contact not found")]
    NotFound,

    #[error("service returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Thin wrapper over the phonebook REST API.
#[derive(Debug, Clone)]
pub struct ContactsClient {
    client: Client,
    base_url: String,
}

impl ContactsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<Value, ClientError> {
        let resp = self.client.get(self.url("/health")).send().await?;
        json_body(resp).await
    }

    pub async fn list(&self) -> Result<Vec<Contact>, ClientError> {
        let resp = self.client.get(self.url("/contacts")).send().await?;
        json_body(resp).await
    }

    pub async fn get(&self, id: i32) -> Result<Contact, ClientError> {
        let resp = self
            .client
            .get(self.url(&format!("/contacts/{id}")))
            .send()
            .await?;
        json_body(resp).await.map_err(missing_row)
    }

    pub async fn create(&self, contact: &ContactPayload) -> Result<Contact, ClientError> {
        let resp = self
            .client
            .post(self.url("/contacts"))
            .json(contact)
            .send()
            .await?;
        json_body(resp).await
    }

    pub async fn update(&self, id: i32, contact: &ContactPayload) -> Result<Contact, ClientError> {
        let resp = self
            .client
            .put(self.url(&format!("/contacts/{id}")))
            .json(contact)
            .send()
            .await?;
        json_body(resp).await.map_err(missing_row)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ClientError> {
        let resp = self
            .client
            .delete(self.url(&format!("/contacts/{id}")))
            .send()
            .await?;
        check_status(resp).await.map_err(missing_row)?;
        Ok(())
    }
}

async fn check_status(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Status { status, body });
    }
    Ok(resp)
}

/// For `/contacts/{id}` routes a 404 means the row is absent.
fn missing_row(err: ClientError) -> ClientError {
    match err {
        ClientError::Status { status, .. } if status == StatusCode::NOT_FOUND => {
            ClientError::NotFound
        }
        other => other,
    }
}

async fn json_body<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let resp = check_status(resp).await?;
    Ok(resp.json().await?)
}
