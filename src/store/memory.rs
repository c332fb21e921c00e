use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{ContactStore, StoreError};
use crate::models::{Contact, ContactPayload};

/// In-process contact table with the same id and NOT NULL rules as the
/// Postgres schema. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Table>,
}

#[derive(Debug, Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Contact>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn required(field: &Option<String>, column: &'static str) -> Result<String, StoreError> {
    field.clone().ok_or(StoreError::NotNull(column))
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        let table = self.inner.lock().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Contact>, StoreError> {
        let table = self.inner.lock().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, contact: &ContactPayload) -> Result<Contact, StoreError> {
        let name = required(&contact.name, "name")?;
        let phone = required(&contact.phone, "phone")?;

        let mut table = self.inner.lock().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or(StoreError::SequenceExhausted)?;
        table.last_id = id;
        let row = Contact {
            id,
            name,
            phone,
            email: contact.email.clone(),
        };
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        contact: &ContactPayload,
    ) -> Result<Option<Contact>, StoreError> {
        let mut table = self.inner.lock().await;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        // Postgres checks constraints only on rows the WHERE clause matched.
        let name = required(&contact.name, "name")?;
        let phone = required(&contact.phone, "phone")?;
        row.name = name;
        row.phone = phone;
        row.email = contact.email.clone();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let mut table = self.inner.lock().await;
        Ok(table.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store
            .create(&ContactPayload::new("Ada", "555-0100", None))
            .await
            .unwrap();
        assert!(store.delete(first.id).await.unwrap());

        let second = store
            .create(&ContactPayload::new("Grace", "555-0101", None))
            .await
            .unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn exhausted_ids_fail_without_inserting() {
        let store = MemoryStore::new();
        store.inner.lock().await.last_id = i32::MAX;

        let err = store
            .create(&ContactPayload::new("Ada", "555-0100", None))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::SequenceExhausted));
        assert!(store.list().await.unwrap().is_empty());
        assert_eq!(store.inner.lock().await.last_id, i32::MAX);
    }

    #[tokio::test]
    async fn missing_phone_violates_not_null() {
        let store = MemoryStore::new();
        let payload = ContactPayload {
            name: Some("Ada".into()),
            ..Default::default()
        };
        let err = store.create(&payload).await.unwrap_err();
        assert!(matches!(err, StoreError::NotNull("phone")));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_update_leaves_row_untouched() {
        let store = MemoryStore::new();
        let row = store
            .create(&ContactPayload::new("Ada", "555-0100", Some("ada@example.com".into())))
            .await
            .unwrap();

        let err = store
            .update(row.id, &ContactPayload::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotNull("name")));
        assert_eq!(store.get(row.id).await.unwrap(), Some(row));
    }
}
