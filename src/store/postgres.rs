use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use super::{ContactStore, StoreError};
use crate::config::DatabaseArgs;
use crate::models::{Contact, ContactPayload};
use crate::schema;

#[derive(Clone)]
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build the pool from connection settings. Connections are opened lazily
    /// on first use.
    pub fn connect_lazy(db: &DatabaseArgs) -> Self {
        let options = PgConnectOptions::new()
            .host(&db.host)
            .port(db.port)
            .username(&db.user)
            .password(&db.password)
            .database(&db.name);

        let pool = PgPoolOptions::new()
            .max_connections(db.max_connections())
            .connect_lazy_with(options);

        Self::new(pool)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn bootstrap(&self) -> Result<(), StoreError> {
        schema::bootstrap(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        let rows = sqlx::query_as::<_, Contact>(
            "SELECT id, name, phone, email FROM contacts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Contact>, StoreError> {
        let row = sqlx::query_as::<_, Contact>(
            "SELECT id, name, phone, email FROM contacts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, contact: &ContactPayload) -> Result<Contact, StoreError> {
        let row = sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (name, phone, email) VALUES ($1, $2, $3) \
             RETURNING id, name, phone, email",
        )
        .bind(&contact.name)
        .bind(&contact.phone)
        .bind(&contact.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        contact: &ContactPayload,
    ) -> Result<Option<Contact>, StoreError> {
        let row = sqlx::query_as::<_, Contact>(
            "UPDATE contacts SET name = $1, phone = $2, email = $3 WHERE id = $4 \
             RETURNING id, name, phone, email",
        )
        .bind(&contact.name)
        .bind(&contact.phone)
        .bind(&contact.email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
