use sqlx::PgPool;

/// Table definition for the phonebook. Safe to run any number of times.
pub const CREATE_CONTACTS: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    phone TEXT NOT NULL,
    email TEXT
);
"#;

/// Create the `contacts` table if it does not exist yet.
pub async fn bootstrap(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_CONTACTS).execute(pool).await?;
    tracing::info!("contacts schema ready");
    Ok(())
}
