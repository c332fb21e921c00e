//! Command line and environment configuration.
//!
//! Every setting can be given as a flag or through the environment variable
//! named next to it. A `.env` file in the working directory is loaded before
//! parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "phonebook", version, about = "Phonebook REST service and client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP service
    Serve(ServeArgs),
    /// Create the contacts table if it does not exist
    Migrate(DatabaseArgs),
    /// Print all contacts
    List(ClientArgs),
    /// Add a contact
    Add(AddArgs),
    /// Delete a contact by id
    Delete(DeleteArgs),
}

#[derive(Debug, Clone, Args)]
pub struct DatabaseArgs {
    #[arg(id = "db-host", long = "db-host", env = "DB_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "db-user", long = "db-user", env = "DB_USER", default_value = "postgres")]
    pub user: String,

    #[arg(id = "db-password", long = "db-password", env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    #[arg(id = "db-name", long = "db-name", env = "DB_NAME", default_value = "phonebook")]
    pub name: String,

    #[arg(id = "db-port", long = "db-port", env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,

    /// Pool size; defaults to twice the number of CPUs
    #[arg(id = "db-max-connections", long = "db-max-connections", env = "DB_MAX_CONNECTIONS")]
    pub max_connections: Option<u32>,
}

impl DatabaseArgs {
    pub fn max_connections(&self) -> u32 {
        self.max_connections
            .unwrap_or_else(|| (num_cpus::get() as u32).saturating_mul(2))
            .max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,

    #[arg(long, value_enum, env = "PHONEBOOK_STORE", default_value_t = StoreKind::Postgres)]
    pub store: StoreKind,

    /// Create the contacts table before accepting requests
    #[arg(long)]
    pub bootstrap: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl ServeArgs {
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[derive(Debug, Clone, Args)]
pub struct ClientArgs {
    #[arg(long, env = "PHONEBOOK_URL", default_value = "http://localhost:5000")]
    pub url: String,
}

#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub client: ClientArgs,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub email: String,
}

#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub client: ClientArgs,

    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["phonebook", "serve", "--store", "memory"]).unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.store, StoreKind::Memory);
        assert!(!args.bootstrap);
        assert!(args.database.max_connections() >= 1);
    }

    #[test]
    fn explicit_pool_size_wins() {
        let cli = Cli::try_parse_from([
            "phonebook",
            "migrate",
            "--db-host",
            "db.internal",
            "--db-max-connections",
            "3",
        ])
        .unwrap();
        let Command::Migrate(db) = cli.command else {
            panic!("expected migrate");
        };
        assert_eq!(db.host, "db.internal");
        assert_eq!(db.max_connections(), 3);
    }

    #[test]
    fn delete_takes_positional_id() {
        let cli = Cli::try_parse_from(["phonebook", "delete", "7"]).unwrap();
        let Command::Delete(args) = cli.command else {
            panic!("expected delete");
        };
        assert_eq!(args.id, 7);
    }
}
