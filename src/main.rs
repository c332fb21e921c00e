use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phonebook::client::{actions, ClientState, ContactsClient, Event, FormField};
use phonebook::config::{AddArgs, Cli, ClientArgs, Command, DatabaseArgs, DeleteArgs, ServeArgs, StoreKind};
use phonebook::{server, AppState, MemoryStore, PgContactStore};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phonebook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match Cli::parse().command {
        Command::Serve(args) => serve(args).await,
        Command::Migrate(db) => migrate(db).await,
        Command::List(args) => list(args).await,
        Command::Add(args) => add(args).await,
        Command::Delete(args) => delete(args).await,
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let state = match args.store {
        StoreKind::Postgres => {
            let store = PgContactStore::connect_lazy(&args.database);
            if args.bootstrap {
                store.bootstrap().await.context("schema bootstrap failed")?;
            }
            tracing::info!(
                host = %args.database.host,
                database = %args.database.name,
                max_connections = args.database.max_connections(),
                "using postgres store"
            );
            AppState::new(store)
        }
        StoreKind::Memory => {
            tracing::info!("using in-memory store");
            AppState::new(MemoryStore::new())
        }
    };

    let addr = args.listen_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    server::serve(listener, state).await?;
    Ok(())
}

async fn migrate(db: DatabaseArgs) -> anyhow::Result<()> {
    let store = PgContactStore::connect_lazy(&db);
    store.bootstrap().await.context("migration failed")?;
    tracing::info!("migration complete");
    Ok(())
}

async fn list(args: ClientArgs) -> anyhow::Result<()> {
    let client = ContactsClient::new(&args.url);
    let mut state = ClientState::new();
    actions::load(&client, &mut state).await;
    print!("{}", state.render());
    actions::outcome(&state)
}

async fn add(args: AddArgs) -> anyhow::Result<()> {
    let client = ContactsClient::new(&args.client.url);
    let mut state = ClientState::new();
    actions::load(&client, &mut state).await;
    state.apply(Event::FormEdited(FormField::Name, args.name));
    state.apply(Event::FormEdited(FormField::Phone, args.phone));
    state.apply(Event::FormEdited(FormField::Email, args.email));
    actions::submit(&client, &mut state).await;
    print!("{}", state.render());
    actions::outcome(&state)
}

async fn delete(args: DeleteArgs) -> anyhow::Result<()> {
    let client = ContactsClient::new(&args.client.url);
    let mut state = ClientState::new();
    actions::load(&client, &mut state).await;
    actions::remove(&client, &mut state, args.id).await;
    print!("{}", state.render());
    actions::outcome(&state)
}
