use reqwest::StatusCode;
use tokio::net::TcpListener;

use phonebook::client::{
    actions, ClientError, ClientState, ContactsClient, Event, FormField, ADD_FAILED,
    DELETE_FAILED, LOAD_FAILED,
};
use phonebook::{router, AppState, ContactPayload, MemoryStore};

async fn spawn_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(AppState::new(MemoryStore::new()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_server() -> ContactsClient {
    ContactsClient::new(&format!("{}/", spawn_base_url().await))
}

#[tokio::test]
async fn crud_round_trip() {
    let client = spawn_server().await;
    assert_eq!(client.health().await.unwrap()["status"], "ok");

    let created = client
        .create(&ContactPayload::new("Ada", "555-0100", Some("ada@example.com".into())))
        .await
        .unwrap();
    assert_eq!(client.get(created.id).await.unwrap(), created);

    let updated = client
        .update(created.id, &ContactPayload::new("Ada", "555-0199", None))
        .await
        .unwrap();
    assert_eq!(updated.phone, "555-0199");
    assert_eq!(updated.email, None);

    client.delete(created.id).await.unwrap();
    assert!(matches!(client.get(created.id).await, Err(ClientError::NotFound)));
    assert!(matches!(client.delete(created.id).await, Err(ClientError::NotFound)));
}

#[tokio::test]
async fn rejected_create_surfaces_status() {
    let client = spawn_server().await;
    let err = client.create(&ContactPayload::default()).await.unwrap_err();
    match err {
        ClientError::Status { status, .. } => assert_eq!(status.as_u16(), 500),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn ui_actions_patch_local_list() {
    let client = spawn_server().await;
    client
        .create(&ContactPayload::new("Ada", "555-0100", None))
        .await
        .unwrap();

    let mut state = ClientState::new();
    actions::load(&client, &mut state).await;
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);

    state.apply(Event::FormEdited(FormField::Name, "Grace".into()));
    state.apply(Event::FormEdited(FormField::Phone, "555-0101".into()));
    actions::submit(&client, &mut state).await;
    assert_eq!(state.items.len(), 2);
    assert!(state.form.name.is_empty());
    assert_eq!(state.error, None);

    actions::remove(&client, &mut state, 1).await;
    assert_eq!(state.items.iter().map(|c| c.id).collect::<Vec<_>>(), [2]);
    assert!(actions::outcome(&state).is_ok());

    actions::remove(&client, &mut state, 1).await;
    assert_eq!(state.error, Some(DELETE_FAILED));
    assert_eq!(client.list().await.unwrap().len(), 1);

    let err = actions::outcome(&state).unwrap_err();
    assert_eq!(err.to_string(), DELETE_FAILED);
}

#[tokio::test]
async fn load_failure_sets_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ContactsClient::new(&format!("http://{addr}"));
    let mut state = ClientState::new();
    actions::load(&client, &mut state).await;
    assert!(!state.loading);
    assert!(state.render().contains("Failed to load contacts"));
}

#[tokio::test]
async fn unreachable_service_fails_the_command() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ContactsClient::new(&format!("http://{addr}"));
    let mut state = ClientState::new();
    actions::load(&client, &mut state).await;
    assert_eq!(actions::outcome(&state).unwrap_err().to_string(), LOAD_FAILED);

    state.apply(Event::FormEdited(FormField::Name, "A".into()));
    state.apply(Event::FormEdited(FormField::Phone, "1".into()));
    actions::submit(&client, &mut state).await;
    assert_eq!(actions::outcome(&state).unwrap_err().to_string(), ADD_FAILED);
}

#[tokio::test]
async fn wrong_base_path_is_not_a_missing_contact() {
    let client = ContactsClient::new(&format!("{}/nope", spawn_base_url().await));

    match client.list().await.unwrap_err() {
        ClientError::Status { status, .. } => assert_eq!(status, StatusCode::NOT_FOUND),
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(
        client.health().await,
        Err(ClientError::Status { status, .. }) if status == StatusCode::NOT_FOUND
    ));
}
