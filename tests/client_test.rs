#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests against an in-process stub backend.
//!
//! The stub records hits and captured headers so tests can assert not just
//! on results but on what did (or did not) go over the wire.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use url::Url;

use itda_client::error::{AuthError, ClientError, ValidationError};
use itda_client::{
    Attachment, Client, Config, ContentFormat, ContentQuery, MemoryStorage, RegistrationDraft,
};

#[derive(Default)]
struct Stub {
    list_hits: AtomicUsize,
    content_hits: AtomicUsize,
    fail_storage: AtomicBool,
    received_parts: Mutex<Vec<String>>,
    received_metadata: Mutex<Option<Value>>,
    received_user_id: Mutex<Option<String>>,
    received_auth: Mutex<Option<String>>,
}

async fn spawn_stub() -> (SocketAddr, Arc<Stub>) {
    let stub = Arc::new(Stub::default());

    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/contents", post(create_content))
        .route("/contents/user/{user_id}", get(list_user_contents))
        .route("/api/user/info", get(user_info))
        .route("/api/user/storage", get(user_storage))
        .route("/api/user/channels", get(channels))
        .route("/api/channels/subscribed/news", get(news))
        .route("/api/contents/custom", get(custom_contents))
        .route("/api/user/custom-subjects", get(custom_subjects))
        .with_state(Arc::clone(&stub));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, stub)
}

fn client_for(addr: SocketAddr) -> Client {
    let base = Url::parse(&format!("http://{addr}")).unwrap();
    Client::with_storage(Config::for_base_url(base), Box::new(MemoryStorage::new())).unwrap()
}

async fn signed_in_client(addr: SocketAddr) -> Client {
    let client = client_for(addr);
    client.login("teacher1", "secret").await.unwrap();
    client
}

// ---------------------------------------------------------------------
// Stub handlers
// ---------------------------------------------------------------------

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["password"] == "secret" {
        (
            StatusCode::OK,
            Json(json!({
                "token": "stub-token",
                "tokenType": "Bearer",
                "userId": 7,
                "username": body["username"],
                "email": "teacher1@example.com",
                "fullName": "김교사",
                "userType": "TEACHER"
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "비밀번호가 올바르지 않습니다."})),
        )
    }
}

async fn logout() -> StatusCode {
    // Backend logout is flaky on purpose; local sign-out must not care.
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn create_content(
    State(stub): State<Arc<Stub>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    stub.content_hits.fetch_add(1, Ordering::SeqCst);
    *stub.received_user_id.lock().unwrap() = headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    *stub.received_auth.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let data = field.bytes().await.unwrap();
        if name == "content" {
            *stub.received_metadata.lock().unwrap() =
                Some(serde_json::from_slice(&data).unwrap());
        }
        parts.push(name);
    }
    *stub.received_parts.lock().unwrap() = parts;

    (
        StatusCode::CREATED,
        Json(json!({"contentId": 99, "title": "분수의 이해"})),
    )
}

async fn list_user_contents(
    State(stub): State<Arc<Stub>>,
    Path(user_id): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    stub.list_hits.fetch_add(1, Ordering::SeqCst);

    if !headers.contains_key("authorization") {
        return (StatusCode::UNAUTHORIZED, Json(json!({"message": "unauthorized"})));
    }

    let page: u32 = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(0);

    // One page of data in total; anything past it is empty.
    if page >= 1 {
        return (
            StatusCode::OK,
            Json(json!({
                "content": [],
                "totalElements": 1,
                "totalPages": 1,
                "number": page,
                "size": 20,
                "first": false,
                "last": true
            })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "content": [{
                "contentId": 42,
                "title": "분수의 이해",
                "contentType": "school",
                "schoolLevel": "elementary",
                "subject": "math",
                "publicStatus": "public",
                "createdAt": "2025-03-18T10:00:00Z",
                "viewCount": 5,
                "thumbnailPath": null,
                "userId": user_id
            }],
            "totalElements": 1,
            "totalPages": 1,
            "number": 0,
            "size": 20,
            "first": true,
            "last": true
        })),
    )
}

async fn user_info() -> Json<Value> {
    Json(json!({
        "id": "7",
        "name": "김교사",
        "nickname": "수학쌤",
        "school": "서울초등학교",
        "location": "서울",
        "profileImage": "/default-profile.png",
        "messageCount": 3,
        "channelInviteCount": 1,
        "followerCount": 42,
        "followingCount": 17
    }))
}

async fn user_storage(State(stub): State<Arc<Stub>>) -> (StatusCode, Json<Value>) {
    if stub.fail_storage.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "storage unavailable"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "usedSpace": "1.2GB",
            "totalSpace": "10GB",
            "packageCount": 1,
            "contentsCount": 2,
            "questionCount": 0,
            "examCount": 1,
            "sharedCount": 0,
            "totalCount": 4
        })),
    )
}

async fn channels() -> Json<Value> {
    Json(json!([{
        "id": "channel1",
        "name": "진진구 수학교실",
        "description": "초등 수학 자료",
        "thumbnail": "/default-thumbnail.png",
        "subscriberCount": 1024
    }]))
}

fn stub_item(id: &str) -> Value {
    json!({
        "id": id,
        "title": "진진구의 기초 지식, 도형, 단위 연습",
        "thumbnail": "/placeholder-thumbnail.jpg",
        "channelName": "진진구 수학교실",
        "channelId": "channel1",
        "type": "package",
        "category": "#패키지",
        "school": "초등학교",
        "grade": "5학년",
        "semester": "2학기",
        "subject": "수학",
        "viewCount": 455,
        "likeCount": 11,
        "downloadCount": 2,
        "liked": false,
        "createdAt": "2025-05-18",
        "badges": ["패키지"]
    })
}

async fn news() -> Json<Value> {
    Json(json!([stub_item("101")]))
}

async fn custom_contents() -> Json<Value> {
    Json(json!([stub_item("1"), stub_item("2")]))
}

async fn custom_subjects() -> Json<Value> {
    Json(json!([{
        "schoolLevel": "초등학교",
        "grade": 5,
        "subjectId": "math",
        "subjectName": "수학"
    }]))
}

// ---------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------

#[tokio::test]
async fn login_persists_the_session() {
    let (addr, _stub) = spawn_stub().await;
    let client = client_for(addr);

    let user = client.login("teacher1", "secret").await.unwrap();
    assert_eq!(user.user_id, 7);
    assert!(client.is_authenticated());
    assert_eq!(client.current_user().unwrap().username, "teacher1");
}

#[tokio::test]
async fn rejected_login_surfaces_the_backend_message() {
    let (addr, _stub) = spawn_stub().await;
    let client = client_for(addr);

    let err = client.login("teacher1", "wrong").await.unwrap_err();
    match err {
        ClientError::Auth(AuthError::Rejected(message)) => {
            assert_eq!(message, "비밀번호가 올바르지 않습니다.");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn listing_without_a_session_never_reaches_the_network() {
    let (addr, stub) = spawn_stub().await;
    let client = client_for(addr);

    let err = client
        .list_user_contents(ContentQuery::for_user(7))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Auth(AuthError::NotSignedIn)));
    assert_eq!(stub.list_hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn listing_translates_backend_records() {
    let (addr, stub) = spawn_stub().await;
    let client = signed_in_client(addr).await;

    let mut page = client
        .list_user_contents(ContentQuery::for_user(7))
        .await
        .unwrap();
    assert_eq!(page.items().len(), 1);

    let item = &page.items()[0];
    assert_eq!(item.id, "42");
    assert_eq!(item.title, "분수의 이해");
    assert_eq!(item.category, "#교과");
    assert_eq!(item.school, "초등학교");
    assert_eq!(item.created_at, "2025-03-18");

    page.refresh().await.unwrap();
    assert_eq!(page.items().len(), 1);
    assert_eq!(stub.list_hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn pages_beyond_the_last_are_empty_not_errors() {
    let (addr, _stub) = spawn_stub().await;
    let client = signed_in_client(addr).await;

    let page = client
        .list_user_contents(ContentQuery::for_user(7).page(5))
        .await
        .unwrap();
    assert!(page.items().is_empty());
}

#[tokio::test]
async fn registration_submits_one_multipart_request() {
    let (addr, stub) = spawn_stub().await;
    let client = signed_in_client(addr).await;

    let draft = RegistrationDraft {
        title: "분수의 이해".to_string(),
        keywords: "분수,수학".to_string(),
        school_level: Some("elementary".to_string()),
        channel_id: Some(3),
        file: Some(Attachment::new("lesson.pdf", b"%PDF-1.4".to_vec())),
        thumbnail: Some(Attachment::new(
            "cover.png",
            vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
        )),
        ..RegistrationDraft::default()
    };

    let created = client.register_content(&draft).await.unwrap();
    assert_eq!(created.content_id, 99);

    assert_eq!(
        *stub.received_parts.lock().unwrap(),
        vec!["content".to_string(), "file".to_string(), "thumbnail".to_string()]
    );

    let metadata = stub.received_metadata.lock().unwrap().clone().unwrap();
    assert_eq!(metadata["title"], "분수의 이해");
    assert_eq!(metadata["schoolLevel"], "elementary");
    assert_eq!(metadata["grade"], Value::Null);
    assert_eq!(metadata["channelId"], 3);
    assert_eq!(metadata["contentUrl"], Value::Null);

    assert_eq!(stub.received_user_id.lock().unwrap().as_deref(), Some("7"));
    assert_eq!(
        stub.received_auth.lock().unwrap().as_deref(),
        Some("Bearer stub-token")
    );
}

#[tokio::test]
async fn invalid_draft_is_blocked_before_the_network() {
    let (addr, stub) = spawn_stub().await;
    let client = signed_in_client(addr).await;

    let draft = RegistrationDraft {
        title: "분수의 이해".to_string(),
        keywords: "분수".to_string(),
        content_format: ContentFormat::Url,
        content_url: "  ".to_string(),
        ..RegistrationDraft::default()
    };

    let err = client.register_content(&draft).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Validation(ValidationError::EmptyUrl)
    ));
    assert_eq!(stub.content_hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn logout_clears_local_state_despite_backend_failure() {
    let (addr, _stub) = spawn_stub().await;
    let client = signed_in_client(addr).await;
    assert!(client.is_authenticated());

    // The stub's logout endpoint always answers 500.
    client.logout().await;
    assert!(!client.is_authenticated());
    assert!(client.current_user().is_none());
}

#[tokio::test]
async fn home_load_succeeds_when_every_fetch_succeeds() {
    let (addr, _stub) = spawn_stub().await;
    let client = client_for(addr);

    let home = client.load_home(None, None).await.unwrap();
    assert_eq!(home.user.name, "김교사");
    assert_eq!(home.storage.total_count, 4);
    assert_eq!(home.channels.len(), 1);
    assert_eq!(home.news.len(), 1);
    assert_eq!(home.contents.len(), 2);
    assert_eq!(home.subjects.len(), 1);
}

#[tokio::test]
async fn home_load_fails_together_when_one_fetch_fails() {
    let (addr, stub) = spawn_stub().await;
    let client = client_for(addr);

    stub.fail_storage.store(true, Ordering::SeqCst);
    let err = client.load_home(None, None).await.unwrap_err();
    match err {
        ClientError::Transport(transport) => {
            assert_eq!(transport.status, Some(500));
            assert_eq!(transport.message, "storage unavailable");
        }
        other => panic!("expected transport failure, got {other:?}"),
    }
}
