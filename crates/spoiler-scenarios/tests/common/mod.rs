//! In-process fake of the Story Spoiler API.
//!
//! Mirrors the status codes and messages of the public deployment closely
//! enough for the built-in suite to pass against it.

#![allow(dead_code, reason = "Each test binary uses a different subset")]

use axum::extract::{Path, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse as _, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router, serve};
use serde_json::{Value, json};
use spoiler_core::SpoilerConfig;
use std::collections::BTreeMap;
use std::net::TcpListener as StdTcpListener;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::spawn;
use tracing_subscriber::fmt;
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt as _, registry, util::SubscriberInitExt as _,
};
use uuid::Uuid;

/// Token handed out by the fake login endpoint
pub const FAKE_TOKEN: &str = "fake-jwt-token";
/// Account the fake accepts
pub const FAKE_USERNAME: &str = "kalinexam";
/// Password the fake accepts
pub const FAKE_PASSWORD: &str = "kalinexam";

/// Stored stories keyed by id
type StoryStore = Arc<Mutex<BTreeMap<String, Value>>>;

/// Knobs for misbehaving servers
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeOptions {
    /// Answer the login call with 200 but no `accessToken`
    pub omit_token: bool,
    /// Answer a valid create with 201 and a plain-text body
    pub plain_text_create: bool,
}

/// Handler state
#[derive(Clone)]
struct FakeState {
    /// Stories currently stored
    stories: StoryStore,
    /// Behavior switches
    options: FakeOptions,
}

/// A running fake server
pub struct FakeStoryServer {
    /// `http://127.0.0.1:<port>`
    pub base_url: String,
    /// Shared with the handlers
    stories: StoryStore,
}

impl FakeStoryServer {
    /// Config pointing at this server with the accepted credentials
    pub fn config(&self) -> SpoilerConfig {
        SpoilerConfig::for_base_url(self.base_url.clone())
    }

    /// Number of stories currently stored
    pub fn story_count(&self) -> usize {
        self.stories.lock().expect("story store poisoned").len()
    }
}

/// Initialize tracing for tests
pub fn init_tracing() {
    drop(
        registry()
            .with(fmt::layer().with_test_writer().with_target(false))
            .with(EnvFilter::from_default_env())
            .try_init(),
    );
}

/// A loopback base URL nothing is listening on
pub fn closed_port_url() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("Failed to bind loopback port");
    let port = listener
        .local_addr()
        .expect("Failed to read local address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Start a fake server on an ephemeral loopback port
pub async fn spawn_story_server(options: FakeOptions) -> FakeStoryServer {
    let stories = StoryStore::default();
    let state = FakeState {
        stories: Arc::clone(&stories),
        options,
    };

    let router = Router::new()
        .route("/api/User/Authentication", post(login))
        .route("/api/Story/Create", post(create_story))
        .route("/api/Story/Edit/{id}", put(edit_story))
        .route("/api/Story/All", get(list_stories))
        .route("/api/Story/Delete/{id}", delete(delete_story))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake server");
    let address = listener.local_addr().expect("Failed to read local address");

    spawn(async move {
        if let Err(err) = serve(listener, router).await {
            tracing::error!("Fake story server stopped: {err}");
        }
    });

    FakeStoryServer {
        base_url: format!("http://{address}"),
        stories,
    }
}

/// JSON response helper
fn reply(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

/// Whether the request carries the fake bearer token
fn authorized(headers: &HeaderMap) -> bool {
    let expected = format!("Bearer {FAKE_TOKEN}");
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected)
}

/// Whether a required story field is missing or blank
fn blank(story: &Value, field: &str) -> bool {
    story
        .get(field)
        .and_then(Value::as_str)
        .is_none_or(str::is_empty)
}

async fn login(State(state): State<FakeState>, Json(body): Json<Value>) -> Response {
    let username = body.get("username").and_then(Value::as_str);
    let password = body.get("password").and_then(Value::as_str);

    if username != Some(FAKE_USERNAME) || password != Some(FAKE_PASSWORD) {
        return reply(
            StatusCode::UNAUTHORIZED,
            json!({ "msg": "Invalid username or password!" }),
        );
    }

    if state.options.omit_token {
        return reply(StatusCode::OK, json!({ "username": FAKE_USERNAME }));
    }

    reply(
        StatusCode::OK,
        json!({ "username": FAKE_USERNAME, "accessToken": FAKE_TOKEN }),
    )
}

async fn create_story(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Json(story): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if blank(&story, "title") || blank(&story, "description") {
        return reply(
            StatusCode::BAD_REQUEST,
            json!({ "msg": "Title and description are required!" }),
        );
    }

    let story_id = Uuid::new_v4().to_string();
    state
        .stories
        .lock()
        .expect("story store poisoned")
        .insert(story_id.clone(), story);

    if state.options.plain_text_create {
        return (StatusCode::CREATED, "Successfully created!").into_response();
    }

    reply(
        StatusCode::CREATED,
        json!({ "msg": "Successfully created!", "storyId": story_id }),
    )
}

async fn edit_story(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Path(story_id): Path<String>,
    Json(story): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let mut stories = state.stories.lock().expect("story store poisoned");
    let Some(stored) = stories.get_mut(&story_id) else {
        return reply(StatusCode::NOT_FOUND, json!({ "msg": "No spoilers..." }));
    };
    *stored = story;
    drop(stories);

    reply(
        StatusCode::OK,
        json!({ "msg": "Successfully edited", "storyId": story_id }),
    )
}

async fn list_stories(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let listed: Vec<Value> = state
        .stories
        .lock()
        .expect("story store poisoned")
        .iter()
        .map(|(story_id, story)| {
            let mut entry = story.clone();
            if let Some(fields) = entry.as_object_mut() {
                fields.insert("id".to_owned(), Value::String(story_id.clone()));
            }
            entry
        })
        .collect();

    reply(StatusCode::OK, Value::Array(listed))
}

async fn delete_story(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Path(story_id): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let removed = state
        .stories
        .lock()
        .expect("story store poisoned")
        .remove(&story_id);

    if removed.is_some() {
        reply(StatusCode::OK, json!({ "msg": "Deleted successfully!" }))
    } else {
        reply(
            StatusCode::BAD_REQUEST,
            json!({ "msg": "Unable to delete this story spoiler!" }),
        )
    }
}
