//! Web UI for blogsmith.
//!
//! One server-rendered page; every button posts the full form.
//!
//! # Endpoints
//!
//! - `GET /` - Render the page
//! - `POST /titles` - Suggest titles for the submitted topic
//! - `POST /keywords` - Append the submitted keyword to the session list
//! - `POST /generate` - Draft a post from title, keywords and word count
//! - `GET /health` - Health check

pub mod page;
pub mod session;

use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use blogsmith_application::{
    GatewayError, GeneratePostInput, GeneratePostUseCase, GenerationError, SuggestTitlesUseCase,
};
use blogsmith_domain::WordCount;
use page::{Page, PostView, Section};
use serde::{Deserialize, Serialize};
use session::{SessionId, SessionStore, session_cookie, session_from_headers};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

// ============================================================================
// State & request types
// ============================================================================

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    suggest_titles: Arc<SuggestTitlesUseCase>,
    generate_post: Arc<GeneratePostUseCase>,
    sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(suggest_titles: SuggestTitlesUseCase, generate_post: GeneratePostUseCase) -> Self {
        Self {
            suggest_titles: Arc::new(suggest_titles),
            generate_post: Arc::new(generate_post),
            sessions: Arc::new(SessionStore::new()),
        }
    }

    /// Replace the default session store (e.g. to change its idle timeout).
    pub fn with_sessions(mut self, sessions: SessionStore) -> Self {
        self.sessions = Arc::new(sessions);
        self
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

/// Widget values posted by every button.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageForm {
    pub topic: String,
    pub title: String,
    pub word_count: Option<u32>,
    pub keyword: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session = state.sessions.resolve(session_from_headers(&headers));
    let page = Page {
        keywords: state.sessions.keywords(session),
        ..Page::default()
    };
    respond(StatusCode::OK, session, &page)
}

async fn suggest_titles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<PageForm>,
) -> Response {
    let session = state.sessions.resolve(session_from_headers(&headers));
    let page = page_from_form(&state, session, form);

    let result = state.suggest_titles.execute(&page.topic).await;
    let (page, status) = match result {
        Ok(titles) => (
            Page {
                titles: Some(titles),
                ..page
            },
            StatusCode::OK,
        ),
        Err(e) => {
            warn!(session = %session, "Title suggestion failed: {}", e);
            let status = error_status(&e);
            (page.with_error(Section::Titles, e.to_string()), status)
        }
    };
    respond(status, session, &page)
}

async fn add_keyword(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<PageForm>,
) -> Response {
    let session = state.sessions.resolve(session_from_headers(&headers));

    if state.sessions.add_keyword(session, &form.keyword) {
        info!(session = %session, "Keyword added: {}", form.keyword);
    }

    let page = Page {
        keyword: String::new(),
        ..page_from_form(&state, session, form)
    };
    respond(StatusCode::OK, session, &page)
}

async fn generate_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<PageForm>,
) -> Response {
    let session = state.sessions.resolve(session_from_headers(&headers));
    let requested = form.word_count.map(WordCount::new).transpose();
    let page = page_from_form(&state, session, form);

    let word_count = match requested {
        Ok(word_count) => word_count.unwrap_or_default(),
        Err(e) => {
            let page = page.with_error(Section::Blog, e.to_string());
            return respond(StatusCode::UNPROCESSABLE_ENTITY, session, &page);
        }
    };

    let input = GeneratePostInput::new(
        page.title.clone(),
        page.keywords.keywords().to_vec(),
        word_count,
    );
    let (page, status) = match state.generate_post.execute(input).await {
        Ok(body) => {
            let post = PostView {
                title: page.title.clone(),
                body,
            };
            (
                Page {
                    post: Some(post),
                    ..page
                },
                StatusCode::OK,
            )
        }
        Err(e) => {
            warn!(session = %session, "Post generation failed: {}", e);
            let status = error_status(&e);
            (page.with_error(Section::Blog, e.to_string()), status)
        }
    };
    respond(status, session, &page)
}

// ============================================================================
// Helpers
// ============================================================================

/// Build the echo page for `form`.
///
/// An off-step word count falls back to the default here; only
/// `POST /generate` rejects it.
fn page_from_form(state: &AppState, session: SessionId, form: PageForm) -> Page {
    Page {
        topic: form.topic,
        title: form.title,
        word_count: form
            .word_count
            .and_then(|value| WordCount::new(value).ok())
            .unwrap_or_default(),
        keyword: form.keyword,
        keywords: state.sessions.keywords(session),
        ..Page::default()
    }
}

fn error_status(error: &GenerationError) -> StatusCode {
    match error {
        GenerationError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        GenerationError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        GenerationError::ModelUnavailable(GatewayError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
        GenerationError::ModelUnavailable(_) | GenerationError::EmptyGeneration => {
            StatusCode::BAD_GATEWAY
        }
    }
}

fn respond(status: StatusCode, session: SessionId, page: &Page) -> Response {
    (
        status,
        [(SET_COOKIE, session_cookie(session))],
        Html(page.render()),
    )
        .into_response()
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/titles", post(suggest_titles))
        .route("/keywords", post(add_keyword))
        .route("/generate", post(generate_post))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
