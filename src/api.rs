//! HTTP API hosting authoring sessions.
//!
//! Each session owns one [`PreviewController`]. Mutating handlers apply the
//! change, answer immediately and leave any translation fetch running in the
//! background; clients poll the session to see it land.

use crate::config::Config;
use crate::controller::{
    ControllerError, PendingTranslation, PreviewController, TaskField, ViewMode,
};
use crate::i18n::{Locale, MetricsReport, Task, TranslationMetrics};
use crate::security;
use crate::translation::{OpenAiTranslator, Translator};
use crate::view::{self, View};
use anyhow::Context;
use async_trait::async_trait;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request, State,
    },
    http::{header, request::Parts, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use uuid::Uuid;

type Session = Arc<Mutex<PreviewController>>;

pub struct AppState {
    pub config: Config,
    pub translator: Arc<dyn Translator>,
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl AppState {
    pub fn new(config: Config, translator: Arc<dyn Translator>) -> Arc<Self> {
        Arc::new(Self {
            config,
            translator,
            sessions: RwLock::new(HashMap::new()),
        })
    }

    async fn session(&self, id: Uuid) -> Result<Session, ApiError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(ApiError::SessionNotFound(id))
    }

    /// Run a pending translation in the background and apply it when it lands.
    fn spawn_translation(&self, session: Session, pending: Option<PendingTranslation>) {
        let Some(pending) = pending else {
            return;
        };
        let translator = Arc::clone(&self.translator);
        tokio::spawn(async move {
            let result = translator.translate(&pending.source, pending.locale).await;
            let completion = session.lock().await.complete(&pending, result);
            debug!(
                "Translation ticket {} for {} finished: {:?}",
                pending.ticket,
                pending.locale.code(),
                completion
            );
        });
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session {0} not found")]
    SessionNotFound(Uuid),

    #[error("{0}")]
    BadRequest(String),

    #[error("Missing or invalid API key")]
    Unauthorized,
}

impl From<ControllerError> for ApiError {
    fn from(e: ControllerError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

// ==================== Extractors ====================

/// `Json` body whose rejection is reported as an [`ApiError`].
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// `Path` parameters whose rejection is reported as an [`ApiError`].
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

// ==================== Wire Types ====================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub is_canonical: bool,
}

/// Authoring state plus translation status of one session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub company_name: String,
    pub role: String,
    pub tasks: Vec<Task>,
    pub welcome_note: String,
    pub selected_locale: Locale,
    pub view_mode: ViewMode,
    pub is_translating: bool,
    pub translation_error: bool,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub state: SessionState,
    pub view: View,
}

impl SessionResponse {
    fn new(id: Uuid, controller: &PreviewController) -> Self {
        Self {
            id,
            state: SessionState {
                company_name: controller.company_name().to_string(),
                role: controller.role().to_string(),
                tasks: controller.tasks().to_vec(),
                welcome_note: controller.welcome_note().to_string(),
                selected_locale: controller.selected_locale(),
                view_mode: controller.view_mode(),
                is_translating: controller.is_translating(),
                translation_error: controller.translation_error(),
            },
            view: view::render(controller),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormUpdate {
    pub company_name: Option<String>,
    pub role: Option<String>,
    pub welcome_note: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocaleSelection {
    pub locale: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModeSelection {
    pub view_mode: ViewMode,
}

// ==================== Router ====================

pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/locales", get(list_locales))
        .route("/metrics", get(metrics))
        .route("/sessions", post(create_session))
        .route(
            "/sessions/:id",
            get(get_session).patch(update_form).delete(delete_session),
        )
        .route("/sessions/:id/tasks/:index", put(update_task))
        .route("/sessions/:id/locale", put(select_locale))
        .route("/sessions/:id/view-mode", put(set_view_mode))
        .route("/sessions/:id/export", get(export_pack))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            require_api_key,
        ));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let translator =
        OpenAiTranslator::from_config(&config).context("Failed to build translation client")?;
    let port = config.port;
    let state = AppState::new(config, Arc::new(translator));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(expected) = state.config.api_key.as_deref() {
        if !security::is_authorized(request.headers(), expected) {
            return Err(ApiError::Unauthorized);
        }
    }
    Ok(next.run(request).await)
}

// ==================== Handlers ====================

async fn health() -> &'static str {
    "ok"
}

async fn list_locales() -> Json<Vec<LocaleInfo>> {
    let locales = Locale::supported()
        .into_iter()
        .map(|locale| LocaleInfo {
            code: locale.code(),
            name: locale.name(),
            native_name: locale.native_name(),
            is_canonical: locale.is_canonical(),
        })
        .collect();
    Json(locales)
}

async fn metrics() -> Json<MetricsReport> {
    Json(TranslationMetrics::global().report())
}

async fn create_session(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SessionResponse>) {
    let id = Uuid::new_v4();
    let controller = PreviewController::new();
    let response = SessionResponse::new(id, &controller);

    state
        .sessions
        .write()
        .await
        .insert(id, Arc::new(Mutex::new(controller)));
    info!("Created session {}", id);

    (StatusCode::CREATED, Json(response))
}

async fn get_session(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state.session(id).await?;
    let controller = session.lock().await;
    Ok(Json(SessionResponse::new(id, &controller)))
}

async fn delete_session(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .sessions
        .write()
        .await
        .remove(&id)
        .ok_or(ApiError::SessionNotFound(id))?;
    info!("Deleted session {}", id);
    Ok(StatusCode::NO_CONTENT)
}

async fn update_form(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(update): ApiJson<FormUpdate>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state.session(id).await?;
    let mut controller = session.lock().await;

    if let Some(company_name) = update.company_name {
        controller.set_company_name(company_name);
    }
    if let Some(role) = update.role {
        controller.set_role(role);
    }
    let pending = update
        .welcome_note
        .and_then(|note| controller.set_welcome_note(note));

    let response = SessionResponse::new(id, &controller);
    drop(controller);
    state.spawn_translation(session, pending);
    Ok(Json(response))
}

async fn update_task(
    State(state): State<Arc<AppState>>,
    ApiPath((id, index)): ApiPath<(Uuid, usize)>,
    ApiJson(update): ApiJson<TaskUpdate>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state.session(id).await?;
    let mut controller = session.lock().await;

    if let Some(title) = update.title {
        controller.update_task(index, TaskField::Title, title)?;
    }
    if let Some(description) = update.description {
        controller.update_task(index, TaskField::Description, description)?;
    }

    Ok(Json(SessionResponse::new(id, &controller)))
}

async fn select_locale(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(selection): ApiJson<LocaleSelection>,
) -> Result<Json<SessionResponse>, ApiError> {
    let locale =
        Locale::from_code(&selection.locale).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let session = state.session(id).await?;
    let mut controller = session.lock().await;

    let pending = controller.select_locale(locale);

    let response = SessionResponse::new(id, &controller);
    drop(controller);
    state.spawn_translation(session, pending);
    Ok(Json(response))
}

async fn set_view_mode(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(selection): ApiJson<ViewModeSelection>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state.session(id).await?;
    let mut controller = session.lock().await;
    controller.set_view_mode(selection.view_mode);
    Ok(Json(SessionResponse::new(id, &controller)))
}

async fn export_pack(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, ApiError> {
    let session = state.session(id).await?;
    let document = session.lock().await.export_pack();
    info!("Exported {} for session {}", document.file_name, id);

    Ok((
        [
            (header::CONTENT_TYPE, document.content_type.to_string()),
            (header::CONTENT_DISPOSITION, document.content_disposition()),
        ],
        document.body,
    )
        .into_response())
}
