//! HTTP server implementation.
//!
//! A single path carries the whole application: `GET /` renders the list
//! or, when `action` and `id` query parameters are present, performs a
//! delete or toggle; `POST /` adds a task. Every mutating request ends in
//! a redirect back to the list so a page reload re-issues a harmless read.

use axum::{
    Router,
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use super::templates;
use crate::db::Database;
use crate::error::AppResult;

/// Server state shared across handlers.
#[derive(Clone)]
pub struct AppServer {
    /// Reference to the task database.
    db: Arc<Database>,
}

impl AppServer {
    /// Create a new server instance.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Get the database reference.
    pub fn db(&self) -> &Arc<Database> {
        &self.db
    }
}

/// Query parameters for the list endpoint.
///
/// `id` stays a string here; non-numeric input coerces to 0, which matches
/// no row and makes the operation a safe no-op.
#[derive(Debug, serde::Deserialize)]
struct ListParams {
    action: Option<String>,
    id: Option<String>,
}

/// Form data for the add-task endpoint.
#[derive(Debug, serde::Deserialize)]
struct AddTaskForm {
    task: Option<String>,
    add_task: Option<String>,
}

/// GET handler: dispatches delete/toggle actions, otherwise renders the list.
async fn index(
    State(state): State<AppServer>,
    Query(params): Query<ListParams>,
) -> AppResult<Response> {
    if let (Some(action), Some(id)) = (params.action.as_deref(), params.id.as_deref()) {
        // Non-numeric ids coerce to 0, which matches nothing.
        let id: i64 = id.parse().unwrap_or(0);

        match action {
            "delete" => {
                let deleted = state.db().delete_task(id)?;
                debug!(id, deleted, "delete task");
                return Ok(Redirect::to("/").into_response());
            }
            "toggle" => {
                // A missing row reads as None; treat it as false and flip.
                // The update then matches no row, so nothing is created.
                let current = state.db().get_completed(id)?.unwrap_or(false);
                state.db().set_completed(id, !current)?;
                debug!(id, completed = !current, "toggle task");
                return Ok(Redirect::to("/").into_response());
            }
            _ => {
                // Unknown actions fall through to the list view.
            }
        }
    }

    let tasks = state.db().list_tasks()?;
    Ok(Html(templates::render_index(&tasks)).into_response())
}

/// POST handler: inserts a task when the trimmed text is non-empty.
///
/// Blank submissions are silently skipped; either way the response is a
/// redirect so a refresh cannot resubmit the form.
async fn add_task(
    State(state): State<AppServer>,
    Form(form): Form<AddTaskForm>,
) -> AppResult<Redirect> {
    if form.add_task.is_some() {
        let description = form.task.as_deref().unwrap_or("").trim();
        if !description.is_empty() {
            let task = state.db().create_task(description)?;
            debug!(id = task.id, "created task");
        }
    }

    Ok(Redirect::to("/"))
}

/// Health check response.
#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// API root - returns available endpoints.
async fn api_root() -> impl IntoResponse {
    Json(serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
        }
    }))
}

/// Build the router with all routes.
pub fn build_router(state: AppServer) -> Router {
    Router::new()
        .route("/", get(index).post(add_task))
        .route("/api", get(api_root))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve until ctrl-c.
pub async fn start_server(db: Arc<Database>, bind: &str, port: u16) -> anyhow::Result<()> {
    let state = AppServer::new(db);
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    info!("todo server listening on http://{}", bound_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await?;

    Ok(())
}
