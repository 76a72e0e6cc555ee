use std::net::SocketAddr;

use anyhow::Context;
use axum::{
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use shared::{
    error::{ApiError, ErrorCode},
    view::ActionResult,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

mod config;
mod controllers;
mod render;

use config::load_settings;
use controllers::HomeController;
use render::{render_view, ViewContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "server listening");
    axum::serve(listener, build_router()).await?;
    Ok(())
}

fn build_router() -> Router {
    Router::new()
        .route("/", get(home_index))
        .route("/Home", get(home_index))
        .route("/Home/Index", get(home_index))
        .route("/healthz", get(healthz))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn home_index() -> Response {
    let ctx = ViewContext {
        controller: HomeController::NAME,
        action: HomeController::INDEX,
    };
    respond(&ctx, HomeController.index())
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiError>) {
    debug!(%uri, "no route matched");
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(
            ErrorCode::NotFound,
            format!("no route for {}", uri.path()),
        )),
    )
}

/// Turns an action result into the HTTP response the host sends back.
fn respond(ctx: &ViewContext<'_>, result: ActionResult) -> Response {
    match result {
        ActionResult::View(view) => match render_view(ctx, &view) {
            Ok(body) => Html(body).into_response(),
            Err(error) => {
                error!(
                    controller = ctx.controller,
                    action = ctx.action,
                    %error,
                    "failed to render view"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiError::new(ErrorCode::Internal, error.to_string())),
                )
                    .into_response()
            }
        },
        ActionResult::Redirect { location } => Redirect::to(&location).into_response(),
        ActionResult::Content { content_type, body } => {
            ([(header::CONTENT_TYPE, content_type)], body).into_response()
        }
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
