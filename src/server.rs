//! Adaptateur HTTP mince autour du moteur (feature `server`).
//!
//! Un seul point d'entrée : `POST /generate_shifts`, requête/réponse JSON,
//! sans streaming. 400 sur entrée malformée, 500 sur échec inattendu.

use crate::engine::{EngineError, ShiftEngine, ThreadRngSource};
use crate::model::ShiftRequests;
use anyhow::Context;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

pub fn router(engine: Arc<ShiftEngine>) -> Router {
    Router::new()
        .route(
            "/",
            get(|| async {
                "shiftgrid server\n\nPOST /generate_shifts - génère le planning du mois configuré\n"
            }),
        )
        .route("/generate_shifts", post(generate_shifts))
        .with_state(engine)
}

async fn generate_shifts(
    State(engine): State<Arc<ShiftEngine>>,
    payload: Result<Json<ShiftRequests>, JsonRejection>,
) -> Response {
    let requests = match payload {
        Ok(Json(requests)) => requests,
        Err(rejection) => {
            return (StatusCode::BAD_REQUEST, rejection.body_text()).into_response();
        }
    };

    let mut rng = ThreadRngSource;
    match engine.generate(&requests, &mut rng) {
        Ok(generation) => {
            for shortfall in &generation.report.shortfalls {
                warn!(day = %shortfall.day, kind = ?shortfall.kind, "generation shortfall");
            }
            (StatusCode::OK, Json(generation.schedule)).into_response()
        }
        Err(
            err @ (EngineError::UnknownEmployee(_)
            | EngineError::InvalidDayKey(_)
            | EngineError::DayOutOfMonth(_)),
        ) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
        Err(err) => {
            error!("generation failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
        }
    }
}

/// Démarre le serveur et sert les requêtes jusqu'à l'arrêt du process.
pub async fn serve(engine: ShiftEngine, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(Arc::new(engine));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "shiftgrid server listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
