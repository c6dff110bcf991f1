use std::time::Duration;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::time::sleep;
use tracing::info;

use crate::{
    app_state::AppState,
    insight,
    models::{BusinessInsight, BusinessQuery},
};

// --- Payloads y Respuestas de la API ---

#[derive(Deserialize)]
pub struct BusinessDataPayload {
    name: String,
    location: String,
}

#[derive(Serialize)]
pub struct RegenerateResponse {
    headline: String,
}

// --- Router ---

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/business-data", post(business_data_handler))
        .route("/api/regenerate-headline", post(regenerate_headline_handler))
        .route("/api/insight", get(insight_handler))
        .route("/api/reset", post(reset_handler))
        .route("/api/shutdown", post(shutdown_handler))
        .with_state(app_state)
}

// --- Handlers ---

/// Analiza un negocio: valida el formulario, simula la latencia del
/// backend y genera un insight nuevo que pasa a ser el de la sesión.
#[axum::debug_handler]
async fn business_data_handler(
    State(state): State<AppState>,
    Json(payload): Json<BusinessDataPayload>,
) -> Result<Json<BusinessInsight>, (StatusCode, Json<serde_json::Value>)> {
    let query = validate_payload(&payload)?;

    // Latencia simulada: no hay backend real detrás.
    sleep(Duration::from_millis(state.config.submit_delay_ms)).await;

    let insight = insight::generate_insight(&query);
    info!("Insight generado para '{}' en '{}'.", insight.name, insight.location);

    *state.current_insight.lock().unwrap() = Some(insight.clone());
    Ok(Json(insight))
}

/// Regenera solo el titular del insight actual; rating y reseñas se
/// conservan tal cual se generaron la primera vez.
#[axum::debug_handler]
async fn regenerate_headline_handler(
    State(state): State<AppState>,
) -> Result<Json<RegenerateResponse>, (StatusCode, Json<serde_json::Value>)> {
    let (name, location, rating, reviews) = {
        let guard = state.current_insight.lock().unwrap();
        match guard.as_ref() {
            Some(insight) => (
                insight.name.clone(),
                insight.location.clone(),
                insight.rating,
                insight.reviews,
            ),
            None => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": "Primero debe analizar un negocio."})),
                ));
            }
        }
    };

    // Latencia simulada, más corta que la del análisis inicial.
    sleep(Duration::from_millis(state.config.regenerate_delay_ms)).await;

    let headline = insight::regenerate_headline(&name, &location, rating, reviews);
    info!("Titular regenerado para '{}'.", name);

    if let Some(insight) = state.current_insight.lock().unwrap().as_mut() {
        insight.headline = headline.clone();
    }

    Ok(Json(RegenerateResponse { headline }))
}

/// Devuelve el insight de la sesión actual, si existe.
#[axum::debug_handler]
async fn insight_handler(
    State(state): State<AppState>,
) -> Result<Json<BusinessInsight>, (StatusCode, Json<serde_json::Value>)> {
    match state.current_insight.lock().unwrap().clone() {
        Some(insight) => Ok(Json(insight)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "No hay ningún insight activo."})),
        )),
    }
}

/// Descarta el insight actual para empezar una consulta nueva.
#[axum::debug_handler]
async fn reset_handler(State(state): State<AppState>) -> impl IntoResponse {
    *state.current_insight.lock().unwrap() = None;
    (StatusCode::OK, Json(json!({ "message": "Sesión reiniciada." })))
}

#[axum::debug_handler]
async fn shutdown_handler(State(state): State<AppState>) -> impl IntoResponse {
    info!("Petición de apagado recibida.");
    if let Some(sender) = state.shutdown_sender.lock().unwrap().take() {
        let _ = sender.send(());
    }
    StatusCode::OK
}

// --- Validación ---

/// Comprueba que nombre y ubicación no queden vacíos tras recortar
/// espacios. Si alguno falla, devuelve un 400 con mensajes por campo y
/// el generador no llega a invocarse.
fn validate_payload(
    payload: &BusinessDataPayload,
) -> Result<BusinessQuery, (StatusCode, Json<serde_json::Value>)> {
    let name = payload.name.trim();
    let location = payload.location.trim();

    let mut errors = serde_json::Map::new();
    if name.is_empty() {
        errors.insert(
            "name".to_string(),
            json!("El nombre del negocio es obligatorio."),
        );
    }
    if location.is_empty() {
        errors.insert("location".to_string(), json!("La ubicación es obligatoria."));
    }

    if !errors.is_empty() {
        return Err((StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))));
    }

    Ok(BusinessQuery {
        name: name.to_string(),
        location: location.to_string(),
    })
}
