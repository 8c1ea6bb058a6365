use crate::dtos::diagnostics::{presence, truncate_error};
use crate::dtos::DiagnosticsResponse;
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Collections listed by the diagnostic endpoint at most.
const MAX_COLLECTIONS: usize = 10;

/// Operational snapshot of the backend and its store. Store failures are
/// reported in the body; the endpoint itself always answers 200.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse::default();

    if state.store.is_available() {
        response.connection_status = "Connected".to_string();
        match state.store.list_collection_names(MAX_COLLECTIONS).await {
            Ok(collections) => {
                response.collections = collections;
                response.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Diagnostic collection listing failed");
                response.database =
                    format!("⚠️  Connected but Error: {}", truncate_error(&e.to_string()));
            }
        }
    }

    response.database_url = presence(state.config.store.url.is_some());
    response.database_name = presence(state.config.store.database.is_some());

    Json(response)
}
