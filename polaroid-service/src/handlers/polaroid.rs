use crate::dtos::{
    identifier_to_string, shape_record, PolaroidListParams, PolaroidListResponse,
    SharePolaroidRequest, SharePolaroidResponse,
};
use crate::models::polaroid_share::is_image_data_url;
use crate::models::PolaroidShare;
use crate::services::metrics::{SHARES_CREATED, SHARES_REJECTED};
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use metrics::counter;
use mongodb::bson::doc;
use service_core::error::AppError;

pub async fn share_polaroid(
    State(state): State<AppState>,
    Json(req): Json<SharePolaroidRequest>,
) -> Result<Json<SharePolaroidResponse>, AppError> {
    if let Err(e) = validate_share(&req) {
        counter!(SHARES_REJECTED).increment(1);
        tracing::info!(error = %e, "Rejected polaroid share");
        return Err(e);
    }

    let share = PolaroidShare::from(req);
    let id = state
        .store
        .create_document(PolaroidShare::COLLECTION, &share)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to store polaroid share");
            AppError::from(e)
        })?;
    let id = identifier_to_string(&id);

    counter!(SHARES_CREATED).increment(1);
    tracing::info!(share_id = %id, "Polaroid share created");

    Ok(Json(SharePolaroidResponse::ok(id)))
}

pub async fn list_public_polaroids(
    State(state): State<AppState>,
    Query(params): Query<PolaroidListParams>,
) -> Result<Json<PolaroidListResponse>, AppError> {
    let limit = params.effective_limit();

    let records = state
        .store
        .get_documents(PolaroidShare::COLLECTION, doc! {}, Some(limit))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to list polaroid shares");
            AppError::from(e)
        })?;

    let items = records.into_iter().map(shape_record).collect();

    Ok(Json(PolaroidListResponse { items }))
}

fn validate_share(req: &SharePolaroidRequest) -> Result<(), AppError> {
    if !is_image_data_url(&req.image_data) {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Invalid image data URL"
        )));
    }
    if req.instagram_url.trim().is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Instagram URL is required"
        )));
    }
    Ok(())
}
