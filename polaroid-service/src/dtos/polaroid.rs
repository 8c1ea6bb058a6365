use crate::models::PolaroidShare;
use crate::services::database::DEFAULT_LIMIT;
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};

/// Upper bound on a single listing page.
pub const MAX_LIST_LIMIT: i64 = 1000;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SharePolaroidRequest {
    pub image_data: String,
    pub instagram_url: String,
}

impl From<SharePolaroidRequest> for PolaroidShare {
    fn from(req: SharePolaroidRequest) -> Self {
        PolaroidShare::new(req.image_data, req.instagram_url)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SharePolaroidResponse {
    pub id: String,
    pub status: String,
}

impl SharePolaroidResponse {
    pub fn ok(id: String) -> Self {
        Self {
            id,
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PolaroidListParams {
    pub limit: Option<i64>,
}

impl PolaroidListParams {
    /// Requested page size: 100 when absent, capped at 1000, never negative.
    pub fn effective_limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_LIST_LIMIT)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PolaroidListResponse {
    pub items: Vec<serde_json::Value>,
}

/// Printable form of a store identifier: hex for ObjectIds, the raw value
/// for strings, display form otherwise.
pub fn identifier_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Replaces the store's `_id` with a string `id`. Records without `_id`
/// are returned as they are.
pub fn shape_record(mut record: Document) -> serde_json::Value {
    if let Some(id) = record.remove("_id") {
        record.insert("id", identifier_to_string(&id));
    }
    Bson::Document(record).into_relaxed_extjson()
}
