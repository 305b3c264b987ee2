//! API request handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::server::AppState;
use crate::convert::{convert_bytes, ConversionStatus};
use crate::schema::TableSchema;

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct VersionResponse {
    pub server: String,
    pub version: String,
    pub table: String,
}

/// Query string of `POST /api/v1/convert`
#[derive(Debug, Default, Deserialize)]
pub struct ConvertQuery {
    pub office_id: Option<String>,
    /// Built-in schema name; the server's configured schema when absent
    pub schema: Option<String>,
}

pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    }))
}

pub async fn version(State(state): State<Arc<AppState>>) -> Json<ApiResponse<VersionResponse>> {
    Json(ApiResponse::ok(VersionResponse {
        server: "mis-sql-server".to_string(),
        version: state.version.clone(),
        table: state.schema.table.clone(),
    }))
}

/// Convert an uploaded workbook (raw request body) into SQL statements
pub async fn convert(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConvertQuery>,
    body: Bytes,
) -> Json<ApiResponse<ConversionStatus>> {
    let schema = match query.schema.as_deref() {
        Some(name) => TableSchema::preset(name),
        None => Ok(state.schema.clone()),
    };

    let result = schema.and_then(|schema| {
        convert_bytes(body.to_vec(), &schema, query.office_id.as_deref())
    });

    if let Err(e) = &result {
        warn!(error = %e, bytes = body.len(), "conversion failed");
    }

    match ConversionStatus::from_result(result) {
        ConversionStatus::Failed { message } => Json(ApiResponse::err(message)),
        status => {
            if let ConversionStatus::Done { results } = &status {
                info!(statements = results.len(), bytes = body.len(), "conversion complete");
            }
            Json(ApiResponse::ok(status))
        }
    }
}
