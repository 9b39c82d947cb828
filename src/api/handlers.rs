//! HTTP request handlers for the rental API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::checkout::checkout;
use crate::error::RentalError;
use crate::models::Tool;

use super::request::CheckoutRequest;
use super::response::{ApiError, ApiErrorResponse, CheckoutResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/checkout", post(checkout_handler))
        .route("/tools", get(list_tools_handler))
        .with_state(state)
}

/// Handler for GET /tools: lists the catalog ordered by tool code.
async fn list_tools_handler(State(state): State<AppState>) -> Json<Vec<Tool>> {
    Json(state.catalog().tools().cloned().collect())
}

/// Handler for POST /checkout endpoint.
///
/// Accepts a checkout request and returns the priced rental agreement.
async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let checkout_id = Uuid::new_v4();
    info!(checkout_id = %checkout_id, "Processing checkout request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        checkout_id = %checkout_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        checkout_id = %checkout_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let tool = match state.catalog().get_tool(&request.tool_code) {
        Ok(tool) => tool,
        Err(err) => {
            warn!(
                checkout_id = %checkout_id,
                tool_code = %request.tool_code,
                "Tool not found"
            );
            return error_response(err);
        }
    };

    let start_time = Instant::now();
    match checkout(
        tool,
        request.rental_days,
        request.discount_percent,
        request.checkout_date,
    ) {
        Ok(agreement) => {
            let duration = start_time.elapsed();
            info!(
                checkout_id = %checkout_id,
                tool_code = %tool.code,
                charge_days = agreement.charge_days(),
                final_charge = %agreement.final_charge(),
                duration_us = duration.as_micros(),
                "Checkout completed successfully"
            );
            let body = CheckoutResponse {
                checkout_id,
                rendered: agreement.render(),
                agreement,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                checkout_id = %checkout_id,
                error = %err,
                "Checkout failed"
            );
            error_response(err)
        }
    }
}

fn error_response(err: RentalError) -> Response {
    ApiErrorResponse::from(err).into_response()
}
