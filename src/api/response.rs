//! Response types for the rental API.
//!
//! This module defines the checkout response body and the mapping from
//! [`RentalError`] to HTTP error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RentalError;
use crate::models::RentalAgreement;

/// Successful response body for the `/checkout` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    /// Correlation ID of the request that produced this agreement.
    pub checkout_id: Uuid,
    /// The structured agreement.
    pub agreement: RentalAgreement,
    /// The agreement as printable text.
    pub rendered: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RentalError> for ApiErrorResponse {
    fn from(error: RentalError) -> Self {
        let message = error.to_string();
        match error {
            RentalError::InvalidRentalDays { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RENTAL_DAYS",
                    message,
                    "Rentals must last at least one day",
                ),
            },
            RentalError::RentalTooLong { max, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RENTAL_TOO_LONG",
                    message,
                    format!("Rentals may last at most {} days", max),
                ),
            },
            RentalError::InvalidDiscountPercent { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DISCOUNT_PERCENT",
                    message,
                    "Discounts are whole percentages from 0 to 100",
                ),
            },
            RentalError::ToolNotFound { code } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "TOOL_NOT_FOUND",
                    message,
                    format!("No tool with code '{}' is available for rent", code),
                ),
            },
            RentalError::InvalidToolType { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_TOOL_TYPE", message),
            },
            RentalError::DateOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("DATE_OUT_OF_RANGE", message),
            },
            RentalError::ChargeOverflow { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("CHARGE_OVERFLOW", message),
            },
            RentalError::CatalogParseError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CATALOG_ERROR", "Catalog error", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_rental_days_maps_to_bad_request() {
        let api_error: ApiErrorResponse = RentalError::InvalidRentalDays { days: 0 }.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_RENTAL_DAYS");
        assert_eq!(
            api_error.error.message,
            "Rental day count must be 1 or greater, got 0"
        );
    }

    #[test]
    fn test_invalid_discount_maps_to_bad_request() {
        let api_error: ApiErrorResponse =
            RentalError::InvalidDiscountPercent { percent: 120 }.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_DISCOUNT_PERCENT");
    }

    #[test]
    fn test_tool_not_found_maps_to_not_found() {
        let api_error: ApiErrorResponse = RentalError::ToolNotFound {
            code: "XXXX".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "TOOL_NOT_FOUND");
        assert!(api_error.error.details.unwrap().contains("XXXX"));
    }

    #[test]
    fn test_rental_too_long_maps_to_bad_request() {
        let api_error: ApiErrorResponse = RentalError::RentalTooLong {
            days: 20_000_000,
            max: 3650,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "RENTAL_TOO_LONG");
        assert!(api_error.error.details.unwrap().contains("3650"));
    }

    #[test]
    fn test_charge_overflow_maps_to_unprocessable() {
        let api_error: ApiErrorResponse = RentalError::ChargeOverflow {
            charge_days: 2,
            daily_charge: rust_decimal::Decimal::MAX,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "CHARGE_OVERFLOW");
    }

    #[test]
    fn test_into_response_sets_status_and_json_content_type() {
        let response = ApiErrorResponse::from(RentalError::InvalidRentalDays { days: 0 })
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn test_catalog_error_maps_to_server_error() {
        let api_error: ApiErrorResponse = RentalError::CatalogParseError {
            message: "bad".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CATALOG_ERROR");
    }
}
