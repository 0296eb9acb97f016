//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! handler is a thin shell: it parses the body, calls the matching engine
//! function, and wraps the outcome.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_bonus, compute_net_salary, convert_currency, quote_variation};
use crate::error::EngineResult;

use super::request::{BonusRequest, ConversionRequest, NetSalaryRequest, VariationRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationEnvelope};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/bonus", post(bonus_handler))
        .route("/net-salary", post(net_salary_handler))
        .route("/currency/convert", post(convert_handler))
        .route("/currency/variation", post(variation_handler))
        .with_state(state)
}

/// Handler for POST /bonus.
async fn bonus_handler(
    State(state): State<AppState>,
    payload: Result<Json<BonusRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bonus request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let started = Instant::now();
    let outcome = compute_bonus(
        request.better_salary,
        request.entry_date,
        request.calculation_date,
        state.config().bonus(),
    );
    if let Ok(result) = &outcome {
        info!(
            correlation_id = %correlation_id,
            bonus_amount = %result.bonus_amount,
            months = result.months_worked(),
            days = result.days_worked(),
            duration_us = started.elapsed().as_micros(),
            "Bonus calculation completed successfully"
        );
    }
    outcome_response(correlation_id, outcome)
}

/// Handler for POST /net-salary.
async fn net_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<NetSalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing net salary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let started = Instant::now();
    let outcome = compute_net_salary(
        request.gross_salary,
        request.has_union,
        request.dependents_count,
        state.config(),
    );
    if let Ok(result) = &outcome {
        info!(
            correlation_id = %correlation_id,
            net_salary = %result.net_salary,
            pays_income_tax = result.pays_income_tax,
            duration_us = started.elapsed().as_micros(),
            "Net salary calculation completed successfully"
        );
    }
    outcome_response(correlation_id, outcome)
}

/// Handler for POST /currency/convert.
async fn convert_handler(payload: Result<Json<ConversionRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing conversion request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let started = Instant::now();
    let outcome = convert_currency(request.amount, request.direction, &request.quote);
    if let Ok(result) = &outcome {
        info!(
            correlation_id = %correlation_id,
            from = %result.source_currency,
            to = %result.target_currency,
            converted = %result.converted,
            duration_us = started.elapsed().as_micros(),
            "Currency conversion completed successfully"
        );
    }
    outcome_response(correlation_id, outcome)
}

/// Handler for POST /currency/variation.
///
/// The result is `null` when there is no previous quote to compare against.
async fn variation_handler(payload: Result<Json<VariationRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing variation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let started = Instant::now();
    let outcome = quote_variation(request.previous, request.current);
    if let Ok(variation) = &outcome {
        info!(
            correlation_id = %correlation_id,
            percentage = ?variation.as_ref().map(|v| v.percentage),
            duration_us = started.elapsed().as_micros(),
            "Quote variation completed successfully"
        );
    }
    outcome_response(correlation_id, outcome)
}

/// Turns an engine outcome into a JSON response.
fn outcome_response<T: Serialize>(correlation_id: Uuid, outcome: EngineResult<T>) -> Response {
    match outcome {
        Ok(result) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(CalculationEnvelope::new(correlation_id, result)),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, including bad dates and missing fields
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
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

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
