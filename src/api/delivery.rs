use axum::{extract::State, Json};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{
    infrastructure::http::middleware::{ApiResult, AppState},
    models::*,
    services::delivery_scheduler,
};

// ========================================
// Request/Response Types
// ========================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub event: ShopEventInput,
    pub now: Option<NaiveDateTime>, // business-local, e.g. "2025-12-17T14:00:00"
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    #[serde(flatten)]
    pub schedule: DeliverySchedule,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateDateRequest {
    pub event: ShopEventInput,
    pub selected_date: NaiveDate,
    pub now: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateOptionsRequest {
    pub event: ShopEventInput,
    pub days_ahead: Option<u32>, // at most MAX_OPTION_DAYS
    pub now: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize)]
pub struct DateOptionsResponse {
    pub dates: Vec<NaiveDate>,
    pub formatted: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDeliveryRequest {
    pub event: ShopEventInput,
    pub delivery_date: Option<NaiveDate>,
    pub time_slot: Option<String>,
    pub now: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// ========================================
// Helpers
// ========================================

fn validate_event(input: ShopEventInput) -> ApiResult<ShopEvent> {
    ShopEvent::try_from(input).map_err(|e| {
        tracing::warn!("Rejected shop event configuration: {}", e);
        e.into()
    })
}

fn resolve_now(state: &AppState, now: Option<NaiveDateTime>) -> NaiveDateTime {
    now.unwrap_or_else(|| state.clock.now())
}

// ========================================
// Handlers
// ========================================

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn get_schedule(
    State(state): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> ApiResult<Json<ScheduleResponse>> {
    let event = validate_event(request.event)?;
    let now = resolve_now(&state, request.now);

    let schedule = delivery_scheduler::calculate_delivery_schedule(&event, now)?;
    let message = delivery_scheduler::get_delivery_message(&schedule);

    Ok(Json(ScheduleResponse { schedule, message }))
}

pub async fn validate_date(
    State(state): State<AppState>,
    Json(request): Json<ValidateDateRequest>,
) -> ApiResult<Json<DeliveryDateValidation>> {
    let event = validate_event(request.event)?;
    let now = resolve_now(&state, request.now);

    let validation =
        delivery_scheduler::is_valid_delivery_date(request.selected_date, &event, now)?;
    if let Some(error) = &validation.error {
        tracing::debug!(selected = %request.selected_date, "Delivery date rejected: {}", error);
    }

    Ok(Json(validation))
}

pub async fn list_date_options(
    State(state): State<AppState>,
    Json(request): Json<DateOptionsRequest>,
) -> ApiResult<Json<DateOptionsResponse>> {
    let event = validate_event(request.event)?;
    let now = resolve_now(&state, request.now);
    let days_ahead = request
        .days_ahead
        .unwrap_or(state.config.delivery_option_days);

    let dates = delivery_scheduler::get_delivery_date_options(&event, days_ahead, now)?;
    let formatted = dates
        .iter()
        .map(|d| delivery_scheduler::format_delivery_date(*d))
        .collect();

    Ok(Json(DateOptionsResponse { dates, formatted }))
}

pub async fn assign_delivery(
    State(state): State<AppState>,
    Json(request): Json<AssignDeliveryRequest>,
) -> ApiResult<Json<DeliveryAssignment>> {
    let event = validate_event(request.event)?;
    let now = resolve_now(&state, request.now);

    let time_slot = request
        .time_slot
        .as_deref()
        .map(str::parse::<TimeSlot>)
        .transpose()?;

    let assignment =
        delivery_scheduler::assign_delivery(&event, request.delivery_date, time_slot, now)?;

    tracing::info!(
        delivery_date = %assignment.delivery_date,
        customer_selected = assignment.customer_selected,
        "Delivery assigned"
    );

    Ok(Json(assignment))
}
