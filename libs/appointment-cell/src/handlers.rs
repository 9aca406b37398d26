// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_store::memory::ClinicStore;

use crate::models::{AppointmentError, ScheduleAppointmentRequest};
use crate::services::lifecycle::AppointmentLifecycleService;
use crate::services::scheduler::AppointmentSchedulerService;

#[axum::debug_handler]
pub async fn schedule_appointment(
    State(state): State<Arc<ClinicStore>>,
    Json(request): Json<ScheduleAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let scheduler = AppointmentSchedulerService::new(state);

    let appointment = scheduler.schedule(request).await.map_err(|e| match e {
        AppointmentError::PastDate => AppError::BadRequest(e.to_string()),
        AppointmentError::NoDoctorAvailable { .. } => AppError::NotFound(e.to_string()),
        AppointmentError::AlreadyBooked { .. } => AppError::Conflict(e.to_string()),
        _ => AppError::Internal(e.to_string()),
    })?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ClinicStore>>,
) -> Result<Json<Value>, AppError> {
    let scheduler = AppointmentSchedulerService::new(state);

    let appointments = scheduler.list_appointments().await;

    Ok(Json(json!(appointments)))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<ClinicStore>>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let scheduler = AppointmentSchedulerService::new(state);

    let appointment = scheduler
        .get_appointment(appointment_id)
        .await
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn complete_appointment(
    State(state): State<Arc<ClinicStore>>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let lifecycle = AppointmentLifecycleService::new(state);

    lifecycle.complete(appointment_id).await.map_err(|e| match e {
        AppointmentError::NotFound(_) => AppError::NotFound(e.to_string()),
        AppointmentError::AlreadyCompleted(_) => AppError::Conflict(e.to_string()),
        _ => AppError::Internal(e.to_string()),
    })?;

    Ok(Json(json!({ "message": "Appointment Completed" })))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<ClinicStore>>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let lifecycle = AppointmentLifecycleService::new(state);

    lifecycle.cancel(appointment_id).await.map_err(|e| match e {
        AppointmentError::NotFound(_) => AppError::NotFound(e.to_string()),
        AppointmentError::CannotCancelCompleted => AppError::Conflict(e.to_string()),
        _ => AppError::Internal(e.to_string()),
    })?;

    Ok(Json(json!({ "message": "Appointment canceled" })))
}
