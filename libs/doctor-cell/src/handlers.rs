use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_store::memory::ClinicStore;

use crate::models::{AvailabilityUpdate, Doctor, DoctorError};
use crate::services::directory::DoctorDirectoryService;

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<ClinicStore>>,
    Json(doctor): Json<Doctor>,
) -> Result<Json<Value>, AppError> {
    let directory = DoctorDirectoryService::new(state);

    let doctor = directory.create_doctor(doctor).await;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn list_doctors(State(state): State<Arc<ClinicStore>>) -> Result<Json<Value>, AppError> {
    let directory = DoctorDirectoryService::new(state);

    let doctors = directory.list_doctors().await;

    Ok(Json(json!(doctors)))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<ClinicStore>>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let directory = DoctorDirectoryService::new(state);

    let doctor = directory
        .get_doctor(doctor_id)
        .await
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(state): State<Arc<ClinicStore>>,
    Path(doctor_id): Path<i64>,
    Json(doctor): Json<Doctor>,
) -> Result<Json<Value>, AppError> {
    let directory = DoctorDirectoryService::new(state);

    let doctor = directory
        .update_doctor(doctor_id, doctor)
        .await
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(state): State<Arc<ClinicStore>>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let directory = DoctorDirectoryService::new(state);

    let doctor = directory
        .delete_doctor(doctor_id)
        .await
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn set_doctor_availability(
    State(state): State<Arc<ClinicStore>>,
    Path(doctor_id): Path<i64>,
    Json(update): Json<AvailabilityUpdate>,
) -> Result<Json<Value>, AppError> {
    let directory = DoctorDirectoryService::new(state);

    directory
        .set_availability(doctor_id, update.is_available)
        .await
        .map_err(|e| match e {
            DoctorError::NotFound(_) => AppError::NotFound(e.to_string()),
        })?;

    Ok(Json(json!({ "message": "Doctor availability updated" })))
}
