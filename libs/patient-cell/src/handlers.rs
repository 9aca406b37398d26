use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_store::memory::ClinicStore;

use crate::models::{Patient, PatientError};
use crate::services::patient::PatientService;

fn map_patient_error(err: PatientError) -> AppError {
    match err {
        PatientError::AlreadyExists(_) => AppError::Conflict(err.to_string()),
        PatientError::NotFound(_) => AppError::NotFound(err.to_string()),
    }
}

#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<Arc<ClinicStore>>,
    Json(patient): Json<Patient>,
) -> Result<Json<Value>, AppError> {
    let patient_service = PatientService::new(state);

    let patient = patient_service
        .create_patient(patient)
        .await
        .map_err(map_patient_error)?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn list_patients(
    State(state): State<Arc<ClinicStore>>,
) -> Result<Json<Value>, AppError> {
    let patient_service = PatientService::new(state);

    let patients = patient_service.list_patients().await;

    Ok(Json(json!(patients)))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<Arc<ClinicStore>>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let patient_service = PatientService::new(state);

    let patient = patient_service
        .get_patient(patient_id)
        .await
        .map_err(map_patient_error)?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(state): State<Arc<ClinicStore>>,
    Path(patient_id): Path<i64>,
    Json(patient): Json<Patient>,
) -> Result<Json<Value>, AppError> {
    let patient_service = PatientService::new(state);

    let patient = patient_service
        .update_patient(patient_id, patient)
        .await
        .map_err(map_patient_error)?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn delete_patient(
    State(state): State<Arc<ClinicStore>>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let patient_service = PatientService::new(state);

    let patient = patient_service
        .delete_patient(patient_id)
        .await
        .map_err(map_patient_error)?;

    Ok(Json(json!(patient)))
}
