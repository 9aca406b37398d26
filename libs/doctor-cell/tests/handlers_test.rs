use std::sync::Arc;

use assert_matches::assert_matches;
use axum::{
    extract::{Path, State},
    Json,
};

use doctor_cell::handlers;
use doctor_cell::models::{AvailabilityUpdate, Doctor};
use doctor_cell::services::DoctorDirectoryService;
use shared_models::error::AppError;
use shared_store::memory::ClinicStore;

fn sample_doctor(id: i64, name: &str, specialization: &str) -> Doctor {
    Doctor {
        id,
        name: name.to_string(),
        specialization: specialization.to_string(),
        phone: "+353 1 555 0199".to_string(),
        is_available: true,
    }
}

#[tokio::test]
async fn create_doctor_is_an_upsert() {
    let store = Arc::new(ClinicStore::new());

    handlers::create_doctor(
        State(store.clone()),
        Json(sample_doctor(1, "Dr. Eve Kelly", "Cardiology")),
    )
    .await
    .unwrap();

    // Same id again replaces the record silently instead of conflicting.
    let response = handlers::create_doctor(
        State(store.clone()),
        Json(sample_doctor(1, "Dr. Tom Walsh", "Neurology")),
    )
    .await
    .unwrap();

    assert_eq!(response.0["name"], "Dr. Tom Walsh");
    let doctors = store.doctors.read().await;
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors.get(1).unwrap().specialization, "Neurology");
}

#[tokio::test]
async fn get_doctor_unknown_id_is_not_found() {
    let store = Arc::new(ClinicStore::new());

    let result = handlers::get_doctor(State(store), Path(12)).await;
    assert_matches!(result, Err(AppError::NotFound(_)));
}

#[tokio::test]
async fn update_doctor_requires_existing_record() {
    let store = Arc::new(ClinicStore::new());

    let result = handlers::update_doctor(
        State(store.clone()),
        Path(5),
        Json(sample_doctor(5, "Dr. Eve Kelly", "Cardiology")),
    )
    .await;
    assert_matches!(result, Err(AppError::NotFound(_)));

    handlers::create_doctor(
        State(store.clone()),
        Json(sample_doctor(5, "Dr. Eve Kelly", "Cardiology")),
    )
    .await
    .unwrap();

    let response = handlers::update_doctor(
        State(store),
        Path(5),
        Json(sample_doctor(5, "Dr. Eve Kelly", "Dermatology")),
    )
    .await
    .unwrap();
    assert_eq!(response.0["specialization"], "Dermatology");
}

#[tokio::test]
async fn delete_doctor_returns_the_removed_record() {
    let store = Arc::new(ClinicStore::new());

    handlers::create_doctor(
        State(store.clone()),
        Json(sample_doctor(3, "Dr. Eve Kelly", "Cardiology")),
    )
    .await
    .unwrap();

    let response = handlers::delete_doctor(State(store.clone()), Path(3)).await.unwrap();
    assert_eq!(response.0["id"], 3);
    assert!(store.doctors.read().await.is_empty());
}

#[tokio::test]
async fn set_availability_flips_the_flag_only() {
    let store = Arc::new(ClinicStore::new());

    handlers::create_doctor(
        State(store.clone()),
        Json(sample_doctor(2, "Dr. Eve Kelly", "Cardiology")),
    )
    .await
    .unwrap();

    let response = handlers::set_doctor_availability(
        State(store.clone()),
        Path(2),
        Json(AvailabilityUpdate { is_available: false }),
    )
    .await
    .unwrap();
    assert_eq!(response.0["message"], "Doctor availability updated");

    let doctor = store.doctors.read().await.get(2).unwrap();
    assert!(!doctor.is_available);
    assert_eq!(doctor.name, "Dr. Eve Kelly");
}

#[tokio::test]
async fn set_availability_unknown_id_is_not_found() {
    let store = Arc::new(ClinicStore::new());

    let result = handlers::set_doctor_availability(
        State(store),
        Path(8),
        Json(AvailabilityUpdate { is_available: false }),
    )
    .await;
    assert_matches!(result, Err(AppError::NotFound(_)));
}

#[tokio::test]
async fn available_by_specialization_filters_on_flag_and_exact_match() {
    let store = Arc::new(ClinicStore::new());
    let directory = DoctorDirectoryService::new(store.clone());

    directory.create_doctor(sample_doctor(1, "Dr. A", "Cardiology")).await;
    directory.create_doctor(sample_doctor(2, "Dr. B", "Neurology")).await;
    let mut off_duty = sample_doctor(3, "Dr. C", "Cardiology");
    off_duty.is_available = false;
    directory.create_doctor(off_duty).await;

    let candidates = directory.available_by_specialization("Cardiology").await;
    let ids: Vec<i64> = candidates.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1]);

    // Matching is exact, not case-insensitive or fuzzy.
    assert!(directory.available_by_specialization("cardiology").await.is_empty());
}
