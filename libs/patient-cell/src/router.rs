use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use shared_store::memory::ClinicStore;

use crate::handlers;

pub fn patient_routes(state: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/", post(handlers::create_patient))
        .route("/", get(handlers::list_patients))
        .route("/{patient_id}", get(handlers::get_patient))
        .route("/{patient_id}", put(handlers::update_patient))
        .route("/{patient_id}", delete(handlers::delete_patient))
        .with_state(state)
}
