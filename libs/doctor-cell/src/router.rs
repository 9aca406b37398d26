use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use shared_store::memory::ClinicStore;

use crate::handlers;

pub fn doctor_routes(state: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/", post(handlers::create_doctor))
        .route("/", get(handlers::list_doctors))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .route("/{doctor_id}", put(handlers::update_doctor))
        .route("/{doctor_id}", delete(handlers::delete_doctor))
        .route("/{doctor_id}/availability", put(handlers::set_doctor_availability))
        .with_state(state)
}
