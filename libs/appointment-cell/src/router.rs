// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use shared_store::memory::ClinicStore;

use crate::handlers;

pub fn appointment_routes(state: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/", post(handlers::schedule_appointment))
        .route("/", get(handlers::list_appointments))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}", delete(handlers::cancel_appointment))
        .route("/{appointment_id}/complete", put(handlers::complete_appointment))
        .with_state(state)
}
