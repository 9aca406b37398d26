use serde::{Deserialize, Serialize};

pub use shared_models::records::Doctor;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityUpdate {
    pub is_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum DoctorError {
    #[error("No doctor data found for id, {0}")]
    NotFound(i64),
}
