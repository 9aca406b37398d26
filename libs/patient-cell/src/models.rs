use serde::{Deserialize, Serialize};

pub use shared_models::records::Patient;

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum PatientError {
    #[error("Patient with id, {0}, already exists")]
    AlreadyExists(i64),

    #[error("No Patient Data found for id, {0}")]
    NotFound(i64),
}
