// libs/appointment-cell/src/models.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub use shared_models::records::Appointment;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleAppointmentRequest {
    pub patient_id: i64,
    pub appointment_date: DateTime<Utc>,
    pub specialization: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum AppointmentError {
    #[error("You cannot set appointments for past dates")]
    PastDate,

    #[error("No {specialization} available for your appointment on {date}")]
    NoDoctorAvailable {
        specialization: String,
        date: NaiveDate,
    },

    #[error("Appointment already scheduled with {specialization} on {date}")]
    AlreadyBooked {
        specialization: String,
        date: NaiveDate,
    },

    #[error("No Appointment found with id, {0}")]
    NotFound(i64),

    #[error("Appointment with id, {0}, already marked as completed")]
    AlreadyCompleted(i64),

    #[error("You cannot cancel a completed appointment")]
    CannotCancelCompleted,
}
