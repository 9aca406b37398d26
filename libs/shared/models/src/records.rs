use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub sex: String,
    pub weight: f64,
    pub height: f64,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub phone: String,
    #[serde(default = "default_availability")]
    pub is_available: bool,
}

fn default_availability() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub appointment_date: DateTime<Utc>,
    #[serde(default)]
    pub complete: bool,
}

impl Appointment {
    /// Calendar date of the slot. Booking conflicts and past-date checks
    /// compare only this component, never the time of day.
    pub fn calendar_date(&self) -> NaiveDate {
        self.appointment_date.date_naive()
    }
}
