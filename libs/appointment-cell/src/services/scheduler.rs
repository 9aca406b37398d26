// libs/appointment-cell/src/services/scheduler.rs
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use doctor_cell::services::directory::DoctorDirectoryService;
use shared_store::memory::ClinicStore;

use crate::models::{Appointment, AppointmentError, ScheduleAppointmentRequest};

pub struct AppointmentSchedulerService {
    store: Arc<ClinicStore>,
    directory: DoctorDirectoryService,
}

impl AppointmentSchedulerService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        let directory = DoctorDirectoryService::new(store.clone());
        Self { store, directory }
    }

    /// Book an appointment with a doctor of the requested specialization.
    ///
    /// The booking resolves entirely against the first candidate in
    /// directory enumeration order: a live appointment on that doctor for
    /// the requested calendar date rejects the whole request instead of
    /// falling through to the next candidate. Only the most recently
    /// created appointment per doctor and date is consulted; if that one
    /// is already completed the slot counts as free again.
    pub async fn schedule(
        &self,
        request: ScheduleAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let requested_date = request.appointment_date.date_naive();

        // Only the date component is compared, so a same-day booking is
        // accepted even when the time of day has already passed.
        if requested_date < Utc::now().date_naive() {
            return Err(AppointmentError::PastDate);
        }

        debug!(
            "Scheduling {} appointment for patient {} on {}",
            request.specialization, request.patient_id, requested_date
        );

        let candidates = self
            .directory
            .available_by_specialization(&request.specialization)
            .await;

        let Some(doctor) = candidates.into_iter().next() else {
            return Err(AppointmentError::NoDoctorAvailable {
                specialization: request.specialization,
                date: requested_date,
            });
        };

        // The write lock is held across the conflict scan and the insert so
        // the decision and the booking are a single step.
        let mut appointments = self.store.appointments.write().await;

        let blocked = appointments
            .iter()
            .rev()
            .find(|a| a.doctor_id == doctor.id && a.calendar_date() == requested_date)
            .is_some_and(|existing| !existing.complete);

        if blocked {
            warn!(
                "Doctor {} already booked on {}, rejecting request",
                doctor.id, requested_date
            );
            return Err(AppointmentError::AlreadyBooked {
                specialization: request.specialization,
                date: requested_date,
            });
        }

        let appointment =
            appointments.create(request.patient_id, doctor.id, request.appointment_date);

        info!(
            "Booked appointment {} with doctor {} for patient {}",
            appointment.id, doctor.id, appointment.patient_id
        );

        Ok(appointment)
    }

    pub async fn list_appointments(&self) -> Vec<Appointment> {
        self.store.appointments.read().await.list()
    }

    pub async fn get_appointment(
        &self,
        appointment_id: i64,
    ) -> Result<Appointment, AppointmentError> {
        self.store
            .appointments
            .read()
            .await
            .get(appointment_id)
            .map_err(|_| AppointmentError::NotFound(appointment_id))
    }
}
