// libs/appointment-cell/src/services/lifecycle.rs
use std::sync::Arc;

use tracing::{debug, info};

use shared_store::memory::ClinicStore;

use crate::models::AppointmentError;

/// Transitions appointments out of the active state. Completed is terminal;
/// cancellation deletes the record, so a canceled appointment is
/// indistinguishable from one that never existed.
pub struct AppointmentLifecycleService {
    store: Arc<ClinicStore>,
}

impl AppointmentLifecycleService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    pub async fn complete(&self, appointment_id: i64) -> Result<(), AppointmentError> {
        let mut appointments = self.store.appointments.write().await;

        let appointment = appointments
            .get_mut(appointment_id)
            .ok_or(AppointmentError::NotFound(appointment_id))?;

        if appointment.complete {
            return Err(AppointmentError::AlreadyCompleted(appointment_id));
        }

        appointment.complete = true;

        info!("Appointment {} marked as completed", appointment_id);
        debug!("Appointment table after completion: {:?}", appointments.list());

        Ok(())
    }

    pub async fn cancel(&self, appointment_id: i64) -> Result<(), AppointmentError> {
        let mut appointments = self.store.appointments.write().await;

        let appointment = appointments
            .get(appointment_id)
            .map_err(|_| AppointmentError::NotFound(appointment_id))?;

        if appointment.complete {
            return Err(AppointmentError::CannotCancelCompleted);
        }

        appointments
            .remove(appointment_id)
            .map_err(|_| AppointmentError::NotFound(appointment_id))?;

        info!("Appointment {} canceled", appointment_id);

        Ok(())
    }
}
