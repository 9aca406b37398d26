use std::sync::Arc;

use tracing::{debug, info};

use shared_store::memory::ClinicStore;

use crate::models::{Doctor, DoctorError};

/// Directory of doctor records. Creation is an unconditional upsert — an
/// existing doctor under the same id is silently overwritten, unlike the
/// patient store which rejects duplicates.
pub struct DoctorDirectoryService {
    store: Arc<ClinicStore>,
}

impl DoctorDirectoryService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    pub async fn create_doctor(&self, doctor: Doctor) -> Doctor {
        debug!("Storing doctor record {}", doctor.id);

        let mut doctors = self.store.doctors.write().await;
        doctors.upsert(doctor.id, doctor)
    }

    pub async fn list_doctors(&self) -> Vec<Doctor> {
        self.store.doctors.read().await.list()
    }

    pub async fn get_doctor(&self, doctor_id: i64) -> Result<Doctor, DoctorError> {
        self.store
            .doctors
            .read()
            .await
            .get(doctor_id)
            .map_err(|_| DoctorError::NotFound(doctor_id))
    }

    pub async fn update_doctor(
        &self,
        doctor_id: i64,
        doctor: Doctor,
    ) -> Result<Doctor, DoctorError> {
        debug!("Replacing doctor record {}", doctor_id);

        self.store
            .doctors
            .write()
            .await
            .replace(doctor_id, doctor)
            .map_err(|_| DoctorError::NotFound(doctor_id))
    }

    /// Removes the record entirely. Appointments already booked with this
    /// doctor are left in place and keep referencing the deleted id.
    pub async fn delete_doctor(&self, doctor_id: i64) -> Result<Doctor, DoctorError> {
        debug!("Deleting doctor record {}", doctor_id);

        self.store
            .doctors
            .write()
            .await
            .remove(doctor_id)
            .map_err(|_| DoctorError::NotFound(doctor_id))
    }

    /// Flips the availability flag only. Appointments already booked with
    /// this doctor are untouched; unavailability affects future scheduling
    /// attempts alone.
    pub async fn set_availability(
        &self,
        doctor_id: i64,
        is_available: bool,
    ) -> Result<(), DoctorError> {
        let mut doctors = self.store.doctors.write().await;

        let doctor = doctors
            .get_mut(doctor_id)
            .ok_or(DoctorError::NotFound(doctor_id))?;
        doctor.is_available = is_available;

        info!("Doctor {} availability set to {}", doctor_id, is_available);
        Ok(())
    }

    /// Candidates for booking: available doctors whose specialization field
    /// exactly equals the requested one, in directory enumeration order.
    pub async fn available_by_specialization(&self, specialization: &str) -> Vec<Doctor> {
        self.store
            .doctors
            .read()
            .await
            .iter()
            .filter(|doctor| doctor.is_available && doctor.specialization == specialization)
            .cloned()
            .collect()
    }
}
