use std::sync::Arc;

use tracing::debug;

use shared_store::memory::{ClinicStore, StoreError};

use crate::models::{Patient, PatientError};

pub struct PatientService {
    store: Arc<ClinicStore>,
}

impl PatientService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    pub async fn create_patient(&self, patient: Patient) -> Result<Patient, PatientError> {
        debug!("Creating patient record {}", patient.id);

        let mut patients = self.store.patients.write().await;
        patients.insert(patient.id, patient).map_err(|err| match err {
            StoreError::Duplicate(id) => PatientError::AlreadyExists(id),
            StoreError::Missing(id) => PatientError::NotFound(id),
        })
    }

    pub async fn list_patients(&self) -> Vec<Patient> {
        self.store.patients.read().await.list()
    }

    pub async fn get_patient(&self, patient_id: i64) -> Result<Patient, PatientError> {
        self.store
            .patients
            .read()
            .await
            .get(patient_id)
            .map_err(|_| PatientError::NotFound(patient_id))
    }

    pub async fn update_patient(
        &self,
        patient_id: i64,
        patient: Patient,
    ) -> Result<Patient, PatientError> {
        debug!("Replacing patient record {}", patient_id);

        self.store
            .patients
            .write()
            .await
            .replace(patient_id, patient)
            .map_err(|_| PatientError::NotFound(patient_id))
    }

    pub async fn delete_patient(&self, patient_id: i64) -> Result<Patient, PatientError> {
        debug!("Deleting patient record {}", patient_id);

        self.store
            .patients
            .write()
            .await
            .remove(patient_id)
            .map_err(|_| PatientError::NotFound(patient_id))
    }
}
