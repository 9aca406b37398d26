// libs/shared/store/src/memory.rs
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use shared_models::records::{Appointment, Doctor, Patient};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record with id {0} already exists")]
    Duplicate(i64),

    #[error("no record found for id {0}")]
    Missing(i64),
}

/// Keyed in-memory table. Enumeration order is ascending id, so reverse
/// iteration over monotonically assigned ids walks most-recent-first.
#[derive(Debug)]
pub struct RecordStore<T> {
    records: BTreeMap<i64, T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }
}

impl<T: Clone> RecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-if-absent. The stored record is returned on success.
    pub fn insert(&mut self, id: i64, record: T) -> Result<T, StoreError> {
        if self.records.contains_key(&id) {
            return Err(StoreError::Duplicate(id));
        }
        self.records.insert(id, record.clone());
        Ok(record)
    }

    /// Unconditional write; an existing record under the same id is
    /// silently overwritten.
    pub fn upsert(&mut self, id: i64, record: T) -> T {
        self.records.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: i64) -> Result<T, StoreError> {
        self.records.get(&id).cloned().ok_or(StoreError::Missing(id))
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut T> {
        self.records.get_mut(&id)
    }

    pub fn list(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    /// Full replacement of an existing record, not a field merge.
    pub fn replace(&mut self, id: i64, record: T) -> Result<T, StoreError> {
        if !self.records.contains_key(&id) {
            return Err(StoreError::Missing(id));
        }
        self.records.insert(id, record.clone());
        Ok(record)
    }

    pub fn remove(&mut self, id: i64) -> Result<T, StoreError> {
        self.records.remove(&id).ok_or(StoreError::Missing(id))
    }

    pub fn contains(&self, id: i64) -> bool {
        self.records.contains_key(&id)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Appointment table plus the id sequence that feeds it. Ids start at 1,
/// increase monotonically for the life of the process and are never reused,
/// even after a cancellation removes the record; `create` is the only way
/// to allocate one.
#[derive(Debug, Default)]
pub struct AppointmentStore {
    records: RecordStore<Appointment>,
    next_id: i64,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(
        &mut self,
        patient_id: i64,
        doctor_id: i64,
        appointment_date: DateTime<Utc>,
    ) -> Appointment {
        self.next_id += 1;
        let appointment = Appointment {
            id: self.next_id,
            patient_id,
            doctor_id,
            appointment_date,
            complete: false,
        };
        debug!("Allocated appointment id {}", appointment.id);
        self.records.upsert(appointment.id, appointment.clone());
        appointment
    }

    pub fn get(&self, id: i64) -> Result<Appointment, StoreError> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut Appointment> {
        self.records.get_mut(id)
    }

    pub fn remove(&mut self, id: i64) -> Result<Appointment, StoreError> {
        self.records.remove(id)
    }

    pub fn list(&self) -> Vec<Appointment> {
        self.records.list()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Appointment> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Shared application state: one in-memory table per entity, each behind its
/// own lock. State lives for the process lifetime only; a restart discards
/// everything. Tests construct isolated instances with `ClinicStore::new()`.
#[derive(Debug, Default)]
pub struct ClinicStore {
    pub patients: RwLock<RecordStore<Patient>>,
    pub doctors: RwLock<RecordStore<Doctor>>,
    pub appointments: RwLock<AppointmentStore>,
}

impl ClinicStore {
    pub fn new() -> Self {
        Self::default()
    }
}
