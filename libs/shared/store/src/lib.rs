pub mod memory;

pub use memory::{AppointmentStore, ClinicStore, RecordStore, StoreError};
