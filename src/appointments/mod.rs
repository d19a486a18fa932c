// src/appointments/mod.rs

pub mod models;
pub mod validators;


pub use models::{Appointment, AppointmentForm, AppointmentStatus, AppointmentType};
pub use validators::appointment_schema;
