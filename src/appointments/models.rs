// src/appointments/models.rs

use serde::{Deserialize, Serialize};

use crate::common::FieldSource;

/// Session types offered by the clinic. Wire names are the Portuguese
/// labels json-server stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentType {
    #[serde(rename = "Fisioterapia")]
    Physiotherapy,
    #[serde(rename = "RPG")]
    Rpg,
    #[serde(rename = "Pilates")]
    Pilates,
    #[serde(rename = "Massagem")]
    Massage,
    #[serde(rename = "Avaliação")]
    Assessment,
    #[serde(rename = "Retorno")]
    FollowUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "Agendado")]
    Scheduled,
    #[serde(rename = "Confirmado")]
    Confirmed,
    #[serde(rename = "Em Andamento")]
    InProgress,
    #[serde(rename = "Concluído")]
    Completed,
    #[serde(rename = "Cancelado")]
    Cancelled,
    #[serde(rename = "Faltou")]
    NoShow,
    #[serde(rename = "Pendente")]
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub client_id: i64,
    /// Masked `dd/mm/yyyy`.
    pub date: String,
    /// `hh:mm`, picked from the slot list.
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Raw scheduling screen state. `client_id` and `appointment_type` stay
/// strings until submit; the pickers may not have a selection yet.
#[derive(Debug, Clone, Default)]
pub struct AppointmentForm {
    pub client_id: String,
    pub date: String,
    pub time: String,
    pub appointment_type: String,
    pub doctor: Option<String>,
    pub notes: Option<String>,
}

impl FieldSource for AppointmentForm {
    fn value_of(&self, field: &str) -> Option<&str> {
        match field {
            "clientId" => Some(&self.client_id),
            "date" => Some(&self.date),
            "time" => Some(&self.time),
            "type" => Some(&self.appointment_type),
            "doctor" => self.doctor.as_deref(),
            "notes" => self.notes.as_deref(),
            _ => None,
        }
    }
}
