// src/clients/models.rs

use serde::{Deserialize, Serialize};

use crate::common::FieldSource;

/// Patient record as stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub phone: String,
    /// Masked `dd/mm/yyyy`, exactly as typed in the registration form.
    pub birth_date: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClientStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    #[serde(rename = "Ativo")]
    Active,
    #[serde(rename = "Inativo")]
    Inactive,
}

/// Raw registration/edit screen state. Everything is the string the user
/// typed; masks and validation run on top of this.
#[derive(Debug, Clone, Default)]
pub struct ClientForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub birth_date: String,
    pub address: String,
    pub emergency_contact: Option<String>,
    pub medical_history: Option<String>,
    pub observations: Option<String>,
}

impl FieldSource for ClientForm {
    fn value_of(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            "phone" => Some(&self.phone),
            "birthDate" => Some(&self.birth_date),
            "address" => Some(&self.address),
            "emergencyContact" => self.emergency_contact.as_deref(),
            "medicalHistory" => self.medical_history.as_deref(),
            "observations" => self.observations.as_deref(),
            _ => None,
        }
    }
}
