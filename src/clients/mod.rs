// src/clients/mod.rs

pub mod models;
pub mod validators;


pub use models::{Client, ClientForm, ClientStatus};
pub use validators::{registration_schema, update_schema};
