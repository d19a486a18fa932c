// src/auth/mod.rs

pub mod models;
pub mod validators;


pub use models::{LoginForm, Role, User};
pub use validators::login_schema;
