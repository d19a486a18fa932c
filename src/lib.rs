// src/lib.rs

//! Core client logic for the Fisio clinic app.
//!
//! The screens themselves live in the mobile shell; this crate owns
//! everything behind them that has actual rules in it:
//!
//! - a composable form validation engine ([`common::validation`]) with a
//!   library of reusable field rules ([`common::rules`]),
//! - live input masks for phone, CPF and date fields ([`common::format`]),
//! - classification of failed API calls into a closed error taxonomy and
//!   its presentation seam ([`common::error`], [`common::notify`]),
//! - per-domain form models and schemas for login, client registration
//!   and appointment scheduling.
//!
//! Everything here is synchronous and pure apart from the logging and
//! notification tail calls, so it is safe to run on the UI thread.

pub mod appointments;
pub mod auth;
pub mod clients;
pub mod common;

pub use common::{
    classify, field_error, ApiFailure, AppError, ErrorHandler, ErrorKind, FieldSource, NoticeKind,
    NotificationSink, Notifier, Rule, Schema, ValidationError, ValidationResult,
};
