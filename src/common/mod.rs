// src/common/mod.rs
// Shared core: validation engine, rule library, input masks,
// error taxonomy and the notification seam.

pub mod error;
pub mod format;
pub mod notify;
pub mod rules;
pub mod validation;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use error::{classify, ApiFailure, AppError, ErrorHandler, ErrorKind};
pub use notify::{error_title, NoticeKind, NotificationSink, Notifier};
pub use validation::{
    field_error, FieldSource, Rule, Schema, SchemaBuilder, ValidationError, ValidationResult,
};
