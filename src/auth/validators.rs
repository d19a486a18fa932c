// src/auth/validators.rs

use crate::common::{rules, Schema};

/// Both login screens share this schema. Password strength is only
/// enforced at registration; here any non-empty password goes to the API.
pub fn login_schema() -> Schema {
    Schema::builder()
        .field("email", [rules::required(), rules::email()])
        .field("password", [rules::required()])
        .build()
}
