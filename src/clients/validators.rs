// src/clients/validators.rs

use crate::common::{rules, Schema};

/// Admin "register client" form. Phone and birth date arrive already
/// masked by the formatters; the rules only accept the full mask.
pub fn registration_schema() -> Schema {
    Schema::builder()
        .field("name", [rules::required(), rules::min_length(2)])
        .field("email", [rules::required(), rules::email()])
        .field("password", [rules::required(), rules::password()])
        .field("phone", [rules::required(), rules::phone()])
        .field("birthDate", [rules::required(), rules::date()])
        .field("address", [rules::required(), rules::min_length(10)])
        .build()
}

/// Profile edit form. Same shape minus the password, which is changed
/// through its own flow.
pub fn update_schema() -> Schema {
    Schema::builder()
        .field("name", [rules::required(), rules::min_length(2)])
        .field("email", [rules::required(), rules::email()])
        .field("phone", [rules::required(), rules::phone()])
        .field("birthDate", [rules::required(), rules::date()])
        .field("address", [rules::required(), rules::min_length(10)])
        .build()
}
