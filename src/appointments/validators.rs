// src/appointments/validators.rs

use crate::common::{rules, Schema};

/// Scheduling form. Time and type come from pickers, so presence is the
/// only check; the date field is typed and gets the calendar rule.
pub fn appointment_schema() -> Schema {
    Schema::builder()
        .field("clientId", [rules::required()])
        .field("date", [rules::required(), rules::date()])
        .field("time", [rules::required()])
        .field("type", [rules::required()])
        .build()
}
