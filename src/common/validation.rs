// src/common/validation.rs
// Core form validation types shared across all modules.

use std::collections::HashMap;

/// A single failed constraint on one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Outcome of validating a whole form.
///
/// `is_valid` is true iff `errors` is empty. Error order follows the
/// schema's field declaration order, one error at most per field.
#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn push(&mut self, error: ValidationError) {
        self.is_valid = false;
        self.errors.push(error);
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
            self.errors.extend(other.errors);
        }
    }

    /// First error recorded for `field`, if any.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        field_error(field, &self.errors)
    }
}

/// First error in `errors` belonging to `field`.
pub fn field_error<'a>(field: &str, errors: &'a [ValidationError]) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

type Check = Box<dyn Fn(Option<&str>) -> bool + Send + Sync>;

/// One constraint on one field's raw value.
///
/// A rule pairs a user-facing message with a pure predicate over the raw
/// input (`None` when the field was never filled in). Rules other than
/// `required` accept blank input, so "optional but well-formed" fields
/// compose as `[email()]` and mandatory ones as `[required(), email()]`.
pub struct Rule {
    message: String,
    check: Check,
}

impl Rule {
    pub(crate) fn new(
        message: impl Into<String>,
        check: impl Fn(Option<&str>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            check: Box::new(check),
        }
    }

    /// Replaces the default message with form-specific wording.
    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.message = text.into();
        self
    }

    /// Runs the rule; `Some(message)` on failure, `None` on pass.
    pub fn apply(&self, value: Option<&str>) -> Option<&str> {
        if (self.check)(value) {
            None
        } else {
            Some(&self.message)
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish()
    }
}

/// Anything a schema can pull raw field values out of.
///
/// Implemented for string maps and for every form struct, so screens can
/// validate either a typed form or loose key/value state.
pub trait FieldSource {
    fn value_of(&self, field: &str) -> Option<&str>;
}

impl FieldSource for HashMap<String, String> {
    fn value_of(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl FieldSource for HashMap<&str, &str> {
    fn value_of(&self, field: &str) -> Option<&str> {
        self.get(field).copied()
    }
}

/// An ordered field → rules binding for one form type.
///
/// The field set is fixed at build time; validation never adds or removes
/// fields. Within a field, rules run in declaration order and the first
/// failure wins.
#[derive(Debug)]
pub struct Schema {
    fields: Vec<(String, Vec<Rule>)>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder { fields: Vec::new() }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Validates a single field. Unknown fields validate clean.
    pub fn validate_field(&self, field: &str, value: Option<&str>) -> Option<ValidationError> {
        let (_, rules) = self.fields.iter().find(|(name, _)| name == field)?;

        for rule in rules {
            if let Some(message) = rule.apply(value) {
                return Some(ValidationError {
                    field: field.to_string(),
                    message: message.to_string(),
                });
            }
        }

        None
    }

    /// Validates every declared field against `data`.
    ///
    /// Fields present in `data` but absent from the schema are ignored.
    pub fn validate<S: FieldSource + ?Sized>(&self, data: &S) -> ValidationResult {
        let mut result = ValidationResult::new();

        for (field, _) in &self.fields {
            if let Some(error) = self.validate_field(field, data.value_of(field)) {
                result.push(error);
            }
        }

        result
    }
}

pub struct SchemaBuilder {
    fields: Vec<(String, Vec<Rule>)>,
}

impl SchemaBuilder {
    pub fn field(mut self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push((name.into(), rules.into_iter().collect()));
        self
    }

    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
        }
    }
}
