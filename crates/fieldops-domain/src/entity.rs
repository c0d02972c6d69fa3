//! The [`Entity`] trait shared by every record type, plus form encoding helpers.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::id::RecordId;
use crate::kind::EntityKind;

/// A CRUD-managed record.
///
/// `Default` is the empty draft a new record starts from. The identifier is
/// never part of [`Entity::form_fields`]; the server assigns it on create.
pub trait Entity:
    Clone + fmt::Debug + Default + PartialEq + Serialize + DeserializeOwned + 'static
{
    const KIND: EntityKind;

    /// Server-assigned identifier, or `None` while the record carries the placeholder.
    fn id(&self) -> Option<&RecordId>;

    /// Human-readable text shown wherever another record references this one.
    fn label(&self) -> String;

    /// Writable fields in submission order. Many-valued fields repeat their key.
    fn form_fields(&self) -> FormFields;

    /// Assign one writable field from its textual form, addressed by wire name.
    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FieldError>;
}

/// Error returned by [`Entity::set_field`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("invalid value {value:?} for field {field}")]
    InvalidValue { field: String, value: String },
}

/// Ordered `(name, value)` pairs ready for form encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(&'static str, String)>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &'static str, value: &str) -> Self {
        self.0.push((name, value.to_owned()));
        self
    }

    /// Single foreign key. An unset or placeholder reference is sent as an empty value.
    pub fn reference(mut self, name: &'static str, value: Option<&RecordId>) -> Self {
        let value = value
            .filter(|id| !id.is_placeholder())
            .map(RecordId::to_string)
            .unwrap_or_default();
        self.0.push((name, value));
        self
    }

    pub fn references(mut self, name: &'static str, values: &[RecordId]) -> Self {
        self.0
            .extend(values.iter().map(|id| (name, id.to_string())));
        self
    }

    pub fn flag(mut self, name: &'static str, value: bool) -> Self {
        self.0.push((name, value.to_string()));
        self
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Parse a single foreign-key input. Empty input clears the reference.
pub fn parse_reference(value: &str) -> Option<RecordId> {
    let id = RecordId::new(value);
    (!id.is_placeholder()).then_some(id)
}

/// Parse a comma-separated list of foreign keys, skipping blanks.
pub fn parse_references(value: &str) -> Vec<RecordId> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(RecordId::new)
        .collect()
}

pub fn parse_flag(field: &str, value: &str) -> Result<bool, FieldError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(FieldError::InvalidValue {
            field: field.to_owned(),
            value: value.to_owned(),
        }),
    }
}

/// Identifier accessor shared by the entity impls: placeholders read as `None`.
pub(crate) fn assigned(id: &Option<RecordId>) -> Option<&RecordId> {
    id.as_ref().filter(|id| !id.is_placeholder())
}
