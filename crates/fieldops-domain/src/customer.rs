//! Customers and the service requests they have raised.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, FieldError, FormFields, assigned, parse_reference, parse_references};
use crate::id::RecordId;
use crate::kind::EntityKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub surname: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub phone_number: String,
    /// References an [`Address`](crate::Address).
    #[serde(default)]
    pub address: Option<RecordId>,
    /// References [`ServiceRequest`](crate::ServiceRequest)s.
    #[serde(default)]
    pub service_requests: Vec<RecordId>,
}

impl Entity for Customer {
    const KIND: EntityKind = EntityKind::Customer;

    fn id(&self) -> Option<&RecordId> {
        assigned(&self.id)
    }

    fn label(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    fn form_fields(&self) -> FormFields {
        FormFields::new()
            .text("name", &self.name)
            .text("surname", &self.surname)
            .text("email", &self.email)
            .text("phone_number", &self.phone_number)
            .reference("address", self.address.as_ref())
            .references("service_requests", &self.service_requests)
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        match name {
            "name" => self.name = value.to_owned(),
            "surname" => self.surname = value.to_owned(),
            "email" => self.email = value.to_owned(),
            "phone_number" => self.phone_number = value.to_owned(),
            "address" => self.address = parse_reference(value),
            "service_requests" => self.service_requests = parse_references(value),
            other => return Err(FieldError::UnknownField(other.to_owned())),
        }
        Ok(())
    }
}
