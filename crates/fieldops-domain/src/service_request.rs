//! Service requests raised by customers and owned by technicians.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, FieldError, FormFields, assigned, parse_reference};
use crate::id::RecordId;
use crate::kind::EntityKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub price: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub tax: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub requested_at: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub completion_deadline: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub priority: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub state: String,
    /// References a [`Customer`](crate::Customer).
    #[serde(default)]
    pub requested_by: Option<RecordId>,
    /// References a [`ServiceTechnician`](crate::ServiceTechnician).
    #[serde(default)]
    pub owned_by: Option<RecordId>,
    #[serde(default)]
    pub billing_address: Option<RecordId>,
    #[serde(default)]
    pub shipping_address: Option<RecordId>,
}

impl Entity for ServiceRequest {
    const KIND: EntityKind = EntityKind::ServiceRequest;

    fn id(&self) -> Option<&RecordId> {
        assigned(&self.id)
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn form_fields(&self) -> FormFields {
        FormFields::new()
            .text("name", &self.name)
            .text("price", &self.price)
            .text("tax", &self.tax)
            .text("description", &self.description)
            .text("requested_at", &self.requested_at)
            .text("completion_deadline", &self.completion_deadline)
            .text("priority", &self.priority)
            .text("state", &self.state)
            .reference("requested_by", self.requested_by.as_ref())
            .reference("owned_by", self.owned_by.as_ref())
            .reference("billing_address", self.billing_address.as_ref())
            .reference("shipping_address", self.shipping_address.as_ref())
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        match name {
            "name" => self.name = value.to_owned(),
            "price" => self.price = value.to_owned(),
            "tax" => self.tax = value.to_owned(),
            "description" => self.description = value.to_owned(),
            "requested_at" => self.requested_at = value.to_owned(),
            "completion_deadline" => self.completion_deadline = value.to_owned(),
            "priority" => self.priority = value.to_owned(),
            "state" => self.state = value.to_owned(),
            "requested_by" => self.requested_by = parse_reference(value),
            "owned_by" => self.owned_by = parse_reference(value),
            "billing_address" => self.billing_address = parse_reference(value),
            "shipping_address" => self.shipping_address = parse_reference(value),
            other => return Err(FieldError::UnknownField(other.to_owned())),
        }
        Ok(())
    }
}
