//! Invoices billing service requests and parts.

use serde::{Deserialize, Serialize};

use crate::entity::{
    Entity, FieldError, FormFields, assigned, parse_flag, parse_reference, parse_references,
};
use crate::id::RecordId;
use crate::kind::EntityKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub total_amount: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_flag")]
    pub payment_status: bool,
    #[serde(default)]
    pub service_requests: Vec<RecordId>,
    #[serde(default)]
    pub parts: Vec<RecordId>,
    #[serde(default)]
    pub billing_address: Option<RecordId>,
    #[serde(default)]
    pub shipping_address: Option<RecordId>,
}

impl Entity for Invoice {
    const KIND: EntityKind = EntityKind::Invoice;

    fn id(&self) -> Option<&RecordId> {
        assigned(&self.id)
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn form_fields(&self) -> FormFields {
        FormFields::new()
            .text("name", &self.name)
            .text("total_amount", &self.total_amount)
            .flag("payment_status", self.payment_status)
            .references("service_requests", &self.service_requests)
            .references("parts", &self.parts)
            .reference("billing_address", self.billing_address.as_ref())
            .reference("shipping_address", self.shipping_address.as_ref())
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        match name {
            "name" => self.name = value.to_owned(),
            "total_amount" => self.total_amount = value.to_owned(),
            "payment_status" => self.payment_status = parse_flag(name, value)?,
            "service_requests" => self.service_requests = parse_references(value),
            "parts" => self.parts = parse_references(value),
            "billing_address" => self.billing_address = parse_reference(value),
            "shipping_address" => self.shipping_address = parse_reference(value),
            other => return Err(FieldError::UnknownField(other.to_owned())),
        }
        Ok(())
    }
}
