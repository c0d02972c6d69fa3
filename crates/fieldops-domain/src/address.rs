//! Postal addresses referenced by customers, suppliers, requests and invoices.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, FieldError, FormFields, assigned};
use crate::id::RecordId;
use crate::kind::EntityKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub address_line1: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub address_line2: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub city: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub state: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub country: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub postal_code: String,
}

impl Entity for Address {
    const KIND: EntityKind = EntityKind::Address;

    fn id(&self) -> Option<&RecordId> {
        assigned(&self.id)
    }

    fn label(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.address_line1, self.address_line2, self.city, self.country
        )
    }

    fn form_fields(&self) -> FormFields {
        FormFields::new()
            .text("address_line1", &self.address_line1)
            .text("address_line2", &self.address_line2)
            .text("city", &self.city)
            .text("state", &self.state)
            .text("country", &self.country)
            .text("postal_code", &self.postal_code)
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        let slot = match name {
            "address_line1" => &mut self.address_line1,
            "address_line2" => &mut self.address_line2,
            "city" => &mut self.city,
            "state" => &mut self.state,
            "country" => &mut self.country,
            "postal_code" => &mut self.postal_code,
            other => return Err(FieldError::UnknownField(other.to_owned())),
        };
        *slot = value.to_owned();
        Ok(())
    }
}
