use serde::{Deserialize, Serialize};

use crate::entity::{Entity, FieldError, FormFields, assigned, parse_reference};
use crate::id::RecordId;
use crate::kind::EntityKind;

/// A parts supplier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub contact_person_email: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub phone_number: String,
    #[serde(default)]
    pub address: Option<RecordId>,
}

impl Entity for Supplier {
    const KIND: EntityKind = EntityKind::Supplier;

    fn id(&self) -> Option<&RecordId> {
        assigned(&self.id)
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn form_fields(&self) -> FormFields {
        FormFields::new()
            .text("name", &self.name)
            .text("contact_person_email", &self.contact_person_email)
            .text("phone_number", &self.phone_number)
            .reference("address", self.address.as_ref())
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        match name {
            "name" => self.name = value.to_owned(),
            "contact_person_email" => self.contact_person_email = value.to_owned(),
            "phone_number" => self.phone_number = value.to_owned(),
            "address" => self.address = parse_reference(value),
            other => return Err(FieldError::UnknownField(other.to_owned())),
        }
        Ok(())
    }
}
