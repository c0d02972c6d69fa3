//! Service technicians (user accounts on the server side).

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, FieldError, FormFields, assigned};
use crate::id::RecordId;
use crate::kind::EntityKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceTechnician {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub username: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub first_name: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub last_name: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub specialization: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub password: String,
    #[serde(default, deserialize_with = "crate::wire::lenient_text")]
    pub phone_number: String,
    // Server-managed account fields: read, never written back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<RecordId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_permissions: Vec<RecordId>,
}

impl Entity for ServiceTechnician {
    const KIND: EntityKind = EntityKind::ServiceTechnician;

    fn id(&self) -> Option<&RecordId> {
        assigned(&self.id)
    }

    fn label(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn form_fields(&self) -> FormFields {
        FormFields::new()
            .text("username", &self.username)
            .text("first_name", &self.first_name)
            .text("last_name", &self.last_name)
            .text("specialization", &self.specialization)
            .text("email", &self.email)
            .text("password", &self.password)
            .text("phone_number", &self.phone_number)
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        let slot = match name {
            "username" => &mut self.username,
            "first_name" => &mut self.first_name,
            "last_name" => &mut self.last_name,
            "specialization" => &mut self.specialization,
            "email" => &mut self.email,
            "password" => &mut self.password,
            "phone_number" => &mut self.phone_number,
            other => return Err(FieldError::UnknownField(other.to_owned())),
        };
        *slot = value.to_owned();
        Ok(())
    }
}
