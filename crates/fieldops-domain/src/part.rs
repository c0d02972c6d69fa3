//! Spare parts stocked for service work.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, FieldError, FormFields, assigned, parse_reference};
use crate::id::RecordId;
use crate::kind::EntityKind;

/// A stocked part.
///
/// Monetary and quantity fields are kept as the decimal text the server
/// emits so that values survive an edit without rounding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
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
    pub quantity_in_stock: String,
    /// References a [`Supplier`](crate::Supplier). Operators enter the supplier
    /// by name; the admin page translates it to this identifier.
    #[serde(default)]
    pub supplier: Option<RecordId>,
}

impl Entity for Part {
    const KIND: EntityKind = EntityKind::Part;

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
            .text("quantity_in_stock", &self.quantity_in_stock)
            .reference("supplier", self.supplier.as_ref())
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        match name {
            "name" => self.name = value.to_owned(),
            "price" => self.price = value.to_owned(),
            "tax" => self.tax = value.to_owned(),
            "description" => self.description = value.to_owned(),
            "quantity_in_stock" => self.quantity_in_stock = value.to_owned(),
            "supplier" => self.supplier = parse_reference(value),
            other => return Err(FieldError::UnknownField(other.to_owned())),
        }
        Ok(())
    }
}
