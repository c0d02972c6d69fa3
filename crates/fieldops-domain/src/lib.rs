//! Entity types managed by the field-service admin client.
//!
//! This crate contains only pure types with no HTTP or runtime dependencies.
//! Every record is flat: foreign keys are stored as [`id::RecordId`] values and
//! resolved against separately fetched lists by the admin crate.

pub mod address;
pub mod customer;
pub mod entity;
pub mod id;
pub mod invoice;
pub mod kind;
pub mod part;
pub mod service_request;
pub mod supplier;
pub mod technician;
pub mod wire;

pub use address::Address;
pub use customer::Customer;
pub use entity::{Entity, FieldError, FormFields};
pub use id::RecordId;
pub use invoice::Invoice;
pub use kind::EntityKind;
pub use part::Part;
pub use service_request::ServiceRequest;
pub use supplier::Supplier;
pub use technician::ServiceTechnician;
